
use crate::units::UnknownDimensionError;
use crate::variables::{CatalogError, RegistryError, UnknownDomainError};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  UnknownDimension(#[from] UnknownDimensionError),
  #[error("{0}")]
  UnknownDomain(#[from] UnknownDomainError),
  #[error("{0}")]
  Registry(#[from] RegistryError),
  #[error("{0}")]
  Catalog(#[from] CatalogError),
}
