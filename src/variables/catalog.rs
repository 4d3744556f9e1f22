
//! The process-wide thermodynamics catalog.

use super::physics::thermodynamics;
use super::registry::{Registry, RegistryError};

use itertools::Itertools;
use once_cell::sync::OnceCell;
use thiserror::Error;

use std::collections::HashSet;

static THERMODYNAMICS: OnceCell<Registry> = OnceCell::new();

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
  #[error("{0}")]
  Registry(#[from] RegistryError),
  #[error(
    "Export list does not match declarations (missing: [{}], unexported: [{}], duplicated: [{}])",
    .missing.join(", "),
    .unexported.join(", "),
    .duplicated.join(", ")
  )]
  ExportMismatch {
    /// Exported but never declared.
    missing: Vec<String>,
    /// Declared but not exported.
    unexported: Vec<String>,
    /// Exported more than once.
    duplicated: Vec<String>,
  },
}

/// The thermodynamics registry, built and validated against
/// [`thermodynamics::NAMES`] on first use. Every later call returns
/// the same read-only instance.
pub fn thermodynamics() -> Result<&'static Registry, CatalogError> {
  THERMODYNAMICS.get_or_try_init(|| -> Result<Registry, CatalogError> {
    let mut registry = Registry::new();
    thermodynamics::register(&mut registry)?;
    validate_exports(&registry, thermodynamics::NAMES)?;
    tracing::info!(variables = registry.len(), "loaded thermodynamics catalog");
    Ok(registry)
  })
}

/// Checks that `names` lists every key of `registry` exactly once and
/// nothing else.
pub fn validate_exports(registry: &Registry, names: &[&str]) -> Result<(), CatalogError> {
  let exported: HashSet<&str> = names.iter().copied().collect();
  let missing: Vec<String> = names.iter()
    .filter(|name| !registry.contains(name))
    .unique()
    .map(|name| name.to_string())
    .collect();
  let unexported: Vec<String> = registry.all_names()
    .filter(|name| !exported.contains(name))
    .map(str::to_owned)
    .collect();
  let duplicated: Vec<String> = names.iter()
    .duplicates()
    .map(|name| name.to_string())
    .collect();
  if missing.is_empty() && unexported.is_empty() && duplicated.is_empty() {
    Ok(())
  } else {
    let err = CatalogError::ExportMismatch { missing, unexported, duplicated };
    tracing::warn!("{}", err);
    Err(err)
  }
}
