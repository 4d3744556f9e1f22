
//! Named physical quantities and the registries that hold them.

pub mod catalog;
pub mod domain;
pub mod physics;
pub mod registry;
pub mod table;
pub mod variable;

pub use catalog::{thermodynamics, CatalogError};
pub use domain::{Domain, UnknownDomainError};
pub use registry::{Registry, RegistryError};
pub use table::{MetadataRow, MetadataTable};
pub use variable::Variable;
