//! Write-once store of variable descriptors, keyed by name.

use super::variable::Variable;
use crate::units::Unit;

use thiserror::Error;

use std::collections::HashMap;

/// A set of [`Variable`] descriptors with unique names.
///
/// Names may be declared once and never removed or redeclared.
/// Iteration follows declaration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
  variables: Vec<Variable>,
  index: HashMap<String, usize>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
  #[error("Variable '{name}' is already declared")]
  DuplicateName { name: String },
  #[error("No such variable '{name}'")]
  UnknownVariable { name: String },
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `variable` under its own name. Fails, leaving the existing
  /// declaration in place, if the name is taken.
  pub fn declare(&mut self, variable: Variable) -> Result<&Variable, RegistryError> {
    if self.index.contains_key(variable.name()) {
      return Err(RegistryError::DuplicateName { name: variable.name().to_owned() });
    }
    tracing::debug!(variable = variable.name(), unit = %variable.unit(), "declared variable");
    let position = self.variables.len();
    self.index.insert(variable.name().to_owned(), position);
    self.variables.push(variable);
    Ok(&self.variables[position])
  }

  pub fn lookup(&self, name: &str) -> Result<&Variable, RegistryError> {
    match self.index.get(name) {
      Some(&position) => Ok(&self.variables[position]),
      None => Err(RegistryError::UnknownVariable { name: name.to_owned() }),
    }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.index.contains_key(name)
  }

  pub fn all_names(&self) -> impl Iterator<Item = &str> + '_ {
    self.variables.iter().map(Variable::name)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Variable> + '_ {
    self.variables.iter()
  }

  /// Every variable measured in exactly `unit`.
  pub fn with_unit(&self, unit: Unit) -> impl Iterator<Item = &Variable> + '_ {
    self.variables.iter().filter(move |var| *var.unit() == unit)
  }

  pub fn len(&self) -> usize {
    self.variables.len()
  }

  pub fn is_empty(&self) -> bool {
    self.variables.is_empty()
  }
}

impl<'a> IntoIterator for &'a Registry {
  type Item = &'a Variable;
  type IntoIter = std::slice::Iter<'a, Variable>;

  fn into_iter(self) -> Self::IntoIter {
    self.variables.iter()
  }
}
