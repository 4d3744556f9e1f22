
use super::domain::Domain;
use crate::units::Unit;

use serde::Serialize;

use std::fmt::{self, Formatter, Display};

/// A named physical quantity: its unit, the domain of its values, an
/// optional constant default, and documentation.
///
/// Variables are immutable once built. The `default`, when present,
/// is a bare number denominated in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
  name: String,
  unit: Unit,
  domain: Domain,
  default: Option<f64>,
  description: String,
  display_label: String,
}

impl Variable {
  /// A real-valued variable with no default.
  pub fn new(
    name: impl Into<String>,
    unit: Unit,
    description: impl Into<String>,
    display_label: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      unit,
      domain: Domain::default(),
      default: None,
      description: description.into(),
      display_label: display_label.into(),
    }
  }

  pub fn with_domain(mut self, domain: Domain) -> Self {
    self.domain = domain;
    self
  }

  pub fn with_default(mut self, default: f64) -> Self {
    self.default = Some(default);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn unit(&self) -> &Unit {
    &self.unit
  }

  pub fn domain(&self) -> Domain {
    self.domain
  }

  pub fn default(&self) -> Option<f64> {
    self.default
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  /// LaTeX rendering of the symbol, e.g. `\lambda_E` for `lambda_E`.
  pub fn display_label(&self) -> &str {
    &self.display_label
  }
}

impl Display for Variable {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}
