
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// The set of values a variable may take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
  #[default]
  Real,
  Integer,
  Complex,
  Boolean,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown variable domain '{input}'")]
pub struct UnknownDomainError {
  pub input: String,
}

impl Domain {
  pub const ALL: [Domain; 4] = [Domain::Real, Domain::Integer, Domain::Complex, Domain::Boolean];

  pub fn name(self) -> &'static str {
    match self {
      Domain::Real => "real",
      Domain::Integer => "integer",
      Domain::Complex => "complex",
      Domain::Boolean => "boolean",
    }
  }
}

impl FromStr for Domain {
  type Err = UnknownDomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Domain::ALL.into_iter()
      .find(|domain| domain.name() == s)
      .ok_or_else(|| UnknownDomainError { input: s.to_owned() })
  }
}

impl Display for Domain {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
