
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// Physical axes from which every [`Unit`](super::Unit) in this crate
/// is composed.
///
/// These are the SI base quantities needed by thermodynamic
/// variables. Electrical current and luminous intensity never appear
/// in the catalog and are not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
  Mass,
  Length,
  Time,
  Temperature,
  AmountOfSubstance,
}

pub const NDIMS: usize = 5;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown base dimension '{symbol}'")]
pub struct UnknownDimensionError {
  pub symbol: String,
}

/// Every spelling accepted by [`BaseDimension::from_symbol`]: the
/// dimension names and the SI base-unit symbols.
static DIMENSION_SYMBOLS: phf::Map<&'static str, BaseDimension> = phf::phf_map! {
  "mass" => BaseDimension::Mass,
  "length" => BaseDimension::Length,
  "time" => BaseDimension::Time,
  "temperature" => BaseDimension::Temperature,
  "amount" => BaseDimension::AmountOfSubstance,
  "substance" => BaseDimension::AmountOfSubstance,
  "kg" => BaseDimension::Mass,
  "m" => BaseDimension::Length,
  "s" => BaseDimension::Time,
  "K" => BaseDimension::Temperature,
  "mol" => BaseDimension::AmountOfSubstance,
};

impl UnknownDimensionError {
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into() }
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Mass,
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Temperature,
    BaseDimension::AmountOfSubstance,
  ];

  pub fn from_symbol(symbol: &str) -> Result<Self, UnknownDimensionError> {
    DIMENSION_SYMBOLS.get(symbol)
      .copied()
      .ok_or_else(|| UnknownDimensionError::new(symbol))
  }

  pub(super) fn dimension_index(self) -> usize {
    match self {
      BaseDimension::Mass => 0,
      BaseDimension::Length => 1,
      BaseDimension::Time => 2,
      BaseDimension::Temperature => 3,
      BaseDimension::AmountOfSubstance => 4,
    }
  }

  /// The symbol of the coherent SI unit for this dimension.
  pub fn si_symbol(self) -> &'static str {
    match self {
      BaseDimension::Mass => "kg",
      BaseDimension::Length => "m",
      BaseDimension::Time => "s",
      BaseDimension::Temperature => "K",
      BaseDimension::AmountOfSubstance => "mol",
    }
  }
}

impl FromStr for BaseDimension {
  type Err = UnknownDimensionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    BaseDimension::from_symbol(s)
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::AmountOfSubstance => write!(f, "amount"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_symbol_accepts_names_and_si_symbols() {
    assert_eq!(BaseDimension::from_symbol("mass"), Ok(BaseDimension::Mass));
    assert_eq!(BaseDimension::from_symbol("kg"), Ok(BaseDimension::Mass));
    assert_eq!(BaseDimension::from_symbol("K"), Ok(BaseDimension::Temperature));
    assert_eq!(BaseDimension::from_symbol("substance"), Ok(BaseDimension::AmountOfSubstance));
    assert_eq!("mol".parse::<BaseDimension>(), Ok(BaseDimension::AmountOfSubstance));
  }

  #[test]
  fn test_from_symbol_rejects_unknown() {
    assert_eq!(
      BaseDimension::from_symbol("current"),
      Err(UnknownDimensionError::new("current")),
    );
    // Symbols are case-sensitive, as in SI.
    assert!(BaseDimension::from_symbol("k").is_err());
    assert!(BaseDimension::from_symbol("").is_err());
  }

  #[test]
  fn test_display_round_trips_through_from_symbol() {
    for dim in BaseDimension::ALL {
      assert_eq!(BaseDimension::from_symbol(&dim.to_string()), Ok(dim));
      assert_eq!(BaseDimension::from_symbol(dim.si_symbol()), Ok(dim));
    }
  }

  #[test]
  fn test_dimension_index_is_position_in_all() {
    for (index, dim) in BaseDimension::ALL.into_iter().enumerate() {
      assert_eq!(dim.dimension_index(), index);
    }
  }
}
