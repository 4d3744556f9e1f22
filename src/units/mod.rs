
//! Symbolic physical units, built as products of powers of base
//! dimensions.

pub mod dimension;
pub mod si;
pub mod unit;

pub use dimension::{BaseDimension, UnknownDimensionError};
pub use unit::{Exponent, Unit};

/// The atomic unit for the base dimension named by `symbol`, which
/// may be a dimension name (`"length"`) or an SI symbol (`"m"`).
pub fn base(symbol: &str) -> Result<Unit, UnknownDimensionError> {
  BaseDimension::from_symbol(symbol).map(Unit::singleton)
}
