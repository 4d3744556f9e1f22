//! Thermodynamic and atmospheric variables for symbolic physics,
//! each carrying a unit built from SI base dimensions.

pub mod error;
pub mod units;
pub mod util;
pub mod variables;

pub use error::Error;
