
//! Named SI units, built once and shared by every variable declared
//! in them.

use super::dimension::BaseDimension::*;
use super::unit::Unit;

use num::One;
use num::pow::Pow;
use once_cell::sync::Lazy;

pub static DIMENSIONLESS: Lazy<Unit> = Lazy::new(Unit::one);

pub static KILOGRAM: Lazy<Unit> = Lazy::new(|| Unit::from(Mass));
pub static METER: Lazy<Unit> = Lazy::new(|| Unit::from(Length));
pub static SECOND: Lazy<Unit> = Lazy::new(|| Unit::from(Time));
pub static KELVIN: Lazy<Unit> = Lazy::new(|| Unit::from(Temperature));
pub static MOLE: Lazy<Unit> = Lazy::new(|| Unit::from(AmountOfSubstance));

pub static NEWTON: Lazy<Unit> = Lazy::new(|| *KILOGRAM * *METER / SECOND.pow(2));
pub static JOULE: Lazy<Unit> = Lazy::new(|| *NEWTON * *METER);
pub static PASCAL: Lazy<Unit> = Lazy::new(|| *NEWTON / METER.pow(2));
pub static WATT: Lazy<Unit> = Lazy::new(|| *JOULE / *SECOND);
