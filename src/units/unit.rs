
use super::dimension::{BaseDimension, NDIMS};
use crate::util::zip_with;

use itertools::Itertools;
use num::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use num::pow::Pow;
use num::rational::Rational64;
use serde::{Serialize, Serializer};

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// The power to which a base dimension is raised inside a [`Unit`].
/// Always stored in lowest terms.
pub type Exponent = Rational64;

/// A unit is a formal product and quotient of [`BaseDimension`]
/// values, each raised to a rational power.
///
/// Units are plain values. Two units are equal exactly when every
/// base dimension carries the same exponent, so `J / (K kg)` built
/// from joules and `m^2 / s^2 K` built from base units compare equal.
///
/// The `*`, `/` and `pow` operators panic if an exponent overflows
/// `i64`, like integer arithmetic. The `checked_*` methods return
/// `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
  exponents: [Exponent; NDIMS],
}

impl Unit {
  /// The atomic unit for a single base dimension.
  pub fn singleton(base: BaseDimension) -> Self {
    let mut exponents = [Exponent::zero(); NDIMS];
    exponents[base.dimension_index()] = Exponent::one();
    Self { exponents }
  }

  pub fn dimensionless() -> Self {
    Self { exponents: [Exponent::zero(); NDIMS] }
  }

  pub fn exponent(&self, base: BaseDimension) -> Exponent {
    self.exponents[base.dimension_index()]
  }

  pub fn is_dimensionless(&self) -> bool {
    self.is_one()
  }

  /// Two units are compatible if quantities in them can be added or
  /// compared. Since units here carry no scale factor, this is the
  /// same as equality.
  pub fn is_compatible(&self, other: &Unit) -> bool {
    self == other
  }

  /// Non-zero exponents, in [`BaseDimension::ALL`] order.
  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, Exponent)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.exponents.iter().copied())
      .filter(|(_, x)| !x.is_zero())
  }

  pub fn recip(self) -> Self {
    self.pow(-1)
  }

  pub fn checked_mul(self, rhs: Unit) -> Option<Unit> {
    self.try_combine(rhs, |a, b| a.checked_add(&b))
  }

  pub fn checked_div(self, rhs: Unit) -> Option<Unit> {
    self.try_combine(rhs, |a, b| a.checked_sub(&b))
  }

  pub fn checked_pow(self, power: Exponent) -> Option<Unit> {
    self.try_combine(Unit::dimensionless(), |a, _| a.checked_mul(&power))
  }

  pub fn checked_recip(self) -> Option<Unit> {
    self.checked_pow(-Exponent::one())
  }

  fn try_combine<F>(self, rhs: Unit, mut f: F) -> Option<Unit>
  where F: FnMut(Exponent, Exponent) -> Option<Exponent> {
    let mut exponents = self.exponents;
    for (x, y) in exponents.iter_mut().zip(rhs.exponents) {
      *x = f(*x, y)?;
    }
    Some(Unit { exponents })
  }

  /// Renders the unit for a LaTeX math environment, with negative
  /// exponents instead of a fraction.
  pub fn to_latex(&self) -> String {
    if self.is_dimensionless() {
      return String::from("1");
    }
    self.components()
      .map(|(dim, power)| {
        if power.is_one() {
          format!(r"\mathrm{{{}}}", dim.si_symbol())
        } else {
          format!(r"\mathrm{{{}}}^{{{}}}", dim.si_symbol(), power)
        }
      })
      .join(r"\,")
  }
}

/// Formats `symbol` raised to the magnitude of `power`; the sign is
/// conveyed by which side of the fraction the term lands on.
fn format_power(symbol: &str, power: Exponent) -> String {
  let rendered = power.to_string();
  let magnitude = rendered.trim_start_matches('-');
  if magnitude == "1" {
    symbol.to_owned()
  } else if power.is_integer() {
    format!("{}^{}", symbol, magnitude)
  } else {
    format!("{}^({})", symbol, magnitude)
  }
}

impl Default for Unit {
  fn default() -> Self {
    Unit::dimensionless()
  }
}

impl From<BaseDimension> for Unit {
  fn from(base: BaseDimension) -> Self {
    Unit::singleton(base)
  }
}

impl Pow<Exponent> for Unit {
  type Output = Unit;

  fn pow(self, power: Exponent) -> Unit {
    Unit {
      exponents: self.exponents.map(|x| x * power),
    }
  }
}

impl Pow<i64> for Unit {
  type Output = Unit;

  fn pow(self, power: i64) -> Unit {
    self.pow(Exponent::from_integer(power))
  }
}

impl Pow<i64> for BaseDimension {
  type Output = Unit;

  fn pow(self, power: i64) -> Unit {
    Unit::singleton(self).pow(power)
  }
}

impl Mul for Unit {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    Unit {
      exponents: zip_with(self.exponents, rhs.exponents, |a, b| a + b),
    }
  }
}

impl Mul<BaseDimension> for Unit {
  type Output = Self;

  fn mul(self, rhs: BaseDimension) -> Self {
    self * Unit::singleton(rhs)
  }
}

impl Div for Unit {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    Unit {
      exponents: zip_with(self.exponents, rhs.exponents, |a, b| a - b),
    }
  }
}

impl Div<BaseDimension> for Unit {
  type Output = Self;

  fn div(self, rhs: BaseDimension) -> Self {
    self / Unit::singleton(rhs)
  }
}

impl Mul for BaseDimension {
  type Output = Unit;

  fn mul(self, rhs: Self) -> Unit {
    Unit::singleton(self) * Unit::singleton(rhs)
  }
}

impl Mul<Unit> for BaseDimension {
  type Output = Unit;

  fn mul(self, rhs: Unit) -> Unit {
    Unit::singleton(self) * rhs
  }
}

impl Div for BaseDimension {
  type Output = Unit;

  fn div(self, rhs: Self) -> Unit {
    Unit::singleton(self) / Unit::singleton(rhs)
  }
}

impl Div<Unit> for BaseDimension {
  type Output = Unit;

  fn div(self, rhs: Unit) -> Unit {
    Unit::singleton(self) / rhs
  }
}

impl One for Unit {
  fn one() -> Self {
    Unit::dimensionless()
  }

  fn is_one(&self) -> bool {
    self.exponents.iter().all(|x| x.is_zero())
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut numerator: Vec<String> = Vec::new();
    let mut denominator: Vec<String> = Vec::new();
    for (dim, power) in self.components() {
      if power > Exponent::zero() {
        numerator.push(format_power(dim.si_symbol(), power));
      } else {
        denominator.push(format_power(dim.si_symbol(), power));
      }
    }
    if numerator.is_empty() {
      write!(f, "1")?;
    } else {
      write!(f, "{}", numerator.join(" "))?;
    }
    if !denominator.is_empty() {
      write!(f, " / {}", denominator.join(" "))?;
    }
    Ok(())
  }
}

impl Serialize for Unit {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use BaseDimension::*;

  fn half() -> Exponent {
    Exponent::new(1, 2)
  }

  fn sample_units() -> Vec<Unit> {
    vec![
      Unit::one(),
      Unit::from(Mass),
      Length / Time,
      Mass * Length.pow(2) / Time.pow(2),
      Mass / (Temperature.pow(4) * Time.pow(3)),
      Unit::from(AmountOfSubstance).pow(half()) * Temperature,
    ]
  }

  #[test]
  fn test_singleton() {
    let unit = Unit::singleton(Time);
    assert_eq!(unit.exponent(Time), Exponent::one());
    assert_eq!(unit.exponent(Mass), Exponent::zero());
    assert_eq!(unit.components().collect::<Vec<_>>(), vec![(Time, Exponent::one())]);
  }

  #[test]
  fn test_pow() {
    let unit = (Length / Time).pow(-2);
    assert_eq!(unit.exponent(Length), Exponent::from_integer(-2));
    assert_eq!(unit.exponent(Time), Exponent::from_integer(2));
    assert_eq!((Length / Time).pow(0), Unit::one());
  }

  #[test]
  fn test_fractional_pow() {
    let unit = Length.pow(2).pow(half());
    assert_eq!(unit, Unit::from(Length));
    let unit = Unit::from(Mass).pow(half());
    assert_eq!(unit.exponent(Mass), half());
  }

  #[test]
  fn test_pow_one_is_identity() {
    for unit in sample_units() {
      assert_eq!(unit.pow(1), unit);
    }
  }

  #[test]
  fn test_mul_by_reciprocal_is_dimensionless() {
    for unit in sample_units() {
      assert_eq!(unit * unit.pow(-1), Unit::one());
      assert!((unit * unit.recip()).is_dimensionless());
      assert_eq!(unit / unit, Unit::one());
    }
  }

  #[test]
  fn test_mul_is_commutative_and_associative() {
    let units = sample_units();
    for a in &units {
      for b in &units {
        assert_eq!(*a * *b, *b * *a);
        for c in &units {
          assert_eq!((*a * *b) * *c, *a * (*b * *c));
        }
      }
    }
  }

  #[test]
  fn test_mul_and_div() {
    let energy = Mass * Length.pow(2) / Time.pow(2);
    assert_eq!(energy.exponent(Mass), Exponent::one());
    assert_eq!(energy.exponent(Length), Exponent::from_integer(2));
    assert_eq!(energy.exponent(Time), Exponent::from_integer(-2));
    assert_eq!(energy.exponent(Temperature), Exponent::zero());
  }

  #[test]
  fn test_is_compatible() {
    assert!((Length / Time).is_compatible(&(Length * Time.pow(-1))));
    assert!(!(Length / Time).is_compatible(&(Length / Time.pow(2))));
  }

  #[test]
  fn test_display_on_one() {
    assert_eq!(Unit::one().to_string(), "1");
  }

  #[test]
  fn test_display_on_singleton() {
    assert_eq!(Unit::from(Temperature).to_string(), "K");
  }

  #[test]
  fn test_display_on_composite() {
    let unit = Mass * Length.pow(2) / (Time.pow(2) * Temperature);
    assert_eq!(unit.to_string(), "kg m^2 / s^2 K");
    assert_eq!(Time.pow(-1).to_string(), "1 / s");
  }

  #[test]
  fn test_display_on_fractional_power() {
    let unit = Unit::from(Length).pow(half()) / Unit::from(Time).pow(Exponent::new(3, 2));
    assert_eq!(unit.to_string(), "m^(1/2) / s^(3/2)");
  }

  #[test]
  fn test_checked_operations() {
    let velocity = Length / Time;
    assert_eq!(velocity.checked_mul(Unit::from(Time)), Some(Unit::from(Length)));
    assert_eq!(velocity.checked_div(velocity), Some(Unit::one()));
    assert_eq!(velocity.checked_pow(half()), Some(velocity.pow(half())));
    assert_eq!(velocity.checked_recip(), Some(Time / Length));
  }

  #[test]
  fn test_checked_operations_detect_overflow() {
    let huge = Length.pow(i64::MAX);
    assert_eq!(huge.checked_mul(Unit::from(Length)), None);
    assert_eq!(huge.checked_pow(Exponent::from_integer(2)), None);
    assert_eq!(Length.pow(i64::MIN).checked_div(Unit::from(Length)), None);
    assert_eq!(Length.pow(i64::MIN).checked_recip(), None);
  }

  #[test]
  fn test_display_on_extreme_powers() {
    assert_eq!(Length.pow(i64::MAX).to_string(), "m^9223372036854775807");
    assert_eq!(Length.pow(i64::MIN).to_string(), "1 / m^9223372036854775808");
    assert_eq!(Length.pow(i64::MIN).to_latex(), r"\mathrm{m}^{-9223372036854775808}");
  }

  #[test]
  fn test_to_latex() {
    assert_eq!(Unit::one().to_latex(), "1");
    assert_eq!((Length / Time.pow(2)).to_latex(), r"\mathrm{m}\,\mathrm{s}^{-2}");
    assert_eq!(Unit::from(Mass).pow(half()).to_latex(), r"\mathrm{kg}^{1/2}");
  }

  #[test]
  fn test_serialize_as_display_string() {
    let json = serde_json::to_string(&(Mass / Length.pow(3))).unwrap();
    assert_eq!(json, "\"kg / m^3\"");
  }
}
