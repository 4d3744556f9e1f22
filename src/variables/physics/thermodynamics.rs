
//! General and atmospheric thermodynamics variables.

use crate::units::si::{JOULE, KELVIN, KILOGRAM, METER, MOLE, PASCAL, SECOND};
use crate::units::Unit;
use crate::variables::registry::{Registry, RegistryError};
use crate::variables::variable::Variable;

use num::One;
use num::pow::Pow;

/// Every name declared by [`register`], in declaration order.
pub const NAMES: &[&str] = &[
  "alpha_a",
  "c_pa",
  "c_pamol",
  "D_va",
  "g",
  "Gr",
  "h_c",
  "k_a",
  "lambda_E",
  "Le",
  "M_N2",
  "M_O2",
  "M_w",
  "nu_a",
  "Nu",
  "P_a",
  "Pr",
  "P_N2",
  "P_O2",
  "P_wa",
  "P_was",
  "Re_c",
  "Re",
  "rho_a",
  "R_mol",
  "R_s",
  "Sh",
  "sigm",
  "T_a",
  "v_w",
];

pub fn variables() -> Vec<Variable> {
  let (joule, kelvin, kilogram, meter, mole, pascal, second) =
    (*JOULE, *KELVIN, *KILOGRAM, *METER, *MOLE, *PASCAL, *SECOND);
  let one = Unit::one();
  vec![
    Variable::new("alpha_a", meter.pow(2) / second, "Thermal diffusivity of dry air", r"\alpha_a"),
    Variable::new("c_pa", joule / (kelvin * kilogram), "Specific heat of dry air.", "c_{pa}")
      .with_default(1010.0),
    Variable::new("c_pamol", joule / (kelvin * mole), "Molar specific heat of dry air.", "c_{pa,mol}")
      .with_default(29.19),
    Variable::new("D_va", meter.pow(2) / second, "Binary diffusion coefficient of water vapour in air", "D_{va}"),
    Variable::new("g", meter / second.pow(2), "Gravitational acceleration (9.81)", "g")
      .with_default(9.81),
    Variable::new("Gr", one, "Grashof number", "N_{Gr_L}"),
    Variable::new("h_c", joule / (kelvin * meter.pow(2) * second), "Average 1-sided convective transfer coefficient", "h_c"),
    Variable::new("k_a", joule / (kelvin * meter * second), "Thermal conductivity of dry air", "k_a"),
    Variable::new("lambda_E", joule / kilogram, "Latent heat of evaporation (2.45e6)", r"\lambda_E")
      .with_default(2.45e6),
    Variable::new("Le", one, "Lewis number", "N_{Le}"),
    Variable::new("M_N2", kilogram / mole, "Molar mass of nitrogen (0.028)", "M_{N_2}")
      .with_default(0.028),
    Variable::new("M_O2", kilogram / mole, "Molar mass of oxygen (0.032)", "M_{O_2}")
      .with_default(0.032),
    Variable::new("M_w", kilogram / mole, "Molar mass of water (0.018)", "M_w")
      .with_default(0.018),
    Variable::new("nu_a", meter.pow(2) / second, "Kinematic viscosity of dry air", r"\nu_a"),
    Variable::new("Nu", one, "Nusselt number", "N_{Nu_L}"),
    Variable::new("P_a", pascal, "Air pressure", "P_a"),
    Variable::new("Pr", one, "Prandtl number (0.71)", "N_{Pr}")
      .with_default(0.71),
    Variable::new("P_N2", pascal, "Partial pressure of nitrogen in the atmosphere", "P_{N2}"),
    Variable::new("P_O2", pascal, "Partial pressure of oxygen in the atmosphere", "P_{O2}"),
    Variable::new("P_wa", pascal, "Vapour pressure in the atmosphere", "P_{wa}"),
    Variable::new("P_was", pascal, "Saturation vapour pressure at air temperature", "P_{was}"),
    Variable::new("Re_c", one, "Critical Reynolds number for the onset of turbulence", "N_{Re_c}"),
    Variable::new("Re", one, "Reynolds number", "N_{Re_L}"),
    Variable::new("rho_a", kilogram / meter.pow(3), "Density of dry air", r"\rho_a"),
    Variable::new("R_mol", joule / (kelvin * mole), "Molar gas constant (8.314472)", "R_{mol}")
      .with_default(8.314472),
    Variable::new("R_s", joule / (meter.pow(2) * second), "Solar shortwave flux", "R_s"),
    Variable::new("Sh", one, "Sherwood number", "N_{Sh_L}"),
    Variable::new("sigm", joule / (kelvin.pow(4) * meter.pow(2) * second), "Stefan-Boltzmann constant (5.67e-8)", r"\sigma")
      .with_default(5.67e-8),
    Variable::new("T_a", kelvin, "Air temperature", "T_a"),
    Variable::new("v_w", meter / second, "Wind velocity", "v_w"),
  ]
}

/// Declares every thermodynamics variable in `registry`.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
  for variable in variables() {
    registry.declare(variable)?;
  }
  Ok(())
}
