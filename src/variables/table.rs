
//! Reporting tables describing a set of variables.

use super::registry::{Registry, RegistryError};
use crate::units::Unit;

use itertools::Itertools;
use serde::Serialize;

use std::fmt::{self, Formatter, Display};

/// One line of a [`MetadataTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRow {
  pub label: String,
  pub name: String,
  pub description: String,
  pub default: Option<f64>,
  pub unit: Unit,
}

/// Metadata for a chosen list of variables, in the order they were
/// requested. Renders as Markdown through [`Display`] or as the body
/// of a LaTeX `tabular` through [`MetadataTable::to_latex`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataTable {
  rows: Vec<MetadataRow>,
}

const HEADERS: [&str; 5] = ["Symbol", "Name", "Description", "Default", "Unit"];

impl MetadataTable {
  pub fn from_registry<'a, I>(registry: &Registry, names: I) -> Result<Self, RegistryError>
  where I: IntoIterator<Item = &'a str> {
    let rows = names.into_iter()
      .map(|name| -> Result<MetadataRow, RegistryError> {
        let var = registry.lookup(name)?;
        Ok(MetadataRow {
          label: var.display_label().to_owned(),
          name: var.name().to_owned(),
          description: var.description().to_owned(),
          default: var.default(),
          unit: *var.unit(),
        })
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Self { rows })
  }

  pub fn rows(&self) -> &[MetadataRow] {
    &self.rows
  }

  pub fn to_latex(&self) -> String {
    let mut lines = vec![format!("{} \\\\", HEADERS.join(" & ")), String::from(r"\hline")];
    lines.extend(self.rows.iter().map(|row| {
      format!(
        "${}$ & {} & {} & {} & ${}$ \\\\",
        row.label,
        row.name.replace('_', r"\_"),
        row.description,
        format_default(row.default),
        row.unit.to_latex(),
      )
    }));
    lines.join("\n")
  }
}

/// Very small and very large defaults use scientific notation, as in
/// `5.67e-8`.
fn format_default(default: Option<f64>) -> String {
  match default {
    Some(value) if value != 0.0 && !(1e-3..1e6).contains(&value.abs()) => format!("{:e}", value),
    Some(value) => value.to_string(),
    None => String::from("-"),
  }
}

impl Display for MetadataTable {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "| {} |", HEADERS.join(" | "))?;
    writeln!(f, "|{}|", HEADERS.iter().map(|_| "---").join("|"))?;
    for row in &self.rows {
      writeln!(
        f,
        "| ${}$ | {} | {} | {} | {} |",
        row.label,
        row.name,
        row.description,
        format_default(row.default),
        row.unit,
      )?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::variables::physics::thermodynamics;

  fn registry() -> Registry {
    let mut registry = Registry::new();
    thermodynamics::register(&mut registry).unwrap();
    registry
  }

  #[test]
  fn test_rows_follow_requested_order() {
    let table = MetadataTable::from_registry(&registry(), ["T_a", "g"]).unwrap();
    let names: Vec<_> = table.rows().iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["T_a", "g"]);
    assert_eq!(table.rows()[1].default, Some(9.81));
  }

  #[test]
  fn test_unknown_name_fails() {
    let err = MetadataTable::from_registry(&registry(), ["g", "not_a_variable"]).unwrap_err();
    assert_eq!(err, RegistryError::UnknownVariable { name: String::from("not_a_variable") });
  }

  #[test]
  fn test_markdown() {
    let table = MetadataTable::from_registry(&registry(), ["g", "T_a"]).unwrap();
    assert_eq!(
      table.to_string(),
      "| Symbol | Name | Description | Default | Unit |\n\
       |---|---|---|---|---|\n\
       | $g$ | g | Gravitational acceleration (9.81) | 9.81 | m / s^2 |\n\
       | $T_a$ | T_a | Air temperature | - | K |\n",
    );
  }

  #[test]
  fn test_latex() {
    let table = MetadataTable::from_registry(&registry(), ["lambda_E"]).unwrap();
    assert_eq!(
      table.to_latex(),
      "Symbol & Name & Description & Default & Unit \\\\\n\
       \\hline\n\
       $\\lambda_E$ & lambda\\_E & Latent heat of evaporation (2.45e6) & 2.45e6 & $\\mathrm{m}^{2}\\,\\mathrm{s}^{-2}$ \\\\",
    );
  }

  #[test]
  fn test_format_default() {
    assert_eq!(format_default(Some(5.67e-8)), "5.67e-8");
    assert_eq!(format_default(Some(2.45e6)), "2.45e6");
    assert_eq!(format_default(Some(-3.5e7)), "-3.5e7");
    assert_eq!(format_default(Some(1010.0)), "1010");
    assert_eq!(format_default(Some(0.028)), "0.028");
    assert_eq!(format_default(Some(0.0)), "0");
    assert_eq!(format_default(None), "-");
  }

  #[test]
  fn test_markdown_small_default() {
    let table = MetadataTable::from_registry(&registry(), ["sigm"]).unwrap();
    let row = table.to_string().lines().nth(2).unwrap().to_owned();
    assert_eq!(row, r"| $\sigma$ | sigm | Stefan-Boltzmann constant (5.67e-8) | 5.67e-8 | kg / s^3 K^4 |");
  }

  #[test]
  fn test_empty_table_has_only_headers() {
    let table = MetadataTable::from_registry(&registry(), []).unwrap();
    assert!(table.rows().is_empty());
    assert_eq!(table.to_string().lines().count(), 2);
  }
}
