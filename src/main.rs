
//! Command line access to the thermodynamics variable catalog.

use essm::variables::{thermodynamics, MetadataTable, Registry};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "essm-catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the thermodynamics variable catalog", long_about = None)]
struct Cli {
  /// Log level (trace, debug, info, warn, error)
  #[arg(short, long, default_value = "warn")]
  log_level: Level,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the name of every variable
  List,
  /// Print the full descriptor of each named variable as JSON
  Show {
    #[arg(required = true)]
    names: Vec<String>,
  },
  /// Print a metadata table for the named variables, or for all of them
  Table {
    #[arg(short, long, value_enum, default_value_t = TableFormat::Markdown)]
    format: TableFormat,
    names: Vec<String>,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableFormat {
  Markdown,
  Latex,
  Json,
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let subscriber = FmtSubscriber::builder()
    .with_max_level(cli.log_level)
    .with_target(false)
    .with_writer(std::io::stderr)
    .finish();
  tracing::subscriber::set_global_default(subscriber)?;

  let registry = thermodynamics().context("Failed to load the thermodynamics catalog")?;
  match cli.command {
    Commands::List => {
      for name in registry.all_names() {
        println!("{}", name);
      }
    }
    Commands::Show { names } => {
      println!("{}", show(registry, &names)?);
    }
    Commands::Table { format, names } => {
      println!("{}", table(registry, &names, format)?);
    }
  }
  Ok(())
}

fn show(registry: &Registry, names: &[String]) -> anyhow::Result<String> {
  let variables = names.iter()
    .map(|name| registry.lookup(name))
    .collect::<Result<Vec<_>, _>>()?;
  Ok(serde_json::to_string_pretty(&variables)?)
}

fn table(registry: &Registry, names: &[String], format: TableFormat) -> anyhow::Result<String> {
  let table = if names.is_empty() {
    MetadataTable::from_registry(registry, registry.all_names())?
  } else {
    MetadataTable::from_registry(registry, names.iter().map(String::as_str))?
  };
  let output = match format {
    TableFormat::Markdown => table.to_string(),
    TableFormat::Latex => table.to_latex(),
    TableFormat::Json => serde_json::to_string_pretty(&table)?,
  };
  Ok(output)
}
