// colentropy/src/cli.rs
//! Command-line interface definition for the colentropy application.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use colentropy_core::{AnalysisConfig, ColumnKeying, ColumnOrder, EntropyUnit, Layout};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "colentropy",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute the Shannon entropy of each column of a CSV file",
    long_about = "colentropy reads a comma-separated file whose first line names the columns, treats every column as a categorical distribution over its observed values, and writes one `name,entropy` line per column to the output file.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Input CSV file. The first line is the header.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output file receiving one `name,value` line per column.
    #[arg(value_name = "OUTPUT_CSV")]
    pub output: PathBuf,

    /// Path to a YAML analysis configuration file.
    #[arg(long = "config", value_name = "FILE", env = "COLENTROPY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Unit of the reported entropy.
    #[arg(long = "unit", value_name = "UNIT")]
    pub unit: Option<UnitChoice>,

    /// Order of columns in the output.
    #[arg(long = "order", value_name = "ORDER")]
    pub order: Option<OrderChoice>,

    /// Output layout.
    #[arg(long = "layout", value_name = "LAYOUT")]
    pub layout: Option<LayoutChoice>,

    /// Render values with a fixed number of decimal places.
    #[arg(long = "precision", value_name = "N")]
    pub precision: Option<usize>,

    /// Also write entropy divided by its maximum for the column.
    #[arg(long = "normalized")]
    pub normalized: bool,

    /// Treat repeated header names as separate columns instead of merging them.
    #[arg(long = "positional-columns")]
    pub positional_columns: bool,

    /// Suppress all log output.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum UnitChoice {
    /// Base-2 logarithm.
    Bits,
    /// Natural logarithm.
    Nats,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OrderChoice {
    /// Header order.
    Header,
    /// Alphabetical by column name.
    Name,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum LayoutChoice {
    /// One `name,value` line per column.
    Long,
    /// A line of names then a line of values.
    Wide,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(unit) = self.unit {
            config.unit = match unit {
                UnitChoice::Bits => EntropyUnit::Bits,
                UnitChoice::Nats => EntropyUnit::Nats,
            };
        }
        if let Some(order) = self.order {
            config.order = match order {
                OrderChoice::Header => ColumnOrder::Header,
                OrderChoice::Name => ColumnOrder::Name,
            };
        }
        if let Some(layout) = self.layout {
            config.output.layout = match layout {
                LayoutChoice::Long => Layout::Long,
                LayoutChoice::Wide => Layout::Wide,
            };
        }
        if self.precision.is_some() {
            config.output.precision = self.precision;
        }
        if self.normalized {
            config.output.normalized = true;
        }
        if self.positional_columns {
            config.keying = ColumnKeying::ByPosition;
        }
        config
    }
}
