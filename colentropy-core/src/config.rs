//! Configuration management for `colentropy-core`.
//!
//! This module defines the knobs that shape an analysis run: logarithm base, how
//! duplicate header names are keyed, report ordering and output formatting. The
//! defaults reproduce the plain `name,value` behavior; a YAML file can override them.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use colentropy_math::LogBase;

use crate::errors::{ColEntropyError, Result};

/// Logarithm base used when computing entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropyUnit {
    #[default]
    Bits,
    Nats,
}

impl From<EntropyUnit> for LogBase {
    fn from(unit: EntropyUnit) -> Self {
        match unit {
            EntropyUnit::Bits => LogBase::Bits,
            EntropyUnit::Nats => LogBase::Nats,
        }
    }
}

/// How header slots map to frequency-table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKeying {
    /// Columns are keyed by name; duplicate names share one set of counts.
    #[default]
    ByName,
    /// Every header slot is an independent column, even when names repeat.
    ByPosition,
}

/// Order in which columns appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnOrder {
    /// First appearance in the header line.
    #[default]
    Header,
    /// Lexicographic by column name.
    Name,
}

/// Shape of the written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One `name,value` line per column.
    #[default]
    Long,
    /// A line of names followed by a line of values.
    Wide,
}

/// Formatting options for the report writer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputOptions {
    pub layout: Layout,
    /// Fixed number of decimal places. `None` uses the shortest round-trip form.
    pub precision: Option<usize>,
    /// Append entropy divided by its maximum for the column's distinct count.
    pub normalized: bool,
}

/// Represents the top-level configuration structure for an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub unit: EntropyUnit,
    pub keying: ColumnKeying,
    pub order: ColumnOrder,
    pub output: OutputOptions,
}

/// Upper bound on `precision`; `f64` carries no meaningful digits past this.
pub const MAX_PRECISION: usize = 17;

impl AnalysisConfig {
    /// Loads a configuration from a YAML file. Missing keys keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading analysis config from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| {
            ColEntropyError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml_str(&text)
            .map_err(|e| ColEntropyError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: AnalysisConfig = if text.trim().is_empty() {
            AnalysisConfig::default()
        } else {
            serde_yml::from_str(text).map_err(|e| ColEntropyError::Config(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects option combinations that cannot be rendered.
    pub fn validate(&self) -> Result<()> {
        if let Some(precision) = self.output.precision {
            if precision > MAX_PRECISION {
                return Err(ColEntropyError::Config(format!(
                    "precision {} exceeds maximum allowed ({})",
                    precision, MAX_PRECISION
                )));
            }
        }
        Ok(())
    }
}
