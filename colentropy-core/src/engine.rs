// colentropy-core/src/engine.rs
//! The entropy engine: turns a frequency table into an ordered per-column report.
//!
//! The engine is pure. It performs no I/O and holds no state beyond its
//! configuration, so one instance can be reused for any number of tables.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use colentropy_math::{entropy_with_base, max_entropy, LogBase};

use crate::config::{AnalysisConfig, ColumnOrder};
use crate::frequency::{ColumnCounts, FrequencyTable};
use crate::table::Table;

/// Entropy and supporting counts for a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnEntropy {
    pub name: String,
    /// Shannon entropy in the configured unit.
    pub entropy: f64,
    /// Number of distinct values observed.
    pub distinct: usize,
    /// Number of cells tallied.
    pub total: u64,
    /// Largest entropy reachable with `distinct` values, same unit as `entropy`.
    pub max_entropy: f64,
}

impl ColumnEntropy {
    /// `entropy / max_entropy`, or 0.0 for a column with at most one distinct value.
    pub fn normalized(&self) -> f64 {
        if self.max_entropy > 0.0 {
            self.entropy / self.max_entropy
        } else {
            0.0
        }
    }
}

/// Entropy of every column, in report order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropyReport {
    columns: Vec<ColumnEntropy>,
}

impl EntropyReport {
    /// Entropy of the first column called `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.entropy)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnEntropy> {
        self.columns.iter()
    }

    pub fn columns(&self) -> &[ColumnEntropy] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntropyReport {
    type Item = &'a ColumnEntropy;
    type IntoIter = std::slice::Iter<'a, ColumnEntropy>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Computes per-column entropy according to an [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct EntropyEngine {
    config: AnalysisConfig,
}

impl EntropyEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Tabulates `table` and computes its report.
    pub fn analyze(&self, table: &Table) -> EntropyReport {
        let frequencies = FrequencyTable::tabulate(table, self.config.keying);
        self.compute(&frequencies)
    }

    /// Computes the report for an already tabulated table.
    pub fn compute(&self, frequencies: &FrequencyTable) -> EntropyReport {
        let base: LogBase = self.config.unit.into();

        let mut columns: Vec<ColumnEntropy> = frequencies
            .columns()
            .iter()
            .map(|column| column_entropy(column, base))
            .collect();

        if self.config.order == ColumnOrder::Name {
            // Stable, so duplicate names keep their header order.
            columns.sort_by(|a, b| a.name.cmp(&b.name));
        }

        for column in &columns {
            debug!(
                "Column '{}': {} distinct of {} -> {}",
                column.name, column.distinct, column.total, column.entropy
            );
        }
        info!("Computed entropy for {} columns", columns.len());

        EntropyReport { columns }
    }
}

fn column_entropy(column: &ColumnCounts, base: LogBase) -> ColumnEntropy {
    let distinct = column.distinct();
    ColumnEntropy {
        name: column.display_name(),
        entropy: entropy_with_base(column.counts.values().copied(), base),
        distinct,
        total: column.total(),
        max_entropy: max_entropy(distinct, base),
    }
}
