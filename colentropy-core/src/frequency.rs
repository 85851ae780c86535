//! Per-column value frequency tabulation.

use log::debug;
use std::collections::HashMap;

use crate::config::ColumnKeying;
use crate::table::{Cell, Table};

/// Counts of every distinct observed value for one column.
///
/// Names and values are raw bytes, so distinct non-UTF-8 values stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnCounts {
    pub name: Cell,
    pub counts: HashMap<Cell, u64>,
}

impl ColumnCounts {
    fn new(name: &[u8]) -> Self {
        Self {
            name: name.to_vec(),
            counts: HashMap::new(),
        }
    }

    /// Column name with invalid UTF-8 replaced, for reporting.
    pub fn display_name(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    /// Number of cells tallied for this column.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct values observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

/// Value counts for every column, held in header order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    columns: Vec<ColumnCounts>,
}

impl FrequencyTable {
    /// Tallies every cell of `table`.
    ///
    /// Cells past the header width are dropped. Short rows leave the missing
    /// trailing columns untouched.
    pub fn tabulate(table: &Table, keying: ColumnKeying) -> Self {
        let mut columns: Vec<ColumnCounts> = Vec::new();
        // Header slot -> index into `columns`.
        let mut slots: Vec<usize> = Vec::with_capacity(table.columns.len());

        match keying {
            ColumnKeying::ByName => {
                let mut by_name: HashMap<&[u8], usize> = HashMap::new();
                for name in &table.columns {
                    let idx = *by_name.entry(name.as_slice()).or_insert_with(|| {
                        columns.push(ColumnCounts::new(name));
                        columns.len() - 1
                    });
                    slots.push(idx);
                }
            }
            ColumnKeying::ByPosition => {
                for name in &table.columns {
                    columns.push(ColumnCounts::new(name));
                    slots.push(columns.len() - 1);
                }
            }
        }

        let mut dropped = 0usize;
        for row in &table.rows {
            if row.len() > slots.len() {
                dropped += row.len() - slots.len();
            }
            for (cell, &slot) in row.iter().zip(slots.iter()) {
                *columns[slot].counts.entry(cell.clone()).or_insert(0) += 1;
            }
        }

        if dropped > 0 {
            debug!("Dropped {} cells beyond the header width", dropped);
        }
        debug!(
            "Tabulated {} rows into {} columns ({} header slots)",
            table.rows.len(),
            columns.len(),
            slots.len()
        );

        Self { columns }
    }

    /// Columns in header order of first appearance.
    pub fn columns(&self) -> &[ColumnCounts] {
        &self.columns
    }

    /// Counts for the first column called `name`.
    pub fn column(&self, name: impl AsRef<[u8]>) -> Option<&ColumnCounts> {
        let name = name.as_ref();
        self.columns.iter().find(|c| c.name == name)
    }

    /// Shortcut for a single value's count.
    pub fn count(&self, name: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> u64 {
        self.column(name)
            .and_then(|c| c.counts.get(value.as_ref()).copied())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
