//! Comma-separated table parsing.
//!
//! Splitting is on the literal `,` only: no quoting, escaping or trimming. Cells
//! are kept as raw bytes so input in any 8-bit encoding tabulates unchanged.

use log::debug;
use std::path::Path;

use crate::errors::{ColEntropyError, Result};

/// Raw bytes of one cell or column name.
pub type Cell = Vec<u8>;

/// A header line of column names plus row-major cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Parses UTF-8 text. See [`Table::parse_bytes`].
    pub fn parse(text: &str) -> Self {
        Self::parse_bytes(text.as_bytes())
    }

    /// Parses raw bytes. The first line is the header; every later line is a row.
    ///
    /// A single trailing newline does not produce an extra row, but an interior
    /// empty line yields a row holding one empty cell.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            debug!("Parsed empty input");
            return Self::default();
        }

        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let mut lines = body.split(|&b| b == b'\n');

        let columns = lines.next().map(split_cells).unwrap_or_default();
        let rows: Vec<Vec<Cell>> = lines.map(split_cells).collect();

        debug!("Parsed table with {} columns and {} rows", columns.len(), rows.len());
        Self { columns, rows }
    }

    /// Reads and parses a file in one go.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ColEntropyError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse_bytes(&bytes))
    }

    /// Column names, with invalid UTF-8 replaced for display.
    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }
}

fn split_cells(line: &[u8]) -> Vec<Cell> {
    line.split(|&b| b == b',').map(<[u8]>::to_vec).collect()
}
