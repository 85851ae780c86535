// colentropy-core/src/lib.rs
//! # colentropy Core Library
//!
//! `colentropy-core` computes the Shannon entropy of every column of a
//! comma-separated table, treating each column as a categorical distribution over
//! its observed string values.
//!
//! The pipeline is `text -> Table -> FrequencyTable -> EntropyReport`, and every
//! stage is a pure function of the previous one. File reading and writing live at
//! the edges ([`Table::from_path`], [`write_report_to_path`]) and report failures
//! as [`ColEntropyError`] values; nothing here exits the process.
//!
//! ## Modules
//!
//! * `table`: Literal comma splitting of a header line and data rows.
//! * `frequency`: Per-column value counts.
//! * `engine`: The `EntropyEngine` and its ordered `EntropyReport`.
//! * `report`: `name,value` (or wide) rendering of a report.
//! * `config`: `AnalysisConfig`, loadable from YAML.
//! * `headless`: One-shot helpers for in-memory text.
//! * `errors`: The crate error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use colentropy_core::{headless_column_entropy, AnalysisConfig};
//!
//! let report = headless_column_entropy(
//!     "color,size\nred,S\nred,M\nblue,S\nblue,M\n",
//!     &AnalysisConfig::default(),
//! );
//! assert!((report.get("color").unwrap() - 1.0).abs() < 1e-9);
//! assert!((report.get("size").unwrap() - 1.0).abs() < 1e-9);
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod frequency;
pub mod headless;
pub mod report;
pub mod table;

/// Re-exports the configuration types.
pub use config::{AnalysisConfig, ColumnKeying, ColumnOrder, EntropyUnit, Layout, OutputOptions};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ColEntropyError;

pub use engine::{ColumnEntropy, EntropyEngine, EntropyReport};
pub use frequency::{ColumnCounts, FrequencyTable};
pub use headless::{headless_column_entropy, headless_render};
pub use report::{format_value, render_report, write_report, write_report_to_path};
pub use table::{Cell, Table};
