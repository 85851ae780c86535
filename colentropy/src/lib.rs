// colentropy/src/lib.rs
//! # colentropy CLI Application
//!
//! Command-line front end for `colentropy-core`: reads a CSV file, computes the
//! Shannon entropy of each column and writes one `name,value` line per column.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::entropy::{run_entropy, EntropyOptions};
