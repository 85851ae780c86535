//! errors.rs - Custom error types for the colentropy-core library.
//!
//! Every fallible operation in the library returns a [`ColEntropyError`]. Nothing in
//! this crate terminates the process; mapping an error to an exit code is the job
//! of the binary.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `colentropy-core` library.
///
/// `#[non_exhaustive]` lets new variants be added without breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ColEntropyError {
    #[error("Could not open file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open output file {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render report: {0}")]
    Render(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ColEntropyError>;
