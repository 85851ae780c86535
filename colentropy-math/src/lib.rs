// colentropy-math/src/lib.rs
#![no_std]

pub mod entropy;

pub use entropy::{entropy_with_base, max_entropy, shannon_entropy, LogBase};

/// Common type definitions
pub type EntropyScore = f64;
