// File: colentropy-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive analysis of in-memory text.

use crate::config::AnalysisConfig;
use crate::engine::{EntropyEngine, EntropyReport};
use crate::errors::Result;
use crate::report::render_report;
use crate::table::Table;

/// Parses `text`, tabulates it and computes every column's entropy.
pub fn headless_column_entropy(text: &str, config: &AnalysisConfig) -> EntropyReport {
    EntropyEngine::new(config.clone()).analyze(&Table::parse(text))
}

/// Like [`headless_column_entropy`], but returns the rendered report text.
///
/// Fails when `config` does not validate.
pub fn headless_render(text: &str, config: &AnalysisConfig) -> Result<String> {
    config.validate()?;
    let report = headless_column_entropy(text, config);
    Ok(render_report(&report, &config.output)?)
}
