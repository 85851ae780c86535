//! Entropy command implementation: read a table, compute, write the report.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use colentropy_core::{write_report_to_path, AnalysisConfig, EntropyEngine, Table};

/// Options for [`run_entropy`].
#[derive(Debug, Clone)]
pub struct EntropyOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: AnalysisConfig,
}

/// Resolves the analysis config: YAML file first, then command-line overrides.
pub fn resolve_config(
    config_path: Option<&PathBuf>,
    overrides: impl FnOnce(AnalysisConfig) -> AnalysisConfig,
) -> Result<AnalysisConfig> {
    let base = match config_path {
        Some(path) => AnalysisConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    let config = overrides(base);
    config.validate().context("Command-line options rejected")?;
    debug!("Effective config: {:?}", config);
    Ok(config)
}

/// Runs one analysis. Returns the path written on success.
///
/// The input is fully read before any computation, and the output file is only
/// created once the report exists.
pub fn run_entropy(opts: &EntropyOptions) -> Result<PathBuf> {
    info!("Starting entropy analysis of {}", opts.input.display());

    let table = Table::from_path(&opts.input).context("Failed to read input table")?;
    debug!(
        "Read {} columns and {} rows from {}",
        table.columns.len(),
        table.rows.len(),
        opts.input.display()
    );

    let engine = EntropyEngine::new(opts.config.clone());
    let report = engine.analyze(&table);

    write_report_to_path(&report, &engine.config().output, &opts.output)
        .with_context(|| format!("Failed to write entropy for {} columns", report.len()))?;

    info!("Entropy analysis completed.");
    Ok(opts.output.clone())
}
