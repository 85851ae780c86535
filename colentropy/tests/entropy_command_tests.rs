// colentropy/tests/entropy_command_tests.rs
//! Library-level tests for the entropy command runner.

use anyhow::Result;
use std::fs;
use tempfile::tempdir;
use test_log::test;

use colentropy::commands::entropy::resolve_config;
use colentropy::{run_entropy, EntropyOptions};
use colentropy_core::{AnalysisConfig, ColEntropyError, ColumnKeying};

#[test]
fn run_entropy_writes_report() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "k,v\na,1\nb,1\n")?;

    let written = run_entropy(&EntropyOptions {
        input,
        output: output.clone(),
        config: AnalysisConfig::default(),
    })?;

    assert_eq!(written, output);
    assert_eq!(fs::read_to_string(&output)?, "k,1\nv,0\n");
    Ok(())
}

#[test]
fn run_entropy_positional_columns() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "x,x\n1,1\n2,1\n")?;

    let config = AnalysisConfig {
        keying: ColumnKeying::ByPosition,
        ..AnalysisConfig::default()
    };
    run_entropy(&EntropyOptions {
        input,
        output: output.clone(),
        config,
    })?;

    assert_eq!(fs::read_to_string(&output)?, "x,1\nx,0\n");
    Ok(())
}

#[test]
fn run_entropy_reports_typed_read_error() -> Result<()> {
    let dir = tempdir()?;
    let err = run_entropy(&EntropyOptions {
        input: dir.path().join("absent.csv"),
        output: dir.path().join("out.csv"),
        config: AnalysisConfig::default(),
    })
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ColEntropyError>(),
        Some(ColEntropyError::InputRead { .. })
    ));
    assert!(format!("{:#}", err).starts_with("Failed to read input table: Could not open file"));
    Ok(())
}

#[test]
fn resolve_config_rejects_bad_override() {
    let result = resolve_config(None, |mut config| {
        config.output.precision = Some(100);
        config
    });
    assert!(result.is_err());
}
