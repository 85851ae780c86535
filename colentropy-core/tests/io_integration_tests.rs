// colentropy-core/tests/io_integration_tests.rs
use anyhow::Result;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

use colentropy_core::{
    write_report_to_path, AnalysisConfig, ColEntropyError, ColumnOrder, EntropyEngine, EntropyUnit,
    Layout, Table,
};

#[test]
fn reads_table_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"color,size\nred,S\nred,M\nblue,S\nblue,M\n")?;

    let table = Table::from_path(file.path())?;
    assert_eq!(table.column_names(), vec!["color", "size"]);
    assert_eq!(table.rows.len(), 4);
    Ok(())
}

#[test]
fn latin1_file_is_tabulated_not_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"name,city\nJos\xe9,Bogot\xe1\nJos\xe8,Bogot\xe1\n")?;

    let table = Table::from_path(file.path())?;
    assert_eq!(table.rows.len(), 2);

    let report = EntropyEngine::default().analyze(&table);
    assert_eq!(report.get("name"), Some(1.0));
    assert_eq!(report.get("city"), Some(0.0));
    Ok(())
}

#[test]
fn missing_input_is_input_read_error() {
    let dir = tempdir().unwrap();
    let err = Table::from_path(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, ColEntropyError::InputRead { .. }));
    assert!(err.to_string().starts_with("Could not open file"));
}

#[test]
fn writes_report_to_file() -> Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("out.csv");

    let engine = EntropyEngine::default();
    let report = engine.analyze(&Table::parse("color,size\nred,S\nred,M\nblue,S\nblue,M\n"));
    write_report_to_path(&report, &engine.config().output, &out)?;

    assert_eq!(fs::read_to_string(&out)?, "color,1\nsize,1\n");
    Ok(())
}

#[test]
fn unwritable_output_is_output_write_error() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("missing_dir").join("out.csv");
    let report = EntropyEngine::default().analyze(&Table::parse("a\n1\n"));

    let err = write_report_to_path(&report, &Default::default(), &out).unwrap_err();
    assert!(matches!(err, ColEntropyError::OutputWrite { .. }));
}

#[test]
fn config_file_drives_the_engine() -> Result<()> {
    let yaml_content = r#"
unit: nats
order: name
output:
  layout: wide
  precision: 4
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let config = AnalysisConfig::load_from_file(file.path())?;
    assert_eq!(config.unit, EntropyUnit::Nats);
    assert_eq!(config.order, ColumnOrder::Name);
    assert_eq!(config.output.layout, Layout::Wide);

    let dir = tempdir()?;
    let out = dir.path().join("wide.csv");
    let engine = EntropyEngine::new(config);
    let report = engine.analyze(&Table::parse("z,a\n1,k\n2,k\n"));
    write_report_to_path(&report, &engine.config().output, &out)?;

    assert_eq!(fs::read_to_string(&out)?, "a,z\n0.0000,0.6931\n");
    Ok(())
}

#[test]
fn malformed_config_file_is_config_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"order: [not, a, variant]\n")?;
    let err = AnalysisConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ColEntropyError::Config(_)));
    Ok(())
}
