//! Rendering an [`EntropyReport`] as comma-separated text.

use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::{Layout, OutputOptions};
use crate::engine::EntropyReport;
use crate::errors::{ColEntropyError, Result};

/// Formats a single value. Locale-independent in both modes.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

/// Writes `report` to `writer` in the layout chosen by `options`.
pub fn write_report<W: Write>(
    report: &EntropyReport,
    options: &OutputOptions,
    writer: &mut W,
) -> std::io::Result<()> {
    match options.layout {
        Layout::Long => {
            for column in report {
                write!(writer, "{},{}", column.name, format_value(column.entropy, options.precision))?;
                if options.normalized {
                    write!(writer, ",{}", format_value(column.normalized(), options.precision))?;
                }
                writeln!(writer)?;
            }
        }
        Layout::Wide => {
            if report.is_empty() {
                return Ok(());
            }
            let names: Vec<&str> = report.iter().map(|c| c.name.as_str()).collect();
            writeln!(writer, "{}", names.join(","))?;
            let values: Vec<String> = report
                .iter()
                .map(|c| format_value(c.entropy, options.precision))
                .collect();
            writeln!(writer, "{}", values.join(","))?;
            if options.normalized {
                let normalized: Vec<String> = report
                    .iter()
                    .map(|c| format_value(c.normalized(), options.precision))
                    .collect();
                writeln!(writer, "{}", normalized.join(","))?;
            }
        }
    }
    writer.flush()
}

/// Renders `report` into a `String`.
pub fn render_report(report: &EntropyReport, options: &OutputOptions) -> std::io::Result<String> {
    let mut buffer = Vec::new();
    write_report(report, options, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Creates (or truncates) `path` and writes the report into it.
pub fn write_report_to_path<P: AsRef<Path>>(
    report: &EntropyReport,
    options: &OutputOptions,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let to_error = |source| ColEntropyError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_report(report, options, &mut writer).map_err(to_error)?;

    debug!("Wrote {} columns to {}", report.len(), path.display());
    info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EntropyEngine;
    use crate::table::Table;

    fn report(text: &str) -> EntropyReport {
        EntropyEngine::default().analyze(&Table::parse(text))
    }

    #[test]
    fn test_long_layout() {
        let out = render_report(&report("color,size\nred,S\nblue,S\n"), &OutputOptions::default()).unwrap();
        assert_eq!(out, "color,1\nsize,0\n");
    }

    #[test]
    fn test_wide_layout() {
        let options = OutputOptions {
            layout: Layout::Wide,
            ..OutputOptions::default()
        };
        let out = render_report(&report("color,size\nred,S\nblue,S\n"), &options).unwrap();
        assert_eq!(out, "color,size\n1,0\n");
    }

    #[test]
    fn test_fixed_precision() {
        let options = OutputOptions {
            precision: Some(6),
            ..OutputOptions::default()
        };
        let out = render_report(&report("a\nx\nx\ny\n"), &options).unwrap();
        assert_eq!(out, "a,0.918296\n");
    }

    #[test]
    fn test_normalized_column() {
        let options = OutputOptions {
            precision: Some(3),
            normalized: true,
            ..OutputOptions::default()
        };
        let out = render_report(&report("a,b\nx,k\ny,k\n"), &options).unwrap();
        assert_eq!(out, "a,1.000,1.000\nb,0.000,0.000\n");
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let wide = OutputOptions {
            layout: Layout::Wide,
            ..OutputOptions::default()
        };
        assert_eq!(render_report(&report(""), &wide).unwrap(), "");
        assert_eq!(render_report(&report(""), &OutputOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_non_utf8_column_name_rendered_lossily() {
        let report = EntropyEngine::default().analyze(&Table::parse_bytes(b"caf\xe9\nx\ny\n"));
        let out = render_report(&report, &OutputOptions::default()).unwrap();
        assert_eq!(out, "caf\u{fffd},1\n");
    }
}
