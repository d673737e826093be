//! Persisted CSV report.
//!
//! One record per analyzed file, `;` as the field delimiter (the consumers of
//! this report are spreadsheet imports that expect it), header row always
//! present. Column order is fixed by the [`ComparisonRecord`] field order:
//! file, code_lines, diff_vs_min_abs, diff_vs_min_pct, diff_vs_ref_abs,
//! diff_vs_ref_pct — the reference columns stay empty when no reference file
//! was identified.

use std::path::Path;

use crate::analyzer::ComparisonRecord;
use crate::error::{ConfmeterError, Result};

/// Field delimiter of the persisted report.
pub const CSV_DELIMITER: u8 = b';';

/// Writes `records` to `path`, replacing any previous report.
///
/// The writer is opened once, serialized in record order and flushed before
/// returning, so a failure cannot leave an unflushed handle behind.
///
/// # Errors
///
/// Returns [`ConfmeterError::Csv`] when the file cannot be created or a
/// record cannot be written.
pub fn write_csv(records: &[ComparisonRecord], path: &Path) -> Result<()> {
    let attach_path = |source: csv::Error| ConfmeterError::Csv {
        path: Some(path.to_path_buf()),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .from_path(path)
        .map_err(attach_path)?;

    for record in records {
        writer.serialize(record).map_err(attach_path)?;
    }
    writer
        .flush()
        .map_err(|e| attach_path(csv::Error::from(e)))?;

    tracing::debug!(path = %path.display(), records = records.len(), "CSV report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, with_ref: bool) -> ComparisonRecord {
        ComparisonRecord {
            file: file.to_string(),
            code_lines: 12,
            diff_vs_min_abs: 2,
            diff_vs_min_pct: 20.0,
            diff_vs_ref_abs: with_ref.then_some(-3),
            diff_vs_ref_pct: with_ref.then_some(-20.0),
        }
    }

    #[test]
    fn test_header_and_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[record("a.cfg", true)], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "file;code_lines;diff_vs_min_abs;diff_vs_min_pct;diff_vs_ref_abs;diff_vs_ref_pct"
        );
        assert_eq!(lines.next().unwrap(), "a.cfg;12;2;20.0;-3;-20.0");
    }

    #[test]
    fn test_missing_reference_leaves_fields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[record("a.cfg", false)], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let data_line = content.lines().nth(1).unwrap();
        assert_eq!(data_line, "a.cfg;12;2;20.0;;");
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![record("a.cfg", true), record("b.cfg", true)];
        write_csv(&records, &path).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .from_path(&path)
            .unwrap();
        let parsed: Vec<ComparisonRecord> =
            reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_unwritable_path_is_a_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        let err = write_csv(&[record("a.cfg", true)], &path).unwrap_err();
        assert_eq!(err.name(), "Csv");
        assert!(err.to_string().contains("out.csv"));
    }
}
