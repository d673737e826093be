//! Configuration-complexity analysis: the full pipeline from directory to
//! report.
//!
//! [`ComplexityRule::analyze`] produces structured data and emits nothing;
//! [`ComplexityRule::run`] renders that data in the selected console format
//! and persists the CSV report.

use serde::{Deserialize, Serialize};

use crate::analyzer::{
    compare_counts, keyword_reference_predicate, AnalysisSummary, ComparisonRecord, CountedFile,
};
use crate::classifier::LineClassifier;
use crate::cli::OutputFormat;
use crate::config::AnalysisSettings;
use crate::counter::count_config_file;
use crate::csv_report::write_csv;
use crate::error::{ConfmeterError, Result};
use crate::file_utils::collect_config_files;
use crate::report::print_report;

/// A candidate file that failed to read and was excluded from the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// File name.
    pub file: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// Per-file counts in enumeration (name-sorted) order.
    pub counts: Vec<CountedFile>,
    /// Comparison records sorted ascending by code-line count.
    pub records: Vec<ComparisonRecord>,
    /// Aggregate summary.
    pub summary: AnalysisSummary,
    /// Files excluded because they could not be read.
    pub skipped: Vec<SkippedFile>,
}

/// Rule to rank configuration files by code-line count and compare them
/// against the simplest file and an optional reference file.
#[derive(Debug, Default)]
pub struct ComplexityRule;

impl ComplexityRule {
    pub fn new() -> Self {
        ComplexityRule
    }

    /// Runs the full analysis and renders the results.
    ///
    /// The CSV report is written for every console format, matching the
    /// persisted-output contract.
    pub fn run(&self, settings: &AnalysisSettings) -> Result<()> {
        let report = self.analyze(settings)?;

        match settings.output {
            OutputFormat::Table => print_report(&report, settings),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&report)?),
        }

        write_csv(&report.records, &settings.csv_path)?;
        println!(
            "\nWrote detailed results to '{}'.",
            settings.csv_path.display()
        );
        Ok(())
    }

    /// Analyzes the configured directory and returns structured data.
    ///
    /// Enumerates candidate files, counts code lines per file, and computes
    /// the comparative statistics. A file that cannot be read is logged,
    /// recorded as skipped and excluded from the comparison set; the run only
    /// fails when nothing at all could be read.
    ///
    /// # Errors
    ///
    /// - [`ConfmeterError::MissingDirectory`] / [`ConfmeterError::NoFilesFound`]
    ///   from enumeration.
    /// - [`ConfmeterError::EmptyComparisonSet`] when every candidate failed.
    pub fn analyze(&self, settings: &AnalysisSettings) -> Result<ComplexityReport> {
        let files = collect_config_files(&settings.config_dir, &settings.extensions)?;
        let classifier = LineClassifier::new(
            settings.ignore_comments,
            settings.comment_prefixes.clone(),
        );

        let mut counts: Vec<CountedFile> = Vec::new();
        let mut skipped: Vec<SkippedFile> = Vec::new();
        for path in &files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            match count_config_file(path, &classifier) {
                Ok(code_lines) => {
                    tracing::debug!(file = %name, code_lines, "Counted file");
                    counts.push(CountedFile::new(name, code_lines));
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Skipping unreadable file");
                    skipped.push(SkippedFile {
                        file: name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if counts.is_empty() {
            return Err(ConfmeterError::EmptyComparisonSet {
                attempted: files.len(),
            });
        }

        let predicate = keyword_reference_predicate(
            &settings.reference_keyword,
            &settings.reference_exclude,
        );
        let (records, summary) = compare_counts(&counts, predicate)?;
        tracing::info!(
            files = counts.len(),
            skipped = skipped.len(),
            "Comparison complete"
        );

        Ok(ComplexityReport {
            counts,
            records,
            summary,
            skipped,
        })
    }
}
