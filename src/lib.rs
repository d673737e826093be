//! # Confmeter - Configuration Complexity Metrics
//!
//! Confmeter is a CLI tool and library for quantifying the relative
//! complexity of network-device configuration files. It counts the lines
//! that actually carry configuration (skipping blanks and comments), then
//! ranks the files and compares each one against:
//!
//! - **The simplest file**: absolute and percentage deltas vs. the minimum
//! - **A reference file**: optionally detected by a name heuristic (e.g. the
//!   traditional MPLS configuration), with signed deltas
//!
//! Results are printed to the console and persisted as a `;`-delimited CSV
//! report.
//!
//! ## Architecture
//!
//! Confmeter is organized into several modules:
//!
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Configuration file loading and CLI merging
//! - [`error`] - Centralized error types for the crate
//! - [`classifier`] - Line classification (code vs. blank/comment)
//! - [`counter`] - Per-file code-line counting
//! - [`file_utils`] - Candidate file enumeration
//! - [`analyzer`] - Comparative statistics and reference detection
//! - [`complexity_rule`] - The analysis pipeline
//! - [`report`] - Console table output
//! - [`csv_report`] - Persisted CSV output
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use confmeter_core::{AnalysisSettings, ComplexityRule};
//! use std::path::PathBuf;
//!
//! # fn main() -> confmeter_core::error::Result<()> {
//! let settings = AnalysisSettings {
//!     config_dir: PathBuf::from("./configs"),
//!     ..AnalysisSettings::default()
//! };
//!
//! let report = ComplexityRule::new().analyze(&settings)?;
//! println!("simplest: {}", report.summary.simplest.file);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All functions that can fail return [`Result<T>`], which is a type alias
//! for `std::result::Result<T, ConfmeterError>`. See the [`error`] module for
//! details on error types and handling.

// Module declarations
pub mod analyzer;
pub mod classifier;
pub mod cli;
pub mod complexity_rule;
pub mod config;
pub mod counter;
pub mod csv_report;
pub mod error;
pub mod file_utils;
pub mod report;

// Public API exports
pub use crate::cli::{Cli, OutputFormat};
pub use crate::complexity_rule::{ComplexityReport, ComplexityRule, SkippedFile};

// Analyzer exports
pub use crate::analyzer::{
    compare_counts, keyword_reference_predicate, AnalysisSummary, ComparisonRecord, CountedFile,
};

// Counting exports
pub use crate::classifier::{LineClassifier, DEFAULT_COMMENT_PREFIXES};
pub use crate::counter::{count_code_lines, count_config_file};

// Config exports
pub use crate::config::{
    load_config, load_config_from_path, merge_args, AnalysisConfig, AnalysisSettings,
    ConfmeterConfig, OutputConfig, ReferenceConfig, DEFAULT_CSV_NAME,
};

// File enumeration exports
pub use crate::file_utils::collect_config_files;

// Report exports
pub use crate::csv_report::{write_csv, CSV_DELIMITER};
pub use crate::report::print_report;

// Error exports
pub use crate::error::{ConfmeterError as Error, Result};
