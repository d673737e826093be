//! Error types for confmeter.
//!
//! This module defines a dedicated error type for the confmeter CLI tool,
//! providing specific error variants for different failure modes and enabling
//! programmatic error handling.
//!
//! Two variants are "notice-level": [`ConfmeterError::MissingDirectory`] and
//! [`ConfmeterError::NoFilesFound`] describe empty input rather than a broken
//! run, and the binary reports them without failing. Everything else is a real
//! failure.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The main error type for confmeter operations.
///
/// `ConfmeterError` provides specific error variants for different failure
/// modes, making it possible to programmatically handle different error cases.
#[derive(Debug)]
pub enum ConfmeterError {
    /// The configured configuration directory does not exist.
    MissingDirectory {
        /// The directory that was configured.
        path: PathBuf,
    },

    /// The configuration directory exists but holds no matching files.
    NoFilesFound {
        /// The directory that was scanned.
        path: PathBuf,
    },

    /// A candidate file could not be opened or read.
    ///
    /// This is a per-file failure: the file is excluded from the comparison
    /// set and the run continues.
    FileRead {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// Every candidate file failed to read, leaving nothing to compare.
    EmptyComparisonSet {
        /// How many candidate files were attempted.
        attempted: usize,
    },

    /// An error occurred while loading or parsing configuration.
    Config {
        /// Description of the configuration issue.
        message: String,
        /// The config file path, if applicable.
        path: Option<PathBuf>,
        /// The underlying error.
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred while writing the CSV report.
    Csv {
        /// The report path, if known.
        path: Option<PathBuf>,
        /// The underlying error.
        source: csv::Error,
    },

    /// An error occurred while serializing the report.
    Serialize {
        /// The output format being rendered.
        format: &'static str,
        /// The underlying error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfmeterError {
    /// Creates a new `MissingDirectory` error.
    ///
    /// # Arguments
    /// * `path` - The configured directory that does not exist.
    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        Self::MissingDirectory { path: path.into() }
    }

    /// Creates a new `NoFilesFound` error.
    ///
    /// # Arguments
    /// * `path` - The directory that was scanned.
    pub fn no_files_found(path: impl Into<PathBuf>) -> Self {
        Self::NoFilesFound { path: path.into() }
    }

    /// Creates a new `FileRead` error.
    ///
    /// # Arguments
    /// * `path` - The file that failed to read.
    /// * `source` - The underlying IO error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new `Config` error with the given message.
    ///
    /// # Arguments
    /// * `message` - A description of the configuration issue.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Creates a new `Config` error with a file path.
    ///
    /// # Arguments
    /// * `message` - A description of the configuration issue.
    /// * `path` - The path to the config file.
    pub fn config_error_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
            source: None,
        }
    }

    /// Returns the name of the error variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingDirectory { .. } => "MissingDirectory",
            Self::NoFilesFound { .. } => "NoFilesFound",
            Self::FileRead { .. } => "FileRead",
            Self::EmptyComparisonSet { .. } => "EmptyComparisonSet",
            Self::Config { .. } => "Config",
            Self::Csv { .. } => "Csv",
            Self::Serialize { .. } => "Serialize",
        }
    }

    /// Returns `true` for the notice-level variants that describe empty input
    /// rather than a failed run.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            Self::MissingDirectory { .. } | Self::NoFilesFound { .. }
        )
    }
}

impl fmt::Display for ConfmeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectory { path } => {
                write!(
                    f,
                    "Configuration directory does not exist: '{}'. Create it and place the configuration files inside.",
                    path.display()
                )
            }
            Self::NoFilesFound { path } => {
                write!(f, "No configuration files found in '{}'", path.display())
            }
            Self::FileRead { path, source } => {
                write!(f, "Could not read '{}': {}", path.display(), source)
            }
            Self::EmptyComparisonSet { attempted } => {
                write!(
                    f,
                    "All {} candidate file(s) failed to read; nothing to compare",
                    attempted
                )
            }
            Self::Config { message, path, .. } => {
                if let Some(p) = path {
                    write!(f, "Configuration error in '{}': {}", p.display(), message)
                } else {
                    write!(f, "Configuration error: {}", message)
                }
            }
            Self::Csv { path, source } => {
                if let Some(p) = path {
                    write!(f, "Failed to write CSV report '{}': {}", p.display(), source)
                } else {
                    write!(f, "Failed to write CSV report: {}", source)
                }
            }
            Self::Serialize { format, source } => {
                write!(f, "Failed to render {} report: {}", format, source)
            }
        }
    }
}

impl std::error::Error for ConfmeterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileRead { source, .. } => Some(source),
            Self::Config { source, .. } => source.as_ref().map(|s| s.as_ref() as _),
            Self::Csv { source, .. } => Some(source),
            Self::Serialize { source, .. } => Some(source.as_ref() as _),
            Self::MissingDirectory { .. }
            | Self::NoFilesFound { .. }
            | Self::EmptyComparisonSet { .. } => None,
        }
    }
}

// Implement From conversions for common error types

impl From<toml::de::Error> for ConfmeterError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: format!("Failed to parse TOML: {}", err),
            path: None,
            source: Some(Box::new(err)),
        }
    }
}

impl From<csv::Error> for ConfmeterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            path: None,
            source: err,
        }
    }
}

impl From<serde_json::Error> for ConfmeterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize {
            format: "JSON",
            source: Box::new(err),
        }
    }
}

impl From<serde_yaml::Error> for ConfmeterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialize {
            format: "YAML",
            source: Box::new(err),
        }
    }
}

/// A type alias for `Result<T, ConfmeterError>`.
///
/// This is the recommended return type for functions that can fail with
/// confmeter-specific errors.
pub type Result<T> = std::result::Result<T, ConfmeterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_empty_input() {
        let err = ConfmeterError::missing_directory("configs");
        assert!(matches!(err, ConfmeterError::MissingDirectory { .. }));
        assert_eq!(err.name(), "MissingDirectory");
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_no_files_found_is_empty_input() {
        let err = ConfmeterError::no_files_found("configs");
        assert_eq!(err.name(), "NoFilesFound");
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_file_read_is_not_empty_input() {
        let err = ConfmeterError::file_read(
            "pe1-mpls.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.name(), "FileRead");
        assert!(!err.is_empty_input());
    }

    #[test]
    fn test_file_read_display_includes_path() {
        let err = ConfmeterError::file_read(
            "pe1-mpls.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("pe1-mpls.txt"), "message should name the file");
        assert!(msg.contains("gone"), "message should carry the IO cause");
    }

    #[test]
    fn test_empty_comparison_set_display_reports_attempted() {
        let err = ConfmeterError::EmptyComparisonSet { attempted: 3 };
        assert!(err.to_string().contains("3"));
        assert!(!err.is_empty_input());
    }

    #[test]
    fn test_config_error_display_with_and_without_path() {
        let plain = ConfmeterError::config_error("bad value");
        assert_eq!(plain.to_string(), "Configuration error: bad value");

        let with_path =
            ConfmeterError::config_error_with_path("bad value", PathBuf::from("Confmeter.toml"));
        assert!(with_path.to_string().contains("Confmeter.toml"));
    }

    #[test]
    fn test_from_toml_error_becomes_config() {
        let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err = ConfmeterError::from(toml_err);
        assert_eq!(err.name(), "Config");
    }

    #[test]
    fn test_source_chain_preserved_for_file_read() {
        use std::error::Error as _;
        let err = ConfmeterError::file_read(
            "x.cfg",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }
}
