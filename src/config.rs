//! Configuration file support for confmeter.
//!
//! This module provides functionality to load configuration from TOML files
//! and merge them with command-line arguments. CLI arguments take precedence
//! over config file values, which take precedence over built-in defaults.
//! Merging resolves into an immutable [`AnalysisSettings`] that is handed to
//! the analysis as a whole, so the core never reads ambient state.

use crate::cli::{Cli, OutputFormat};
use crate::classifier::DEFAULT_COMMENT_PREFIXES;
use crate::error::{ConfmeterError, Result};
use crate::file_utils::normalize_extension;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for.
const DEFAULT_CONFIG_FILES: &[&str] = &["Confmeter.toml", ".confmeter.toml", "confmeter.toml"];

/// Default name of the persisted delimited report.
pub const DEFAULT_CSV_NAME: &str = "resumen_configuraciones.csv";

/// Main configuration structure representing a confmeter configuration file.
///
/// Configuration files use a merge strategy where:
/// 1. CLI arguments (highest priority)
/// 2. Config file values
/// 3. Default values (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfmeterConfig {
    /// Counting and enumeration settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Reference-file detection settings.
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Counting and enumeration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Directory containing the configuration files.
    pub config_dir: Option<PathBuf>,

    /// Extension allow-list; an empty entry admits files without extension.
    pub extensions: Option<Vec<String>>,

    /// Whether comment lines are skipped when counting.
    pub ignore_comments: Option<bool>,

    /// Comment-prefix tokens.
    pub comment_prefixes: Option<Vec<String>>,
}

/// Reference-file detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ReferenceConfig {
    /// Substring a file name must contain (case-insensitive).
    pub keyword: Option<String>,

    /// Substring that disqualifies a name; empty disables the exclusion.
    pub exclude: Option<String>,
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Console output format: `table`, `json` or `yaml`.
    pub format: Option<String>,

    /// Where to write the delimited report.
    pub csv_path: Option<PathBuf>,
}

/// The fully resolved, immutable settings for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    /// Directory containing the configuration files.
    pub config_dir: PathBuf,
    /// Extension allow-list, normalized to dotted form.
    pub extensions: Vec<String>,
    /// Whether comment lines are skipped when counting.
    pub ignore_comments: bool,
    /// Comment-prefix tokens.
    pub comment_prefixes: Vec<String>,
    /// Reference-detection keyword.
    pub reference_keyword: String,
    /// Reference-detection exclusion substring.
    pub reference_exclude: String,
    /// Where to write the delimited report.
    pub csv_path: PathBuf,
    /// Console output format.
    pub output: OutputFormat,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("."),
            extensions: vec![
                ".cfg".to_string(),
                ".conf".to_string(),
                ".txt".to_string(),
                String::new(),
            ],
            ignore_comments: true,
            comment_prefixes: DEFAULT_COMMENT_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            reference_keyword: "mpls".to_string(),
            reference_exclude: "srv".to_string(),
            csv_path: PathBuf::from(DEFAULT_CSV_NAME),
            output: OutputFormat::Table,
        }
    }
}

/// Load configuration from a specific file path.
///
/// # Arguments
///
/// * `path` - Path to the configuration file.
///
/// # Returns
///
/// Returns a `ConfmeterConfig` if the file exists and can be parsed.
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns an error if the file exists but cannot be parsed.
pub fn load_config_from_path(path: &Path) -> Result<Option<ConfmeterConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ConfmeterError::config_error_with_path(
            format!("Failed to read config file: {e}"),
            path.to_path_buf(),
        )
    })?;

    let config: ConfmeterConfig = toml::from_str(&content)?;

    Ok(Some(config))
}

/// Discover and load configuration from the working directory.
///
/// Searches the current directory for the default config file names:
/// `Confmeter.toml`, `.confmeter.toml`, `confmeter.toml`.
///
/// # Returns
///
/// Returns `Some((PathBuf, ConfmeterConfig))` if a config file is found and
/// can be parsed. Returns `None` if no config file is found.
pub fn discover_and_load_config() -> Result<Option<(PathBuf, ConfmeterConfig)>> {
    for config_name in DEFAULT_CONFIG_FILES {
        let config_path = PathBuf::from(config_name);
        if let Some(config) = load_config_from_path(&config_path)? {
            tracing::debug!(path = %config_path.display(), "Loaded configuration file");
            return Ok(Some((config_path, config)));
        }
    }
    Ok(None)
}

/// Load configuration from a specified path or discover from default locations.
///
/// If `config_path` is `Some`, loads from that specific path (missing file is
/// an error in this case, since the user asked for it explicitly).
/// If `config_path` is `None`, searches for default config files.
pub fn load_config(config_path: Option<&Path>) -> Result<Option<(PathBuf, ConfmeterConfig)>> {
    match config_path {
        Some(path) => match load_config_from_path(path)? {
            Some(config) => Ok(Some((path.to_path_buf(), config))),
            None => Err(ConfmeterError::config_error_with_path(
                "Config file not found".to_string(),
                path.to_path_buf(),
            )),
        },
        None => discover_and_load_config(),
    }
}

/// Merge CLI args with config file values into resolved settings.
///
/// Priority order:
/// 1. CLI arguments (highest priority)
/// 2. Config file values
/// 3. Default values (lowest priority)
pub fn merge_args(cli: &Cli, config: &ConfmeterConfig) -> AnalysisSettings {
    let defaults = AnalysisSettings::default();

    let extensions = cli
        .extensions
        .clone()
        .or_else(|| config.analysis.extensions.clone())
        .unwrap_or(defaults.extensions)
        .iter()
        .map(|e| normalize_extension(e))
        .collect();

    let output = cli
        .output
        .or_else(|| {
            config
                .output
                .format
                .as_deref()
                .and_then(OutputFormat::parse_config_value)
        })
        .unwrap_or(defaults.output);

    AnalysisSettings {
        config_dir: cli
            .config_dir
            .clone()
            .or_else(|| config.analysis.config_dir.clone())
            .unwrap_or(defaults.config_dir),
        extensions,
        ignore_comments: cli
            .ignore_comments
            .or(config.analysis.ignore_comments)
            .unwrap_or(defaults.ignore_comments),
        comment_prefixes: cli
            .comment_prefixes
            .clone()
            .or_else(|| config.analysis.comment_prefixes.clone())
            .unwrap_or(defaults.comment_prefixes),
        reference_keyword: cli
            .reference_keyword
            .clone()
            .or_else(|| config.reference.keyword.clone())
            .unwrap_or(defaults.reference_keyword),
        reference_exclude: cli
            .reference_exclude
            .clone()
            .or_else(|| config.reference.exclude.clone())
            .unwrap_or(defaults.reference_exclude),
        csv_path: cli
            .csv_path
            .clone()
            .or_else(|| config.output.csv_path.clone())
            .unwrap_or(defaults.csv_path),
        output,
    }
}
