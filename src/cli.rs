//! Command-line argument parsing.
//!
//! Every analysis option is an `Option<_>` so the config layer can tell
//! "not given on the command line" apart from an explicit value when merging
//! with a configuration file (CLI wins, then file, then built-in defaults).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for `confmeter`.
#[derive(Parser, Debug)]
#[command(
    name = "confmeter",
    about = "Rank network device configuration files by code-line complexity"
)]
pub struct Cli {
    /// Directory containing the configuration files to analyze.
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Extension allow-list, comma separated (an empty entry admits files
    /// without extension). Entries may be given with or without the dot.
    #[arg(long, value_name = "EXTS", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Whether comment lines are skipped when counting (default true).
    #[arg(long, value_name = "BOOL")]
    pub ignore_comments: Option<bool>,

    /// Comment-prefix tokens, comma separated.
    #[arg(long, value_name = "PREFIXES", value_delimiter = ',')]
    pub comment_prefixes: Option<Vec<String>>,

    /// Substring a file name must contain (case-insensitive) to be picked as
    /// the reference file.
    #[arg(long, value_name = "KEYWORD")]
    pub reference_keyword: Option<String>,

    /// Substring that disqualifies a file name from reference selection.
    /// Pass an empty string to disable the exclusion.
    #[arg(long, value_name = "SUBSTR")]
    pub reference_exclude: Option<String>,

    /// Where to write the delimited report.
    #[arg(long, value_name = "FILE")]
    pub csv_path: Option<PathBuf>,

    /// Console output format.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Explicit configuration file (skips the default search).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Console output format for the complexity report.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// The full report as JSON.
    Json,
    /// The full report as YAML.
    Yaml,
}

impl OutputFormat {
    /// Parses the config-file spelling of a format name.
    pub fn parse_config_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_everything_unset() {
        let cli = Cli::parse_from(["confmeter"]);
        assert!(cli.config_dir.is_none());
        assert!(cli.extensions.is_none());
        assert!(cli.ignore_comments.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_comma_separated_lists() {
        let cli = Cli::parse_from([
            "confmeter",
            "--extensions",
            ".cfg,.conf",
            "--comment-prefixes",
            "#,!",
        ]);
        assert_eq!(
            cli.extensions,
            Some(vec![".cfg".to_string(), ".conf".to_string()])
        );
        assert_eq!(
            cli.comment_prefixes,
            Some(vec!["#".to_string(), "!".to_string()])
        );
    }

    #[test]
    fn test_ignore_comments_takes_an_explicit_bool() {
        let cli = Cli::parse_from(["confmeter", "--ignore-comments", "false"]);
        assert_eq!(cli.ignore_comments, Some(false));
    }

    #[test]
    fn test_output_format_values() {
        let cli = Cli::parse_from(["confmeter", "--output", "json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_config_value() {
        assert_eq!(
            OutputFormat::parse_config_value("YAML"),
            Some(OutputFormat::Yaml)
        );
        assert_eq!(OutputFormat::parse_config_value("html"), None);
    }
}
