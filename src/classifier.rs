//! Line classification: decides whether a single line of a configuration file
//! counts as a line of code.
//!
//! A line counts when it is non-blank after trimming and, if comment skipping
//! is enabled, does not start with any of the configured comment prefixes.
//! The default prefixes cover the common network-configuration and scripting
//! comment styles: `#`, `!` and `//`.

/// Comment prefixes recognized by default.
pub const DEFAULT_COMMENT_PREFIXES: &[&str] = &["#", "!", "//"];

/// Classifies single lines of text as code or not-code.
///
/// The classifier is a pure function of the line, the configured prefix set
/// and the `ignore_comments` flag; it performs no IO and keeps no state.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    ignore_comments: bool,
    comment_prefixes: Vec<String>,
}

impl LineClassifier {
    /// Creates a classifier with an explicit prefix set and comment handling.
    pub fn new(ignore_comments: bool, comment_prefixes: Vec<String>) -> Self {
        Self {
            ignore_comments,
            comment_prefixes,
        }
    }

    /// Returns `true` when `line` counts as a line of code.
    ///
    /// Blank lines never count. Comment lines count only when
    /// `ignore_comments` is disabled.
    #[must_use]
    pub fn is_code(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.ignore_comments
            && self
                .comment_prefixes
                .iter()
                .any(|prefix| trimmed.starts_with(prefix.as_str()))
        {
            return false;
        }
        true
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(
            true,
            DEFAULT_COMMENT_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        )
    }
}
