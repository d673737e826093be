//! File counting: reduces a file's content to a single code-line count by
//! applying the [`LineClassifier`] to every line.
//!
//! Counting over content is a pure function so it can be unit tested without a
//! filesystem fixture; [`count_config_file`] is the thin IO wrapper around it.

use std::fs;
use std::path::Path;

use crate::classifier::LineClassifier;
use crate::error::{ConfmeterError, Result};

/// Counts the lines of `content` that the classifier accepts as code.
#[must_use]
pub fn count_code_lines(content: &str, classifier: &LineClassifier) -> usize {
    content
        .lines()
        .filter(|line| classifier.is_code(line))
        .count()
}

/// Counts the code lines of the file at `path`.
///
/// Decoding is tolerant: the raw bytes are converted with
/// [`String::from_utf8_lossy`], so invalid sequences are replaced instead of
/// aborting the run. A file in an arbitrary single-byte encoding therefore
/// still yields a line count.
///
/// # Errors
///
/// Returns [`ConfmeterError::FileRead`] when the file cannot be opened or
/// read at all (permission denied, removed mid-run). Callers treat this as a
/// per-file failure, not a global abort.
pub fn count_config_file(path: &Path, classifier: &LineClassifier) -> Result<usize> {
    let bytes = fs::read(path).map_err(|e| ConfmeterError::file_read(path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(count_code_lines(&content, classifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_counts_code_lines_only() {
        let classifier = LineClassifier::default();
        let content = "hostname PE1\n# comment\n\ninterface Gi0/0\n! note\n";
        assert_eq!(count_code_lines(content, &classifier), 2);
    }

    #[test]
    fn test_comment_lines_equalize_files() {
        // Two files with the same code but different comment load count the same.
        let classifier = LineClassifier::default();
        let with_comments = "a\nb\n# x\nc\nd\n! y\ne\n";
        let without_comments = "a\nb\nc\nd\ne\n";
        assert_eq!(count_code_lines(with_comments, &classifier), 5);
        assert_eq!(count_code_lines(without_comments, &classifier), 5);
    }

    #[test]
    fn test_blank_and_comment_only_file_counts_zero() {
        let classifier = LineClassifier::default();
        assert_eq!(count_code_lines("# a\n\n! b\n", &classifier), 0);
    }

    #[test]
    fn test_empty_content_counts_zero() {
        let classifier = LineClassifier::default();
        assert_eq!(count_code_lines("", &classifier), 0);
    }

    #[test]
    fn test_missing_trailing_newline_still_counts_last_line() {
        let classifier = LineClassifier::default();
        assert_eq!(count_code_lines("a\nb", &classifier), 2);
    }

    #[test]
    fn test_count_config_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pe1.cfg");
        std::fs::write(&path, "hostname PE1\n# c\nrouter bgp 1\n").unwrap();

        let classifier = LineClassifier::default();
        assert_eq!(count_config_file(&path, &classifier).unwrap(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.cfg");
        let mut f = std::fs::File::create(&path).unwrap();
        // "descripci\xf3n enlace" in Latin-1, not valid UTF-8.
        f.write_all(b"descripci\xf3n enlace\nrouter ospf 1\n").unwrap();
        drop(f);

        let classifier = LineClassifier::default();
        assert_eq!(count_config_file(&path, &classifier).unwrap(), 2);
    }

    #[test]
    fn test_missing_file_is_a_per_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("removed-mid-run.cfg");

        let classifier = LineClassifier::default();
        let err = count_config_file(&path, &classifier).unwrap_err();
        assert_eq!(err.name(), "FileRead");
    }
}
