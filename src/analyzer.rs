//! Comparative analysis: turns per-file code-line counts into a ranked set of
//! comparison records plus an aggregate summary.
//!
//! Every file is compared against the simplest file of the set and, when one
//! is identified, against a reference file selected by a caller-supplied
//! name predicate.

use serde::{Deserialize, Serialize};

use crate::error::{ConfmeterError, Result};

/// A file together with its computed code-line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedFile {
    /// File name, unique within the analyzed directory.
    pub file: String,
    /// Number of lines classified as code.
    pub code_lines: usize,
}

impl CountedFile {
    /// Convenience constructor.
    pub fn new(file: impl Into<String>, code_lines: usize) -> Self {
        Self {
            file: file.into(),
            code_lines,
        }
    }
}

/// One comparison record per analyzed file.
///
/// `diff_vs_min_*` is always populated (zero for the minimum itself, never
/// negative). The `diff_vs_ref_*` pair is populated for every record when a
/// reference file was identified and for none otherwise; it is signed, since
/// a file can be simpler than the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// File name.
    pub file: String,
    /// Number of lines classified as code.
    pub code_lines: usize,
    /// Absolute delta against the simplest file.
    pub diff_vs_min_abs: usize,
    /// Percentage delta against the simplest file, rounded to 2 decimals;
    /// `0.0` when the minimum itself has zero lines.
    pub diff_vs_min_pct: f64,
    /// Signed delta against the reference file, when one exists.
    pub diff_vs_ref_abs: Option<i64>,
    /// Signed percentage delta against the reference file, rounded to 2
    /// decimals; `0.0` when the reference has zero lines.
    pub diff_vs_ref_pct: Option<f64>,
}

/// Aggregate results of one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// The file with the fewest code lines.
    pub simplest: CountedFile,
    /// The file with the most code lines.
    pub most_complex: CountedFile,
    /// Delta between the most complex and the simplest file.
    pub extreme_diff_abs: usize,
    /// The extreme delta as a percentage of the most complex file, rounded to
    /// 2 decimals; `0.0` when the most complex file has zero lines.
    pub extreme_diff_pct: f64,
    /// The reference file, when the predicate matched one.
    pub reference: Option<CountedFile>,
}

/// Rounds to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percent_of(diff: f64, base: usize) -> f64 {
    if base == 0 {
        0.0
    } else {
        round2(diff / base as f64 * 100.0)
    }
}

/// Computes the comparison records and summary for a set of counted files.
///
/// Records are sorted ascending by code-line count; ties break by file name.
/// Since enumeration is itself name-sorted this preserves enumeration order
/// for ties, and it makes the outcome (including reference selection, which
/// scans the sorted records and takes the first `is_reference` match)
/// independent of the input order.
///
/// # Errors
///
/// Returns [`ConfmeterError::EmptyComparisonSet`] when `counts` is empty:
/// minimum and maximum are meaningless on empty input.
pub fn compare_counts<F>(
    counts: &[CountedFile],
    is_reference: F,
) -> Result<(Vec<ComparisonRecord>, AnalysisSummary)>
where
    F: Fn(&str) -> bool,
{
    if counts.is_empty() {
        return Err(ConfmeterError::EmptyComparisonSet { attempted: 0 });
    }

    let mut sorted: Vec<CountedFile> = counts.to_vec();
    sorted.sort_by(|a, b| {
        a.code_lines
            .cmp(&b.code_lines)
            .then_with(|| a.file.cmp(&b.file))
    });

    // Non-empty by the guard above.
    let simplest = sorted[0].clone();
    let most_complex = sorted[sorted.len() - 1].clone();
    let min_lines = simplest.code_lines;
    let max_lines = most_complex.code_lines;

    let reference = sorted.iter().find(|c| is_reference(&c.file)).cloned();
    match &reference {
        Some(r) => {
            tracing::debug!(file = %r.file, code_lines = r.code_lines, "Reference file identified")
        }
        None => tracing::debug!("No reference file matched"),
    }

    let records = sorted
        .iter()
        .map(|c| {
            let diff_min_abs = c.code_lines - min_lines;
            let (diff_ref_abs, diff_ref_pct) = match &reference {
                Some(r) => {
                    let diff = c.code_lines as i64 - r.code_lines as i64;
                    (Some(diff), Some(percent_of(diff as f64, r.code_lines)))
                }
                None => (None, None),
            };
            ComparisonRecord {
                file: c.file.clone(),
                code_lines: c.code_lines,
                diff_vs_min_abs: diff_min_abs,
                diff_vs_min_pct: percent_of(diff_min_abs as f64, min_lines),
                diff_vs_ref_abs: diff_ref_abs,
                diff_vs_ref_pct: diff_ref_pct,
            }
        })
        .collect();

    let extreme_diff_abs = max_lines - min_lines;
    let summary = AnalysisSummary {
        simplest,
        most_complex,
        extreme_diff_abs,
        extreme_diff_pct: percent_of(extreme_diff_abs as f64, max_lines),
        reference,
    };

    Ok((records, summary))
}

/// Builds the default reference predicate: the lowercased file name must
/// contain `keyword` and must not contain `exclude`. An empty `exclude`
/// disables the exclusion instead of matching everything.
///
/// The analyzer takes any `Fn(&str) -> bool`, so callers (and tests) can
/// substitute arbitrary matching rules.
pub fn keyword_reference_predicate(
    keyword: &str,
    exclude: &str,
) -> impl Fn(&str) -> bool + use<> {
    let keyword = keyword.to_lowercase();
    let exclude = exclude.to_lowercase();
    move |name: &str| {
        let name = name.to_lowercase();
        name.contains(&keyword) && (exclude.is_empty() || !name.contains(&exclude))
    }
}
