//! Console rendering of the complexity report.
//!
//! Four blocks: per-file counts in enumeration order, the ranking with deltas
//! against the simplest file, the extremes summary, and the reference
//! comparison (or a notice explaining why there is none). Files skipped for
//! read failures get their own section so they are never silently missing.

use prettytable::{format, Cell, Row, Table};

use crate::complexity_rule::ComplexityReport;
use crate::config::AnalysisSettings;

fn boxed_table() -> Table {
    let mut table = Table::new();
    let format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '┌', '┐'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '└', '┘'),
        )
        .padding(1, 1)
        .build();
    table.set_format(format);
    table
}

/// Formats a signed delta with an explicit `+` on non-negative values.
fn signed(value: i64) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Prints the full report to stdout.
pub fn print_report(report: &ComplexityReport, settings: &AnalysisSettings) {
    println!(
        "\nConfiguration complexity report (code lines, directory: {}):",
        settings.config_dir.display()
    );

    let mut counts_table = boxed_table();
    counts_table.add_row(Row::new(vec![Cell::new("File"), Cell::new("Code lines")]));
    for count in &report.counts {
        counts_table.add_row(Row::new(vec![
            Cell::new(&count.file),
            Cell::new(&count.code_lines.to_string()),
        ]));
    }
    counts_table.printstd();

    if !report.skipped.is_empty() {
        println!("\nSkipped files (unreadable, excluded from the comparison):");
        for skipped in &report.skipped {
            println!("- {}: {}", skipped.file, skipped.reason);
        }
    }

    println!("\nRanked by complexity (fewest to most code lines):");
    let mut ranking_table = boxed_table();
    ranking_table.add_row(Row::new(vec![
        Cell::new("File"),
        Cell::new("Code lines"),
        Cell::new("vs min"),
        Cell::new("vs min %"),
    ]));
    for record in &report.records {
        ranking_table.add_row(Row::new(vec![
            Cell::new(&record.file),
            Cell::new(&record.code_lines.to_string()),
            Cell::new(&format!("+{}", record.diff_vs_min_abs)),
            Cell::new(&format!("{:.2} %", record.diff_vs_min_pct)),
        ]));
    }
    ranking_table.printstd();

    let summary = &report.summary;
    println!(
        "\nSimplest configuration: {} with {} code lines.",
        summary.simplest.file, summary.simplest.code_lines
    );
    println!(
        "Most complex configuration: {} with {} code lines.",
        summary.most_complex.file, summary.most_complex.code_lines
    );
    println!(
        "Spread between the extremes: {} lines ({:.2} % of the most complex file).",
        summary.extreme_diff_abs, summary.extreme_diff_pct
    );

    match &summary.reference {
        Some(reference) => {
            println!(
                "\nReference file: {} with {} code lines. Comparison against it:",
                reference.file, reference.code_lines
            );
            let mut reference_table = boxed_table();
            reference_table.add_row(Row::new(vec![
                Cell::new("File"),
                Cell::new("Code lines"),
                Cell::new("vs ref"),
                Cell::new("vs ref %"),
            ]));
            for record in &report.records {
                let (abs, pct) = match (record.diff_vs_ref_abs, record.diff_vs_ref_pct) {
                    (Some(abs), Some(pct)) => (signed(abs), format!("{pct:.2} %")),
                    _ => (String::new(), String::new()),
                };
                reference_table.add_row(Row::new(vec![
                    Cell::new(&record.file),
                    Cell::new(&record.code_lines.to_string()),
                    Cell::new(&abs),
                    Cell::new(&pct),
                ]));
            }
            reference_table.printstd();
        }
        None => {
            println!(
                "\nNo reference file found: no name contains '{}'{}.",
                settings.reference_keyword,
                if settings.reference_exclude.is_empty() {
                    String::new()
                } else {
                    format!(" without '{}'", settings.reference_exclude)
                }
            );
        }
    }
}
