// src/reporting/console.rs
//! Console output: diagnostic records plus a closing summary line.

use colored::Colorize;
use std::time::Duration;

use crate::types::ScanReport;

use super::render_records;

/// Prints every diagnostic record to stdout, then a one-line summary.
///
/// Records stay plain text in the stable `{path}: Line {n}: {code}
/// {message}` format; only the summary is styled.
pub fn print_report(report: &ScanReport, elapsed: Duration) {
    for record in render_records(report) {
        println!("{record}");
    }
    print_summary(report, elapsed);
}

fn print_summary(report: &ScanReport, elapsed: Duration) {
    let total = report.total_diagnostics();
    let files = report.files.len();

    if total == 0 {
        println!(
            "{} No style issues found in {files} {} ({elapsed:?}).",
            "OK".green().bold(),
            pluralize("file", files),
        );
        return;
    }

    println!(
        "{} Found {total} {} across {files} {} ({elapsed:?}).",
        "~".yellow().bold(),
        pluralize("issue", total),
        pluralize("file", files),
    );
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
