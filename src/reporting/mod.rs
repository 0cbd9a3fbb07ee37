// src/reporting/mod.rs
//! Rendering of analysis results.

pub mod console;

use anyhow::Result;

use crate::types::ScanReport;

pub use console::print_report;

/// Renders one record per diagnostic:
/// `{path}: Line {n}: {code} {message}`.
///
/// Files appear in discovery order, lines ascending, diagnostics in their
/// stored order, so repeated runs over the same input render identically.
#[must_use]
pub fn render_records(report: &ScanReport) -> Vec<String> {
    let mut out = Vec::new();
    for file in &report.files {
        for (line_no, diags) in &file.lines {
            for d in diags {
                out.push(format!(
                    "{}: Line {}: {} {}",
                    file.path.display(),
                    line_no,
                    d.code.as_str(),
                    d.code.message(d.payload.as_deref())
                ));
            }
        }
    }
    out
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
