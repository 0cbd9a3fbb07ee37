// src/cli/handlers.rs
//! CLI command handlers.

use anyhow::Result;
use std::time::Instant;

use crate::analysis::RuleEngine;
use crate::discovery;
use crate::reporting;

use super::Cli;

/// Runs a full scan of the target path and prints the results.
///
/// Diagnostics are informational: a completed run reports success however
/// many it found. Only the fatal tier (unparseable source) errors out.
///
/// # Errors
/// Returns error if a source file cannot be parsed, or if JSON
/// serialization fails.
pub fn handle_scan(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let files = discovery::discover(&cli.path, cli.verbose);
    let report = RuleEngine::new().scan(files)?;

    if cli.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report, start.elapsed());
    }
    Ok(())
}
