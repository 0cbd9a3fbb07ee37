// src/bin/pepcheck.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pepcheck_core::cli::{self, Cli};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::handle_scan(&cli)
}
