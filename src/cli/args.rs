// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pepcheck",
    version,
    about = "Static style checker for Python source"
)]
pub struct Cli {
    /// File or directory to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Emit the report as JSON instead of plain records
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
