// src/analysis/mod.rs
//! Core analysis logic (The "Rule Engine").

pub mod aggregate;
pub mod lines;
pub mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use tree_sitter::{Parser, Tree};

use crate::error::{CheckError, Result};
use crate::types::{FileReport, ScanReport};

/// Per-file analysis pipeline: parse, walk the tree, scan the lines, merge.
///
/// Files are processed strictly sequentially in the order given, each from
/// a fresh state, so no diagnostics leak between files.
pub struct RuleEngine;

impl RuleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Analyzes every readable file in `files`, in order.
    ///
    /// # Errors
    /// Returns `CheckError::Parse` if any file is not valid Python; the
    /// whole run aborts, nothing past a broken tree is recoverable.
    pub fn scan(&self, files: Vec<PathBuf>) -> Result<ScanReport> {
        let mut report = ScanReport::default();
        for path in files {
            let Ok(source) = fs::read_to_string(&path) else {
                // Unreadable paths yield zero diagnostics, not an error.
                continue;
            };
            report.files.push(self.analyze_source(&path, &source)?);
        }
        Ok(report)
    }

    /// Runs both rule evaluators over one file's text and tree and merges
    /// their diagnostics.
    ///
    /// # Errors
    /// Returns `CheckError::Parse` if the source is not valid Python.
    pub fn analyze_source(&self, path: &Path, source: &str) -> Result<FileReport> {
        let tree = parse(path, source)?;
        let naming = naming::walk(tree.root_node(), source);
        let style = lines::scan(source);
        Ok(FileReport {
            path: path.to_path_buf(),
            lines: aggregate::merge(style, naming),
        })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn parse(path: &Path, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser.set_language(tree_sitter_python::language())?;

    let tree = parser.parse(source, None).ok_or_else(|| CheckError::Parse {
        path: path.to_path_buf(),
    })?;

    if tree.root_node().has_error() {
        return Err(CheckError::Parse {
            path: path.to_path_buf(),
        });
    }
    Ok(tree)
}
