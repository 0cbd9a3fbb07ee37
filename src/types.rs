// src/types.rs
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::rules::RuleCode;

/// Diagnostics for one file, keyed by 1-indexed line number.
///
/// Only lines with at least one diagnostic are present; iteration yields
/// lines in ascending order.
pub type LineMap = BTreeMap<usize, Vec<Diagnostic>>;

/// A single reported violation, anchored to a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: RuleCode,
    pub line: usize,
    pub payload: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with no payload.
    #[must_use]
    pub fn plain(code: RuleCode, line: usize) -> Self {
        Self {
            code,
            line,
            payload: None,
        }
    }

    /// Creates a diagnostic carrying the offending name (or, for S007, the
    /// keyword the message names).
    #[must_use]
    pub fn named(code: RuleCode, line: usize, payload: impl Into<String>) -> Self {
        Self {
            code,
            line,
            payload: Some(payload.into()),
        }
    }
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub lines: LineMap,
}

impl FileReport {
    /// Returns true if no diagnostics were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }
}

/// Aggregated results from analyzing multiple files, in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
}

impl ScanReport {
    /// Returns the number of diagnostics across all files.
    #[must_use]
    pub fn total_diagnostics(&self) -> usize {
        self.files.iter().map(FileReport::diagnostic_count).sum()
    }

    /// Returns true if any diagnostics were found.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.total_diagnostics() > 0
    }

    /// Returns the number of clean files.
    #[must_use]
    pub fn clean_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_clean()).count()
    }
}
