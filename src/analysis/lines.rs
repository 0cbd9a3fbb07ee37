// src/analysis/lines.rs
//! Textual style checks evaluated per physical line (S001-S007).

use regex::Regex;
use std::sync::LazyLock;

use crate::rules::RuleCode;
use crate::types::{Diagnostic, LineMap};

const MAX_LINE_LEN: usize = 79;
const INDENT_UNIT: usize = 4;
const MAX_BLANK_RUN: usize = 2;

static KEYWORD_SPACING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(def|class) \S").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Scans the raw text and collects style diagnostics, keyed by line.
///
/// Lines are 1-indexed splits on `\n`. Every check runs on every line in
/// fixed rule order; the blank-run counter is the only state carried
/// across lines.
#[must_use]
pub fn scan(source: &str) -> LineMap {
    let mut out = LineMap::new();
    let mut blank_run = 0usize;

    for (i, line) in source.split('\n').enumerate() {
        let line_no = i + 1;
        let mut found: Vec<Diagnostic> = Vec::new();

        if line.chars().count() > MAX_LINE_LEN {
            found.push(Diagnostic::plain(RuleCode::S001, line_no));
        }

        if leading_spaces(line) % INDENT_UNIT != 0 {
            found.push(Diagnostic::plain(RuleCode::S002, line_no));
        }

        let (before_comment, after_comment) = split_comment(line);

        let statement = before_comment.unwrap_or(line);
        if statement.trim().ends_with(';') {
            found.push(Diagnostic::plain(RuleCode::S003, line_no));
        }

        if let Some(before) = before_comment {
            if !line.starts_with('#') && !before.ends_with("  ") {
                found.push(Diagnostic::plain(RuleCode::S004, line_no));
            }
        }

        if let Some(after) = after_comment {
            if after.to_lowercase().contains("todo") {
                found.push(Diagnostic::plain(RuleCode::S005, line_no));
            }
        }

        if line.trim().is_empty() {
            blank_run += 1;
        } else {
            if blank_run > MAX_BLANK_RUN {
                found.push(Diagnostic::plain(RuleCode::S006, line_no));
            }
            blank_run = 0;
        }

        if let Some(keyword) = spaced_keyword(line) {
            found.push(Diagnostic::named(RuleCode::S007, line_no, keyword));
        }

        if !found.is_empty() {
            out.insert(line_no, found);
        }
    }

    out
}

/// Splits at the first comment marker: (text before, text after).
fn split_comment(line: &str) -> (Option<&str>, Option<&str>) {
    match line.split_once('#') {
        Some((before, after)) => (Some(before), Some(after)),
        None => (None, None),
    }
}

/// Counts leading space characters only; a tab stops the count.
fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

/// Returns the keyword to report for S007 if the line trips the check.
/// Containment is plain substring matching, and `def` wins when both
/// keywords appear.
fn spaced_keyword(line: &str) -> Option<&'static str> {
    let has_def = line.contains("def");
    if !has_def && !line.contains("class") {
        return None;
    }
    if KEYWORD_SPACING_RE.is_match(line) {
        return None;
    }
    Some(if has_def { "def" } else { "class" })
}
