// src/rules.rs
//! The fixed rule catalogue: codes S001-S012, their message templates, and
//! the naming patterns the tree checks match against.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Rule identifiers, in their fixed reporting order.
///
/// S001-S007 are textual style rules evaluated per line; S008-S012 are
/// naming rules derived from the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RuleCode {
    S001,
    S002,
    S003,
    S004,
    S005,
    S006,
    S007,
    S008,
    S009,
    S010,
    S011,
    S012,
}

impl RuleCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::S004 => "S004",
            Self::S005 => "S005",
            Self::S006 => "S006",
            Self::S007 => "S007",
            Self::S008 => "S008",
            Self::S009 => "S009",
            Self::S010 => "S010",
            Self::S011 => "S011",
            Self::S012 => "S012",
        }
    }

    /// Message template for this rule; `{}` marks the single payload
    /// substitution point.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::S001 => "Too Long",
            Self::S002 => "Indentation is not a multiple of four",
            Self::S003 => "Unnecessary semicolon",
            Self::S004 => "At least two spaces before inline comment required",
            Self::S005 => "TODO found",
            Self::S006 => "More than two blank lines used before this line",
            Self::S007 => "Too many spaces after {}",
            Self::S008 => "Class name '{}' should be written in CamelCase",
            Self::S009 => "Function name {} should be written in snake_case",
            Self::S010 => "Argument name {} should be written in snake_case",
            Self::S011 => "Variable {} should be written in snake_case",
            Self::S012 => "The default argument value is mutable",
        }
    }

    /// Renders the template, substituting `payload` when present.
    #[must_use]
    pub fn message(self, payload: Option<&str>) -> String {
        match payload {
            Some(p) => self.template().replacen("{}", p, 1),
            None => self.template().to_string(),
        }
    }
}

// Patterns are hardcoded and tested, so a panic implies a developer error.
static SNAKE_CASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z_][a-z0-9_()]*$").unwrap_or_else(|_| panic!("Invalid Regex"))
});

// A two-character prefix check: characters past the second are never
// inspected, and a one-character name always fails.
static CAMEL_CASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9()^_]").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Returns true if `name` is acceptable as a snake_case identifier.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE_RE.is_match(name)
}

/// Returns true if `name` is acceptable as a CamelCase identifier.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    CAMEL_CASE_RE.is_match(name)
}
