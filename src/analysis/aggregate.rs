// src/analysis/aggregate.rs
//! Per-line merge of the two diagnostic sets.

use crate::types::LineMap;

/// Merges style and naming diagnostics into one map.
///
/// For each line, style diagnostics (already in S001 through S007 order)
/// come first, then naming diagnostics. Within the naming group,
/// payload-less diagnostics precede payload-carrying ones; both halves
/// keep the order the rules were evaluated in. The merge never moves a
/// diagnostic across lines.
#[must_use]
pub fn merge(style: LineMap, naming: LineMap) -> LineMap {
    let mut merged = style;
    for (line, diags) in naming {
        let (bare, named): (Vec<_>, Vec<_>) =
            diags.into_iter().partition(|d| d.payload.is_none());
        let entry = merged.entry(line).or_default();
        entry.extend(bare);
        entry.extend(named);
    }
    merged
}
