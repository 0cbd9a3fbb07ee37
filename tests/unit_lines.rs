// tests/unit_lines.rs
use pepcheck_core::analysis::lines::scan;
use pepcheck_core::rules::RuleCode;

fn codes_on(source: &str, line: usize) -> Vec<RuleCode> {
    scan(source)
        .get(&line)
        .map(|diags| diags.iter().map(|d| d.code).collect())
        .unwrap_or_default()
}

#[test]
fn test_line_length_boundary() {
    let ok = "x".repeat(79);
    assert!(codes_on(&ok, 1).is_empty(), "79 chars should pass");

    let long = "x".repeat(80);
    assert_eq!(codes_on(&long, 1), vec![RuleCode::S001]);
}

#[test]
fn test_indentation_multiple_of_four() {
    assert_eq!(codes_on("  x = 1", 1), vec![RuleCode::S002]);
    assert!(codes_on("    x = 1", 1).is_empty());
    assert!(codes_on("x = 1", 1).is_empty());
}

#[test]
fn test_indentation_ignores_tabs() {
    // Only leading spaces are counted; a tab stops the count.
    assert!(codes_on("\tx = 1", 1).is_empty());
}

#[test]
fn test_indentation_on_whitespace_only_line() {
    assert_eq!(codes_on("   \nx = 1", 1), vec![RuleCode::S002]);
}

#[test]
fn test_unnecessary_semicolon() {
    assert_eq!(codes_on("x = 1;", 1), vec![RuleCode::S003]);
    assert_eq!(codes_on("x = 1;  # note", 1), vec![RuleCode::S003]);
    assert!(codes_on("x = 1", 1).is_empty());
}

#[test]
fn test_semicolon_inside_comment_not_flagged() {
    assert!(codes_on("x = 1  # done;", 1).is_empty());
}

#[test]
fn test_comment_spacing() {
    assert_eq!(codes_on("x = 1 # note", 1), vec![RuleCode::S004]);
    assert!(codes_on("x = 1  # note", 1).is_empty());
}

#[test]
fn test_full_line_comment_exempt_from_spacing() {
    assert!(codes_on("# a full line comment", 1).is_empty());
}

#[test]
fn test_todo_detection_case_insensitive() {
    assert_eq!(codes_on("x = 1  # ToDo: later", 1), vec![RuleCode::S005]);
    assert_eq!(codes_on("# todo", 1), vec![RuleCode::S005]);
    assert!(codes_on("todo = 1", 1).is_empty(), "no comment marker");
}

#[test]
fn test_spacing_diagnostic_ordered_before_todo() {
    assert_eq!(
        codes_on("x = 1 # todo", 1),
        vec![RuleCode::S004, RuleCode::S005]
    );
}

#[test]
fn test_two_blank_lines_allowed() {
    let source = "x = 1\n\n\ny = 2";
    assert!(codes_on(source, 4).is_empty());
}

#[test]
fn test_three_blank_lines_flagged_on_next_line() {
    let source = "x = 1\n\n\n\ny = 2";
    assert_eq!(codes_on(source, 5), vec![RuleCode::S006]);
    assert!(codes_on(source, 4).is_empty(), "blank lines themselves pass");
}

#[test]
fn test_blank_run_resets_after_code() {
    let source = "a = 1\n\n\n\nb = 2\n\n\nc = 3";
    assert_eq!(codes_on(source, 5), vec![RuleCode::S006]);
    assert!(codes_on(source, 8).is_empty(), "run restarted below 3");
}

#[test]
fn test_keyword_spacing() {
    let diags = scan("def  f():");
    assert_eq!(diags[&1].len(), 1);
    assert_eq!(diags[&1][0].code, RuleCode::S007);
    assert_eq!(diags[&1][0].payload.as_deref(), Some("def"));

    assert!(codes_on("def f():", 1).is_empty());
    assert!(codes_on("class Good:", 1).is_empty());
}

#[test]
fn test_keyword_spacing_class() {
    let diags = scan("class  C:");
    assert_eq!(diags[&1][0].payload.as_deref(), Some("class"));
}

#[test]
fn test_keyword_containment_is_substring_based() {
    // "undefined" contains "def", so the check fires on a plain assignment.
    let diags = scan("undefined = 1");
    assert_eq!(diags[&1][0].code, RuleCode::S007);
    assert_eq!(diags[&1][0].payload.as_deref(), Some("def"));
}

#[test]
fn test_multiple_diagnostics_accumulate_on_one_line() {
    let long = format!("{}; # todo", "x".repeat(75));
    assert_eq!(
        codes_on(&long, 1),
        vec![
            RuleCode::S001,
            RuleCode::S003,
            RuleCode::S004,
            RuleCode::S005
        ]
    );
}
