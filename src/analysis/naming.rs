// src/analysis/naming.rs
//! Naming checks derived from the syntax tree (S008-S012).

use tree_sitter::Node;

use crate::rules::{is_camel_case, is_snake_case, RuleCode};
use crate::types::{Diagnostic, LineMap};

/// Walks the tree and collects naming diagnostics, keyed by line.
///
/// Function and class definitions are checked at any nesting depth. For a
/// function, argument and mutable-default diagnostics anchor to the `def`
/// line; assignment diagnostics anchor to the assignment's own line.
#[must_use]
pub fn walk(root: Node, source: &str) -> LineMap {
    let mut out = LineMap::new();
    visit(root, source, &mut out);
    out
}

fn visit(node: Node, source: &str, out: &mut LineMap) {
    match node.kind() {
        "function_definition" => check_function(node, source, out),
        "class_definition" => check_class(node, source, out),
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, out);
    }
}

fn check_function(node: Node, source: &str, out: &mut LineMap) {
    let def_line = line_of(node);

    check_arguments(node, source, def_line, out);
    check_body_assignments(node, source, out);
    check_mutable_defaults(node, def_line, out);

    if let Some(name) = field_text(node, "name", source) {
        if !is_snake_case(name) {
            push(out, Diagnostic::named(RuleCode::S009, def_line, name));
        }
    }
}

fn check_class(node: Node, source: &str, out: &mut LineMap) {
    if let Some(name) = field_text(node, "name", source) {
        if !is_camel_case(name) {
            push(out, Diagnostic::named(RuleCode::S008, line_of(node), name));
        }
    }
}

/// Positional parameter names must be snake_case (S010). Everything after
/// a `*` is keyword-only and exempt, as are splat parameters themselves.
fn check_arguments(node: Node, source: &str, def_line: usize, out: &mut LineMap) {
    let Some(params) = node.child_by_field_name("parameters") else {
        return;
    };

    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        if matches!(param.kind(), "list_splat_pattern" | "keyword_separator") {
            break;
        }
        if let Some(name) = parameter_name(param, source) {
            if !is_snake_case(name) {
                push(out, Diagnostic::named(RuleCode::S010, def_line, name));
            }
        }
    }
}

fn parameter_name<'a>(param: Node, source: &'a str) -> Option<&'a str> {
    match param.kind() {
        "identifier" => node_text(param, source),
        "default_parameter" | "typed_default_parameter" => {
            let name = param.child_by_field_name("name")?;
            if name.kind() == "identifier" {
                node_text(name, source)
            } else {
                None
            }
        }
        "typed_parameter" => {
            let inner = param.named_child(0)?;
            if inner.kind() == "identifier" {
                node_text(inner, source)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Direct (first-level) assignments in the function body whose target is a
/// simple name must be snake_case (S011). Chained assignments are unwrapped
/// through the right-hand side; assignments nested in conditionals or loops
/// are not inspected.
fn check_body_assignments(node: Node, source: &str, out: &mut LineMap) {
    let Some(body) = node.child_by_field_name("body") else {
        return;
    };

    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        if stmt.kind() != "expression_statement" {
            continue;
        }
        let Some(expr) = stmt.named_child(0) else {
            continue;
        };
        if expr.kind() == "assignment" {
            check_assignment(expr, source, out);
        }
    }
}

fn check_assignment(node: Node, source: &str, out: &mut LineMap) {
    // Annotated assignments (`x: int = 5`) are exempt.
    if node.child_by_field_name("type").is_some() {
        return;
    }

    if let Some(left) = node.child_by_field_name("left") {
        if left.kind() == "identifier" {
            if let Some(name) = node_text(left, source) {
                if !is_snake_case(name) {
                    push(out, Diagnostic::named(RuleCode::S011, line_of(left), name));
                }
            }
        }
    }

    // `a = B = 5` nests the next target in the right-hand side
    if let Some(right) = node.child_by_field_name("right") {
        if right.kind() == "assignment" {
            check_assignment(right, source, out);
        }
    }
}

/// A sequence, mapping, or set literal as a positional default emits one
/// S012 on the `def` line, however many of the defaults are mutable.
fn check_mutable_defaults(node: Node, def_line: usize, out: &mut LineMap) {
    let Some(params) = node.child_by_field_name("parameters") else {
        return;
    };

    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        if matches!(param.kind(), "list_splat_pattern" | "keyword_separator") {
            break;
        }
        let Some(value) = param.child_by_field_name("value") else {
            continue;
        };
        if matches!(value.kind(), "list" | "dictionary" | "set") {
            push(out, Diagnostic::plain(RuleCode::S012, def_line));
            break;
        }
    }
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

fn node_text<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    node.utf8_text(source.as_bytes()).ok()
}

fn field_text<'a>(node: Node, field: &str, source: &'a str) -> Option<&'a str> {
    node.child_by_field_name(field)
        .and_then(|n| node_text(n, source))
}

fn push(out: &mut LineMap, diag: Diagnostic) {
    out.entry(diag.line).or_default().push(diag);
}
