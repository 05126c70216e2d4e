//! Text renderings of structured values.
//!
//! Two shapes exist. The *tree* form is a multi-line outline with keys sorted
//! alphabetically at every level. The *flat* form is a single line that keeps the
//! mapping's own key order. Both share [`value_as_string`] for leaves.

use super::value::{Mapping, Scalar, Value};
use std::io::{self, Write};

/// Indent added per nesting level in tree output
pub const INDENT_STEP: &str = "  ";

/// Render `mapping` as an indented outline, one entry per line, each line
/// prefixed with `indent`. Every line ends with `\n`.
///
/// ```text
/// user: {
///   name: John
///   scores: [
///     [0]: 95
///     [1]: 87
///   ]
/// }
/// ```
pub fn render_tree(mapping: &Mapping, indent: &str) -> String {
    let mut out = String::new();
    tree_into(&mut out, mapping, indent);
    out
}

pub fn write_tree<W: Write>(out: &mut W, mapping: &Mapping, indent: &str) -> io::Result<()> {
    out.write_all(render_tree(mapping, indent).as_bytes())
}

pub fn print_tree(mapping: &Mapping, indent: &str) {
    print!("{}", render_tree(mapping, indent));
}

fn tree_into(out: &mut String, mapping: &Mapping, indent: &str) {
    let nested = format!("{indent}{INDENT_STEP}");

    for (key, value) in mapping.sorted() {
        match value {
            Value::Mapping(child) => {
                out.push_str(&format!("{indent}{key}: {{\n"));
                tree_into(out, child, &nested);
                out.push_str(&format!("{indent}}}\n"));
            }
            Value::Sequence(items) => {
                out.push_str(&format!("{indent}{key}: [\n"));
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::Mapping(child) => {
                            out.push_str(&format!("{nested}[{i}]: {{\n"));
                            tree_into(out, child, &format!("{nested}{INDENT_STEP}"));
                            out.push_str(&format!("{nested}}}\n"));
                        }
                        other => out.push_str(&format!("{nested}[{i}]: {other}\n")),
                    }
                }
                out.push_str(&format!("{indent}]\n"));
            }
            Value::Scalar(scalar) => out.push_str(&format!("{indent}{key}: {scalar}\n")),
        }
    }
}

/// Single-line `{key: value, ...}` in the mapping's own order, optionally preceded by
/// `before` and a space.
pub fn render_flat(mapping: &Mapping, before: Option<&str>) -> String {
    let body = mapping
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value_as_string(value)))
        .collect::<Vec<_>>()
        .join(", ");
    with_prefix(before, format!("{{{}}}", body))
}

/// Leaf formatting shared by every pretty-string form: text is double-quoted,
/// numbers and booleans are bare, containers recurse in flat form.
pub fn value_as_string(value: &Value) -> String {
    match value {
        Value::Scalar(Scalar::Text(text)) => format!("\"{}\"", text),
        Value::Scalar(scalar) => scalar.to_string(),
        Value::Mapping(mapping) => render_flat(mapping, None),
        Value::Sequence(items) => format!(
            "[{}]",
            items
                .iter()
                .map(value_as_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// `["a", "b"]`
pub fn render_list<S: AsRef<str>>(items: &[S], before: Option<&str>) -> String {
    let body = items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    with_prefix(before, format!("[{}]", body))
}

/// `[1: "a", 2: "b"]`, positions are 1-based.
pub fn render_indexed_list<S: AsRef<str>>(items: &[S], before: Option<&str>) -> String {
    let body = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}: \"{}\"", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    with_prefix(before, format!("[{}]", body))
}

/// One `N: item` line per element, 1-based, unquoted.
pub fn write_indexed<W: Write, S: AsRef<str>>(out: &mut W, items: &[S]) -> io::Result<()> {
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, item.as_ref())?;
    }
    Ok(())
}

pub fn print_indexed<S: AsRef<str>>(items: &[S]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}: {}", i + 1, item.as_ref());
    }
}

fn with_prefix(before: Option<&str>, body: String) -> String {
    match before {
        Some(prefix) => format!("{} {}", prefix, body),
        None => body,
    }
}
