use crate::types::DumpFormat;
use anyhow::{Context, Result, bail};
use boxlog_core::{Error, Value, format_json, render_flat, render_tree};
use std::io::Write;
use std::path::Path;

pub fn handle(
    file: Option<&Path>,
    format: DumpFormat,
    indent: Option<usize>,
    before: Option<&str>,
) -> Result<()> {
    check_flags(format, indent, before)?;

    let input = super::read_input(file)?;
    let document: serde_json::Value =
        serde_json::from_str(&input).context("Input is not valid JSON")?;

    let output = render(document, format, indent, before)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    Ok(())
}

/// `--indent` applies to tree and json, `--before` to flat only.
fn check_flags(format: DumpFormat, indent: Option<usize>, before: Option<&str>) -> Result<()> {
    if indent.is_some() && format == DumpFormat::Flat {
        bail!("--indent is not supported with --format flat");
    }
    if before.is_some() && format != DumpFormat::Flat {
        bail!("--before is only supported with --format flat, not {}", format);
    }
    Ok(())
}

fn render(
    document: serde_json::Value,
    format: DumpFormat,
    indent: Option<usize>,
    before: Option<&str>,
) -> Result<String> {
    let mapping = match format {
        DumpFormat::Json => {
            return Ok(format!("{}\n", format_json(&document, indent.unwrap_or(2))?));
        }
        DumpFormat::Tree | DumpFormat::Flat => match Value::from(document) {
            Value::Mapping(mapping) => mapping,
            other => return Err(Error::NotAMapping(other.kind()).into()),
        },
    };

    if format == DumpFormat::Tree {
        Ok(render_tree(&mapping, &" ".repeat(indent.unwrap_or(0))))
    } else {
        Ok(format!("{}\n", render_flat(&mapping, before)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_tree_with_base_indent() {
        let out = render(json!({"b": 1, "a": {"c": true}}), DumpFormat::Tree, Some(2), None).unwrap();
        assert_eq!(out, "  a: {\n    c: true\n  }\n  b: 1\n");
    }

    #[test]
    fn test_render_flat_with_before() {
        let out = render(json!({"b": 1, "a": "x"}), DumpFormat::Flat, None, Some("cfg:")).unwrap();
        assert_eq!(out, "cfg: {b: 1, a: \"x\"}\n");
    }

    #[test]
    fn test_render_json_accepts_any_document() {
        let out = render(json!([1]), DumpFormat::Json, Some(1), None).unwrap();
        assert_eq!(out, "[\n 1\n]\n");
    }

    #[test]
    fn test_flags_must_match_format() {
        assert!(check_flags(DumpFormat::Tree, Some(2), None).is_ok());
        assert!(check_flags(DumpFormat::Json, Some(4), None).is_ok());
        assert!(check_flags(DumpFormat::Flat, None, Some("cfg:")).is_ok());

        let err = check_flags(DumpFormat::Tree, None, Some("cfg:")).unwrap_err();
        assert_eq!(err.to_string(), "--before is only supported with --format flat, not tree");
        let err = check_flags(DumpFormat::Json, None, Some("cfg:")).unwrap_err();
        assert!(err.to_string().ends_with("not json"));
        let err = check_flags(DumpFormat::Flat, Some(2), None).unwrap_err();
        assert_eq!(err.to_string(), "--indent is not supported with --format flat");
    }

    #[test]
    fn test_render_tree_rejects_arrays() {
        let err = render(json!([1, 2]), DumpFormat::Tree, None, None).unwrap_err();
        assert!(err.to_string().contains("got sequence"));
    }
}
