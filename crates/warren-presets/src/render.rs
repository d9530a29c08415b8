//! Canonical JSON rendering.
//!
//! Output shape: object keys sorted lexicographically at every nesting
//! level, two-space indentation, array order preserved, one value per line
//! with no width-based wrapping, trailing newline. The bytes are a pure
//! function of the document, so generated files diff cleanly across runs.

use serde_json::Value;

use crate::error::Result;
use crate::resolve::Document;

const INDENT: &str = "  ";

/// Render a resolved document to canonical JSON bytes.
pub fn render(document: &Document) -> Result<Vec<u8>> {
    Ok(render_text(document)?.into_bytes())
}

/// Render to text; [`render`] is defined in terms of this.
pub(crate) fn render_text(document: &Document) -> Result<String> {
    let mut out = String::new();
    write_object(&mut out, document, 0)?;
    out.push('\n');
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::Object(map) => write_object(out, map, depth),
        Value::Array(items) => write_array(out, items, depth),
        scalar => {
            out.push_str(&serde_json::to_string(scalar)?);
            Ok(())
        }
    }
}

fn write_object(out: &mut String, map: &Document, depth: usize) -> Result<()> {
    if map.is_empty() {
        out.push_str("{}");
        return Ok(());
    }

    // The map iterates in key order already; sorting here keeps the
    // canonical form independent of the map representation.
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    out.push_str("{\n");
    for (i, (key, value)) in entries.iter().enumerate() {
        push_indent(out, depth + 1);
        out.push_str(&serde_json::to_string(key.as_str())?);
        out.push_str(": ");
        write_value(out, value, depth + 1)?;
        if i + 1 < entries.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(out, depth);
    out.push('}');
    Ok(())
}

fn write_array(out: &mut String, items: &[Value], depth: usize) -> Result<()> {
    if items.is_empty() {
        out.push_str("[]");
        return Ok(());
    }

    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        push_indent(out, depth + 1);
        write_value(out, item, depth + 1)?;
        if i + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(out, depth);
    out.push(']');
    Ok(())
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
