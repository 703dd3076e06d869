// Report module: renders a decoded upload response as the plain-text
// summary the tool prints. Pure string building, no I/O, so the whole
// output contract can be tested without a running service.

use crate::api::UploadResponse;
use serde_json::{Map, Value};

/// Render the human-readable report for one upload response.
///
/// Absent scalar fields print `None` (`N/A` for the session id). The two
/// style sections collapse to a fallback line when their object is missing
/// or empty; a present, non-empty object prints every field line with
/// per-key defaults.
pub fn render(response: &UploadResponse) -> String {
    let mut out = String::new();

    let session = response.session_id.as_deref().unwrap_or("N/A");
    out.push_str(&format!("Session ID: {}\n", session));

    let style = response.style_extraction.as_ref();

    out.push_str("\nStyle Extraction:\n");
    let success = match style.and_then(|s| s.success) {
        Some(true) => "True",
        Some(false) => "False",
        None => "None",
    };
    out.push_str(&format!("  Success: {}\n", success));
    let confidence = style
        .and_then(|s| s.confidence.as_ref())
        .map(|n| n.to_string())
        .unwrap_or_else(|| "None".into());
    out.push_str(&format!("  Confidence: {}\n", confidence));

    out.push_str("\nRaw DOCX Styles:\n");
    match style
        .and_then(|s| s.raw_docx_styles.as_ref())
        .filter(|m| !m.is_empty())
    {
        Some(raw) => {
            out.push_str(&format!("  Fonts: {}\n", field(raw, "fonts", "[]")));
            out.push_str(&format!(
                "  Default Font: {}\n",
                field(raw, "defaultFont", "None")
            ));
            out.push_str(&format!(
                "  Font Sizes: {}\n",
                field(raw, "fontSizes", "[]")
            ));
            out.push_str(&format!("  Colors: {}\n", field(raw, "colors", "[]")));
        }
        None => out.push_str("  No raw styles found\n"),
    }

    out.push_str("\nSimplified Styles:\n");
    match style
        .and_then(|s| s.simplified_styles.as_ref())
        .filter(|m| !m.is_empty())
    {
        Some(simplified) => {
            out.push_str(&format!("  Font: {}\n", field(simplified, "font", "None")));
            out.push_str(&format!(
                "  Font Size: {}\n",
                field(simplified, "fontSize", "None")
            ));
            out.push_str(&format!(
                "  Colors: {}\n",
                field(simplified, "colors", "{}")
            ));
        }
        None => out.push_str("  No simplified styles found\n"),
    }

    out
}

/// Look up one key of a style section, falling back to the given default
/// text when the key is absent.
fn field(section: &Map<String, Value>, key: &str, default: &str) -> String {
    section
        .get(key)
        .map(display)
        .unwrap_or_else(|| default.to_string())
}

/// Field-position rendering: a string stands on its own, anything else is
/// rendered as a literal.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => literal(other),
    }
}

/// Literal rendering used inside lists and maps: strings are single-quoted,
/// booleans capitalized, null prints as `None`.
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "None".into(),
        Value::Bool(true) => "True".into(),
        Value::Bool(false) => "False".into(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(entries) => {
            let inner: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("'{}': {}", k, literal(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}
