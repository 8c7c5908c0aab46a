// src/utils.rs
use serde_json::Value;

use crate::types::state::Lang;

/// Normalize language code
pub fn normalize_language(lang: Option<&str>) -> Lang {
    match lang.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("ar") | Some("arabic") | Some("العربية") => Lang::Ar,
        Some("en") | Some("english") => Lang::En,
        _ => Lang::En, // Default to English for None or unknown languages
    }
}

/// Escape text for use inside HTML content or a quoted attribute
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a number the way a browser prints it (`4.0` -> `4`, `4.5` -> `4.5`)
pub fn js_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Stringify and trim a scalar JSON value. Falsy values give an empty string.
pub fn sanitize_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => String::new(),
            Some(f) => js_number(f),
            None => n.to_string(),
        },
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .map(sanitize_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => String::new(),
    }
}

/// Whether a JSON value would count as "truthy" in the page scripts
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
