// src/core/localization.rs
//! Bilingual text resolution

use serde_json::Value;

use crate::types::state::Lang;
use crate::utils::{is_truthy, sanitize_text};

/// Keys tried after the requested language, in order
const FALLBACK_LANGS: [Lang; 2] = [Lang::En, Lang::Ar];

/// Resolve a possibly-localized JSON value to one display string.
///
/// Order: requested language, `en`, `ar`, first array element, first object
/// value in document order, empty string. Never fails.
pub fn resolve(value: &Value, lang: Lang) -> String {
    if !is_truthy(value) {
        return String::new();
    }

    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Object(map) => {
            let keys = std::iter::once(lang).chain(FALLBACK_LANGS);
            for key in keys {
                if let Some(text) = map.get(key.code()).filter(|v| is_truthy(v)) {
                    return resolve(text, lang);
                }
            }

            map.values()
                .next()
                .map(|first| resolve(first, lang))
                .unwrap_or_default()
        }
        Value::Array(items) => items
            .first()
            .map(|first| resolve(first, lang))
            .unwrap_or_default(),
        other => sanitize_text(other),
    }
}
