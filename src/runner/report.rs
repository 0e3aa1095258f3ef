//! Transcript formatting.
//!
//! Lengths are counted in chars so truncation never splits a code point.

use serde_json::{Map, Value};

/// Width of the `=` banner rule.
pub const RULE_WIDTH: usize = 60;
/// Pretty-printed responses longer than this are truncated.
pub const MAX_RESPONSE_CHARS: usize = 3000;
/// Error bodies are cut to this many chars.
pub const MAX_ERROR_BODY_CHARS: usize = 500;
/// Header values longer than this are elided in the transcript.
pub const MAX_HEADER_VALUE_CHARS: usize = 30;

pub const TRUNCATION_MARKER: &str = "... (truncated)";

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// First `max` chars of `s`, or `None` if it already fits.
fn cut(s: &str, max: usize) -> Option<&str> {
    s.char_indices().nth(max).map(|(idx, _)| &s[..idx])
}

/// Header value as displayed: long values keep their first 30 chars plus `...`.
pub fn elide_header_value(value: &str) -> String {
    match cut(value, MAX_HEADER_VALUE_CHARS) {
        Some(head) => format!("{head}..."),
        None => value.to_string(),
    }
}

/// Headers as a pretty JSON object in declaration order, values elided.
pub fn headers_json(headers: &[(String, String)]) -> String {
    let map: Map<String, Value> = headers
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(elide_header_value(v))))
        .collect();
    pretty(&Value::Object(map))
}

pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Pretty JSON response, truncated with a marker line past the limit.
pub fn response_text(value: &Value) -> String {
    let text = pretty(value);
    match cut(&text, MAX_RESPONSE_CHARS) {
        Some(head) => format!("{head}\n{TRUNCATION_MARKER}"),
        None => text,
    }
}

/// Leading slice of an error body.
pub fn error_excerpt(body: &str) -> &str {
    cut(body, MAX_ERROR_BODY_CHARS).unwrap_or(body)
}

/// Display an error followed by its sources, `a: b: c`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub fn summary_line(name: &str, succeeded: bool) -> String {
    let status = if succeeded { "✅ PASS" } else { "❌ FAIL" };
    format!("{status}: {name}")
}
