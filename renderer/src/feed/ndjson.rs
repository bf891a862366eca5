//! NDJSON line handling
//!
//! Splits a fetched body into feed lines and parses each line on its own.

use serde_json::Value;

use crate::domain::entities::Record;
use crate::error::LineError;

/// A non-blank line of the feed body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLine<'a> {
    /// 1-based line number in the body
    pub number: usize,
    pub text: &'a str,
}

/// Split a body into its non-blank lines, in source order.
///
/// A leading byte-order mark is ignored. Empty and whitespace-only lines are
/// dropped silently.
pub fn split_lines(body: &str) -> impl Iterator<Item = FeedLine<'_>> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);

    body.split('\n')
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| FeedLine {
            number: i + 1,
            text,
        })
}

/// Parse one line as an independent JSON document holding a record
pub fn parse_line(line: &FeedLine<'_>) -> Result<Record, LineError> {
    let value: Value =
        serde_json::from_str(line.text).map_err(|e| LineError::from_json(line.number, &e))?;

    if !value.is_object() {
        return Err(LineError::shape(
            line.number,
            format!("expected a JSON object, found {}", value_kind(&value)),
        ));
    }

    serde_json::from_value(value).map_err(|e| LineError::from_json(line.number, &e))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
