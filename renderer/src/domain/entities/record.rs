//! Feed record entity
//!
//! One event parsed from a single NDJSON line. Records are transient: the
//! renderer turns each one into a table row and drops it.

use std::fmt;

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Opaque display text taken from any JSON value.
///
/// Strings are kept verbatim, `null` becomes `null`, integral floats drop
/// their fraction (`1.0` shows as `1`), and every other value is shown as its
/// compact JSON text. Arrays and objects therefore read `["a"]` rather than
/// the `a` / `[object Object]` a browser would print. Fields absent from the
/// line default to `undefined`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText(String);

impl DisplayText {
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for DisplayText {
    fn default() -> Self {
        Self("undefined".to_string())
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DisplayText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from(Value::deserialize(deserializer)?))
    }
}

impl From<Value> for DisplayText {
    fn from(value: Value) -> Self {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => f.to_string(),
                _ => n.to_string(),
            },
            other => other.to_string(),
        };
        Self(text)
    }
}

/// Read `field` from an intermediate object.
///
/// `null` is an error. Any other non-object value has no such field and
/// yields the `undefined` default.
fn leaf_field<E>(value: Value, container: &str, field: &str) -> Result<DisplayText, E>
where
    E: de::Error,
{
    match value {
        Value::Null => Err(E::custom(format!("{} is null", container))),
        Value::Object(mut map) => Ok(map.remove(field).map(DisplayText::from).unwrap_or_default()),
        _ => Ok(DisplayText::default()),
    }
}

/// Date information of an event; only the pre-formatted text is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub date_raw: DisplayText,
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self {
            date_raw: leaf_field(value, "date_range", "date_raw")?,
        })
    }
}

/// Location of an event; only the raw text is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub location_raw: DisplayText,
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self {
            location_raw: leaf_field(value, "location", "location_raw")?,
        })
    }
}

/// One event from the feed
///
/// `date_range` and `location` must be present and not `null`; every leaf
/// field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub title: DisplayText,
    pub date_range: DateRange,
    pub location: Location,
    #[serde(default)]
    pub url: DisplayText,
}
