use crate::core::types::{ColorClass, SchoolDay};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One schedule record exactly as the data source sent it.
///
/// Field names are not trusted; attributes are read through
/// [`crate::core::aliases`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawScheduleBlock(Map<String, Value>);

impl RawScheduleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by callers assembling records by hand.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Anything other than an object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Parse a JSON document holding an array of records.
    pub fn from_json_array(text: &str) -> Result<Vec<Self>> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Array(items) => Ok(items.into_iter().map(Self::from_value).collect()),
            other => Err(Error::Parse(format!(
                "Expected a JSON array of schedule blocks, found {}.",
                json_kind(&other)
            ))),
        }
    }

    /// Text of `field`: non-blank strings as-is, numbers stringified,
    /// everything else absent.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A record after day/hour/label resolution. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedScheduleBlock {
    /// Index of the source record; earlier positions win overlapping cells.
    pub position: usize,
    pub day: Option<SchoolDay>,
    pub raw_day: Option<String>,
    pub start_hour: i32,
    pub end_hour: i32,
    pub duration_hours: i32,
    pub label: String,
    pub instructor: Option<String>,
    pub room: Option<String>,
    pub code: Option<String>,
    pub color: ColorClass,
}

impl NormalizedScheduleBlock {
    pub fn day_index(&self) -> Option<usize> {
        self.day.map(SchoolDay::index)
    }

    /// Exclusive end row; differs from `end_hour` when the source span was empty
    /// or inverted.
    pub fn end_row(&self) -> i32 {
        self.start_hour.saturating_add(self.duration_hours)
    }

    pub fn covers(&self, day_index: usize, hour: i32) -> bool {
        self.day_index() == Some(day_index) && (self.start_hour..self.end_row()).contains(&hour)
    }

    pub fn is_placeable(&self) -> bool {
        self.day.is_some()
    }
}

impl fmt::Display for NormalizedScheduleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self
            .day
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Block(position={}, label='{}', day={}, hours={:02}:00-{:02}:00)",
            self.position,
            self.label,
            day,
            self.start_hour,
            self.end_row()
        )
    }
}
