//! Normalization of formatting input

use crate::error::FormatError;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use std::str::FromStr;
use std::time::SystemTime;

/// An instant to format: epoch milliseconds or a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInput {
    Millis(i64),
    Date(DateTime<Utc>),
}

impl TimeInput {
    pub fn epoch_millis(&self) -> i64 {
        match self {
            TimeInput::Millis(ms) => *ms,
            TimeInput::Date(date) => date.timestamp_millis(),
        }
    }

    /// The input as a date; `None` for millisecond values chrono cannot represent
    pub fn date(&self) -> Option<DateTime<Utc>> {
        match self {
            TimeInput::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            TimeInput::Date(date) => Some(*date),
        }
    }
}

impl From<i64> for TimeInput {
    fn from(ms: i64) -> Self {
        TimeInput::Millis(ms)
    }
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(date: DateTime<Utc>) -> Self {
        TimeInput::Date(date)
    }
}

impl From<SystemTime> for TimeInput {
    fn from(time: SystemTime) -> Self {
        TimeInput::Date(time.into())
    }
}

/// Epoch milliseconds (`1700000000000`) or RFC 3339 (`2024-05-01T12:00:00Z`)
impl FromStr for TimeInput {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ms) = s.parse::<i64>() {
            return Ok(TimeInput::Millis(ms));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|date| TimeInput::Date(date.with_timezone(&Utc)))
            .map_err(|_| FormatError::UnsupportedInput(format!("{:?}", s)))
    }
}

impl TryFrom<&Value> for TimeInput {
    type Error = FormatError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                .map(TimeInput::Millis)
                .ok_or_else(|| FormatError::UnsupportedInput(n.to_string())),
            Value::String(s) => s.parse(),
            other => Err(FormatError::UnsupportedInput(other.to_string())),
        }
    }
}
