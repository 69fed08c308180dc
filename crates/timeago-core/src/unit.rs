//! Time units known to the formatter

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Seconds per unit
pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const WEEK: f64 = 7.0 * DAY;
/// Mean Gregorian year
pub const YEAR: f64 = 365.2425 * DAY;
pub const MONTH: f64 = YEAR / 12.0;

/// A time unit a scale step can be expressed in.
///
/// `Now` is the pseudo-unit for (near) zero durations. `Custom` covers
/// synthetic units such as `half-hour` that only exist in some locale data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Now,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Custom(String),
}

impl Unit {
    /// Every built-in unit, smallest first
    pub const STANDARD: [Unit; 9] = [
        Unit::Now,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Quarter,
        Unit::Year,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Now => "now",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Quarter => "quarter",
            Unit::Year => "year",
            Unit::Custom(name) => name,
        }
    }

    /// Length of one unit in seconds. `None` for `now` and custom units.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Unit::Now | Unit::Custom(_) => None,
            Unit::Second => Some(1.0),
            Unit::Minute => Some(MINUTE),
            Unit::Hour => Some(HOUR),
            Unit::Day => Some(DAY),
            Unit::Week => Some(WEEK),
            Unit::Month => Some(MONTH),
            Unit::Quarter => Some(3.0 * MONTH),
            Unit::Year => Some(YEAR),
        }
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "now" => Unit::Now,
            "second" => Unit::Second,
            "minute" => Unit::Minute,
            "hour" => Unit::Hour,
            "day" => Unit::Day,
            "week" => Unit::Week,
            "month" => Unit::Month,
            "quarter" => Unit::Quarter,
            "year" => Unit::Year,
            other => Unit::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
