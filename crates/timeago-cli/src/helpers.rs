//! Helper functions for CLI operations

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use timeago_engine::TimeInput;
use timeago_locale::normalize_tag;

/// Locale preference: explicit `--locale` flags, else the system locale
pub fn preferred_locales(explicit: Vec<String>) -> Vec<String> {
    if !explicit.is_empty() {
        return explicit;
    }
    sys_locale::get_locale()
        .and_then(|tag| normalize_tag(&tag))
        .into_iter()
        .collect()
}

/// Parses a command-line instant
pub fn parse_input(raw: &str) -> Result<TimeInput> {
    raw.parse()
        .with_context(|| format!("Invalid input {:?}: expected epoch milliseconds or an RFC 3339 date", raw))
}

/// Closest known name to `name`, if any is close enough
pub fn suggest<'a>(name: &str, known: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    known
        .into_iter()
        .map(|candidate| (candidate, strsim::jaro_winkler(name, candidate)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}

/// Formats an instant as a readable UTC date
pub fn format_date(input: &TimeInput) -> String {
    input
        .date()
        .map(|date: DateTime<Utc>| date.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Formats a refresh interval (e.g., "59.0s", "1h 30m")
pub fn format_interval(ms: Option<u64>) -> String {
    let Some(ms) = ms else {
        return "-".to_string();
    };
    let secs = ms / 1000;
    if ms < 1000 {
        format!("{}ms", ms)
    } else if secs < 60 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86_400 {
        format!("{}h {}m", secs / 3600, secs % 3600 / 60)
    } else {
        format!("{}d {}h", secs / 86_400, secs % 86_400 / 3600)
    }
}
