//! Output formatting structures for CLI display

use tabled::Tabled;

/// Table row for a formatted instant
#[derive(Tabled)]
pub struct FormatRow {
    #[tabled(rename = "Input")]
    pub input: String,
    #[tabled(rename = "Date (UTC)")]
    pub date: String,
    #[tabled(rename = "Relative")]
    pub text: String,
    #[tabled(rename = "Refresh in")]
    pub refresh: String,
}

/// Table row for a registered locale
#[derive(Tabled)]
pub struct LocaleRow {
    #[tabled(rename = "Locale")]
    pub tag: String,
    #[tabled(rename = "Flavours")]
    pub flavours: String,
    #[tabled(rename = "Now")]
    pub now: String,
    #[tabled(rename = "")]
    pub marker: String,
}

/// Table row for a named style
#[derive(Tabled)]
pub struct StyleRow {
    #[tabled(rename = "Style")]
    pub name: String,
    #[tabled(rename = "Flavours")]
    pub flavours: String,
    #[tabled(rename = "Rounding")]
    pub rounding: String,
    #[tabled(rename = "Units")]
    pub units: String,
}
