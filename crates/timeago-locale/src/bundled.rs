//! Locale datasets compiled into the crate

use timeago_core::{CoreError, LocaleData};

const EN: &str = include_str!("../data/en.json");
const DE: &str = include_str!("../data/de.json");
const RU: &str = include_str!("../data/ru.json");

/// Raw JSON of every bundled locale
pub const DATASETS: [(&str, &str); 3] = [("en", EN), ("de", DE), ("ru", RU)];

/// Parses the bundled datasets
pub fn load() -> Result<Vec<LocaleData>, CoreError> {
    DATASETS
        .iter()
        .map(|(_, json)| LocaleData::from_json(json))
        .collect()
}
