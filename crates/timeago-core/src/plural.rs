//! Plural category classifiers for the bundled languages

use crate::messages::PluralCategory;

/// Classifies a non-negative quantity into a plural category
pub type PluralRule = fn(f64) -> PluralCategory;

/// Returns the built-in rule for the primary language subtag of `locale`
pub fn rule_for(locale: &str) -> Option<PluralRule> {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match language.as_str() {
        "en" | "de" | "nl" | "sv" | "da" | "nb" | "it" | "es" | "fi" | "et" => Some(one_other),
        "fr" | "pt" => Some(one_below_two),
        "ru" | "uk" | "be" => Some(east_slavic),
        "ja" | "zh" | "ko" | "th" | "vi" | "id" => Some(other_only),
        _ => None,
    }
}

fn is_integer(n: f64) -> bool {
    n.fract() == 0.0
}

/// `one` for exactly 1, `other` otherwise
pub fn one_other(n: f64) -> PluralCategory {
    if n == 1.0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// `one` for 0 <= n < 2
pub fn one_below_two(n: f64) -> PluralCategory {
    if (0.0..2.0).contains(&n) {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// Russian/Ukrainian/Belarusian integer rules; fractions are `other`
pub fn east_slavic(n: f64) -> PluralCategory {
    if !is_integer(n) {
        return PluralCategory::Other;
    }
    let i = n.abs() as u64;
    let (mod10, mod100) = (i % 10, i % 100);
    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Languages without plural inflection
pub fn other_only(_n: f64) -> PluralCategory {
    PluralCategory::Other
}
