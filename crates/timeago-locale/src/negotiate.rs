//! Locale tag normalization and best-match negotiation

use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").ok())
        .as_ref()
}

/// Normalizes a BCP-47-like tag or a POSIX locale name.
///
/// `"en_US.UTF-8"` becomes `"en-US"`. Returns `None` for `C`/`POSIX` and
/// for anything that is not a syntactically valid tag.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    if tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
        return None;
    }

    tag_pattern()?.is_match(&tag).then_some(tag)
}

/// The tag followed by its successively shorter subtag prefixes:
/// `de-CH-1996` → `de-CH-1996`, `de-CH`, `de`
pub fn fallback_chain(tag: &str) -> Vec<String> {
    let parts: Vec<&str> = tag.split('-').collect();
    (1..=parts.len())
        .rev()
        .map(|len| parts[..len].join("-"))
        .collect()
}

/// Picks the first preferred locale that `lookup` can serve.
///
/// `lookup` maps a candidate tag to the canonical tag of available data.
/// Every preferred tag is tried with its full fallback chain before moving
/// on to the next preference.
pub fn choose_locale<S, F>(preferred: &[S], lookup: F) -> Option<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    preferred
        .iter()
        .filter_map(|raw| normalize_tag(raw.as_ref()))
        .find_map(|tag| fallback_chain(&tag).iter().find_map(|candidate| lookup(candidate)))
}
