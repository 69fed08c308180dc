//! Locale-aware number rendering for substituted quantities

use num_format::{Locale, ToFormattedString};

/// Number format for a tag: the full tag, then its language, then `en`
fn number_locale(locale: &str) -> Locale {
    let tag = locale.replace('_', "-");
    let language = tag.split('-').next().unwrap_or_default().to_ascii_lowercase();
    Locale::from_name(&tag)
        .or_else(|_| Locale::from_name(&language))
        .unwrap_or(Locale::en)
}

/// Renders `n` for display in `locale`.
///
/// Whole numbers are grouped by thousands; fractions keep at most two
/// digits with trailing zeros trimmed.
pub fn format_number(n: f64, locale: &str) -> String {
    let format = number_locale(locale);
    let sign = if n < 0.0 { "-" } else { "" };
    let rendered = format!("{:.2}", n.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let grouped = int_part
        .parse::<u128>()
        .map(|whole| whole.to_formatted_string(&format))
        .unwrap_or_else(|_| int_part.to_string());
    let mut result = format!("{}{}", sign, grouped);
    if !frac_part.is_empty() {
        result.push_str(format.decimal());
        result.push_str(frac_part);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_per_locale() {
        assert_eq!(format_number(1234567.0, "en"), "1,234,567");
        assert_eq!(format_number(1234.0, "de"), "1.234");
        assert_eq!(format_number(999.0, "en"), "999");
        assert_eq!(format_number(-1500.0, "en"), "-1,500");
    }

    #[test]
    fn test_region_and_unknown_tags() {
        assert_eq!(format_number(1234.0, "de_DE"), "1.234");
        assert_eq!(format_number(1234.0, "tlh"), "1,234");
        let ru = format_number(1234.0, "ru");
        assert!(ru.starts_with('1') && ru.ends_with("234") && !ru.contains(','), "got: {}", ru);
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(2.5, "en"), "2.5");
        assert_eq!(format_number(2.5, "de"), "2,5");
        assert_eq!(format_number(3.0, "en"), "3");
        assert_eq!(format_number(1234.25, "de"), "1.234,25");
    }
}
