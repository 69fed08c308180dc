//! Resolution of (unit, quantity, direction) to a message template

use crate::messages::{FlavourMessages, Message, PluralCategory, UnitMessages};
use crate::plural::PluralRule;

/// Placeholder replaced by the formatted quantity
pub const PLACEHOLDER: &str = "{0}";

/// Picks the template for a signed quantity.
///
/// Negative quantities are in the past, positive ones in the future. A zero
/// quantity has no sign of its own and goes to the future branch only when
/// `future` is set. Without a plural classifier every quantity is `other`.
pub fn resolve<'a>(
    messages: &'a UnitMessages,
    signed_quantity: f64,
    plural: Option<PluralRule>,
    future: bool,
) -> &'a str {
    let category = || plural.map_or(PluralCategory::Other, |rule| rule(signed_quantity.abs()));

    let message = match messages {
        UnitMessages::Literal(template) => return template,
        UnitMessages::Plural(forms) => return forms.select(category()),
        UnitMessages::Directional {
            past,
            future: ahead,
            ..
        } => {
            let is_future = if signed_quantity == 0.0 {
                future
            } else {
                signed_quantity > 0.0
            };
            if is_future {
                ahead
            } else {
                past
            }
        }
    };

    match message {
        Message::Literal(template) => template,
        Message::Plural(forms) => forms.select(category()),
    }
}

/// Replaces the placeholder with an already formatted number
pub fn substitute(template: &str, number: &str) -> String {
    template.replacen(PLACEHOLDER, number, 1)
}

fn now_branch(messages: &UnitMessages, future: bool) -> &str {
    let message = match messages {
        UnitMessages::Literal(text) => return text,
        UnitMessages::Plural(forms) => return forms.select(PluralCategory::Other),
        UnitMessages::Directional {
            past,
            future: ahead,
            ..
        } => {
            if future {
                ahead
            } else {
                past
            }
        }
    };
    match message {
        Message::Literal(text) => text,
        Message::Plural(forms) => forms.select(PluralCategory::Other),
    }
}

/// Message for the `now` pseudo-unit.
///
/// Lookup order: the flavour's own `now`, the locale-wide "now" set, then
/// the `current` phrasing of `second` (flavour first, then `long`).
pub fn resolve_now<'a>(
    future: bool,
    flavour: &'a FlavourMessages,
    long: Option<&'a FlavourMessages>,
    now_set: Option<&'a UnitMessages>,
) -> Option<&'a str> {
    if let Some(messages) = flavour.get("now").or(now_set) {
        return Some(now_branch(messages, future));
    }

    flavour
        .get("second")
        .and_then(UnitMessages::current)
        .or_else(|| long?.get("second")?.current())
}

/// Whether [`resolve_now`] would find a message
pub fn has_now_message(
    flavour: &FlavourMessages,
    long: Option<&FlavourMessages>,
    now_set: Option<&UnitMessages>,
) -> bool {
    resolve_now(false, flavour, long, now_set).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::PluralForms;
    use crate::plural::one_other;

    fn hours() -> UnitMessages {
        UnitMessages::Directional {
            past: Message::Plural(
                PluralForms::new("{0} hours ago").with(PluralCategory::One, "{0} hour ago"),
            ),
            future: Message::Plural(
                PluralForms::new("in {0} hours").with(PluralCategory::One, "in {0} hour"),
            ),
            current: Some("this hour".into()),
        }
    }

    #[test]
    fn test_direction_and_plural() {
        let unit = hours();
        assert_eq!(resolve(&unit, -1.0, Some(one_other), false), "{0} hour ago");
        assert_eq!(resolve(&unit, -3.0, Some(one_other), false), "{0} hours ago");
        assert_eq!(resolve(&unit, 1.0, Some(one_other), false), "in {0} hour");
    }

    #[test]
    fn test_zero_quantity_follows_future_flag() {
        let unit = hours();
        assert_eq!(resolve(&unit, 0.0, Some(one_other), false), "{0} hours ago");
        assert_eq!(resolve(&unit, 0.0, Some(one_other), true), "in {0} hours");
    }

    #[test]
    fn test_missing_classifier_uses_other() {
        assert_eq!(resolve(&hours(), -1.0, None, false), "{0} hours ago");
    }

    #[test]
    fn test_substitute() {
        assert_eq!(substitute("in {0} days", "3"), "in 3 days");
        assert_eq!(substitute("now", "3"), "now");
    }

    #[test]
    fn test_now_falls_back_to_second_current() {
        let mut long = FlavourMessages::new();
        long.insert(
            "second".into(),
            UnitMessages::Directional {
                past: Message::Literal("{0}s ago".into()),
                future: Message::Literal("in {0}s".into()),
                current: Some("now".into()),
            },
        );
        let mini = FlavourMessages::new();
        assert_eq!(resolve_now(false, &mini, Some(&long), None), Some("now"));
        assert!(!has_now_message(&mini, None, None));
    }
}
