//! Locale message tree model
//!
//! A flavour (`long`, `short`, `mini`, ...) maps unit names to
//! [`UnitMessages`]. In the JSON datasets a unit is one of:
//!
//! ```json
//! "mini":  { "hour": "{0}h" }
//! "long":  { "hour": { "past": { "one": "{0} hour ago", "other": "{0} hours ago" },
//!                      "future": { "one": "in {0} hour", "other": "in {0} hours" } } }
//! "short": { "day": { "one": "{0} day", "other": "{0} days" } }
//! ```
//!
//! Branches that a unit leaves out are filled at load time, so resolution
//! against a loaded tree always yields a template.

use crate::error::CoreError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Messages of a single label flavour, keyed by unit name
pub type FlavourMessages = BTreeMap<String, UnitMessages>;

/// Grammatical plural category (CLDR naming)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(PluralCategory::Zero),
            "one" => Ok(PluralCategory::One),
            "two" => Ok(PluralCategory::Two),
            "few" => Ok(PluralCategory::Few),
            "many" => Ok(PluralCategory::Many),
            "other" => Ok(PluralCategory::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Templates per plural category. `other` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    other: String,
    specific: BTreeMap<PluralCategory, String>,
}

impl PluralForms {
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            specific: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the template for a category
    pub fn with(mut self, category: PluralCategory, template: impl Into<String>) -> Self {
        if category == PluralCategory::Other {
            self.other = template.into();
        } else {
            self.specific.insert(category, template.into());
        }
        self
    }

    /// Template for `category`, falling back to `other`
    pub fn select(&self, category: PluralCategory) -> &str {
        self.specific.get(&category).unwrap_or(&self.other)
    }

    /// Builds forms from the plural-category keys of a raw map.
    /// Returns `Ok(None)` if the map has no category keys at all.
    fn from_raw(raw: &BTreeMap<String, String>) -> Result<Option<Self>, CoreError> {
        let mut other = None;
        let mut specific = BTreeMap::new();
        for (key, template) in raw {
            match key.parse::<PluralCategory>() {
                Ok(PluralCategory::Other) => other = Some(template.clone()),
                Ok(category) => {
                    specific.insert(category, template.clone());
                }
                // previous/next/current and other CLDR extras
                Err(()) => {}
            }
        }
        match other {
            Some(other) => Ok(Some(Self { other, specific })),
            None if specific.is_empty() => Ok(None),
            None => Err(CoreError::MissingOther),
        }
    }
}

/// One direction of a unit: a fixed string or plural templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Literal(String),
    Plural(PluralForms),
}

/// All messages for one unit within a flavour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawUnit")]
pub enum UnitMessages {
    /// Same string regardless of direction and quantity (`"{0}h"`)
    Literal(String),
    /// Symmetric unit: plural templates shared by past and future
    Plural(PluralForms),
    /// Distinct past and future messages
    Directional {
        past: Message,
        future: Message,
        /// Zero-quantity phrasing, e.g. `"now"` for `second`
        current: Option<String>,
    },
}

impl UnitMessages {
    /// The `current` message, if the unit has one
    pub fn current(&self) -> Option<&str> {
        match self {
            UnitMessages::Directional { current, .. } => current.as_deref(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUnit {
    Literal(String),
    Map(BTreeMap<String, RawBranch>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBranch {
    Literal(String),
    Map(BTreeMap<String, String>),
}

impl RawBranch {
    fn into_message(self) -> Result<Message, CoreError> {
        match self {
            RawBranch::Literal(s) => Ok(Message::Literal(s)),
            RawBranch::Map(map) => PluralForms::from_raw(&map)?
                .map(Message::Plural)
                .ok_or(CoreError::MissingOther),
        }
    }
}

impl TryFrom<RawUnit> for UnitMessages {
    type Error = CoreError;

    fn try_from(raw: RawUnit) -> Result<Self, Self::Error> {
        let mut map = match raw {
            RawUnit::Literal(s) => return Ok(UnitMessages::Literal(s)),
            RawUnit::Map(map) => map,
        };

        let past = map.remove("past").map(RawBranch::into_message).transpose()?;
        let future = map.remove("future").map(RawBranch::into_message).transpose()?;
        let current = match map.remove("current") {
            Some(RawBranch::Literal(s)) => Some(s),
            _ => None,
        };

        let flat: BTreeMap<String, String> = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                RawBranch::Literal(s) => Some((key, s)),
                RawBranch::Map(_) => None,
            })
            .collect();
        let shared = PluralForms::from_raw(&flat)?;

        if past.is_none() && future.is_none() && current.is_none() {
            return shared.map(UnitMessages::Plural).ok_or(CoreError::MissingOther);
        }

        let fallback = |branch: &'static str| -> Result<Message, CoreError> {
            if let Some(forms) = &shared {
                return Ok(Message::Plural(forms.clone()));
            }
            current
                .clone()
                .map(Message::Literal)
                .ok_or(CoreError::MissingBranch { branch })
        };

        let past = match past {
            Some(message) => message,
            None => fallback("past")?,
        };
        let future = match future {
            Some(message) => message,
            None => fallback("future")?,
        };

        Ok(UnitMessages::Directional {
            past,
            future,
            current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<UnitMessages, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_literal_unit() {
        assert_eq!(parse(r#""{0}h""#).unwrap(), UnitMessages::Literal("{0}h".into()));
    }

    #[test]
    fn test_symmetric_plural_unit() {
        let unit = parse(r#"{"one": "{0} day", "other": "{0} days"}"#).unwrap();
        let UnitMessages::Plural(forms) = unit else {
            panic!("expected plural forms");
        };
        assert_eq!(forms.select(PluralCategory::One), "{0} day");
        assert_eq!(forms.select(PluralCategory::Few), "{0} days");
    }

    #[test]
    fn test_missing_branch_is_filled_from_shared_forms() {
        let unit = parse(r#"{"past": "{0}d ago", "other": "{0}d"}"#).unwrap();
        let UnitMessages::Directional { future, .. } = unit else {
            panic!("expected directional");
        };
        assert_eq!(future, Message::Plural(PluralForms::new("{0}d")));
    }

    #[test]
    fn test_cldr_extras_are_ignored() {
        let unit = parse(
            r#"{"previous": "yesterday", "current": "today", "next": "tomorrow",
                "past": {"one": "{0} day ago", "other": "{0} days ago"},
                "future": {"one": "in {0} day", "other": "in {0} days"}}"#,
        )
        .unwrap();
        assert_eq!(unit.current(), Some("today"));
    }

    #[test]
    fn test_plural_without_other_is_rejected() {
        assert!(parse(r#"{"one": "{0} day"}"#).is_err());
        assert!(parse(r#"{"past": {"one": "{0} day ago"}, "future": "soon"}"#).is_err());
    }
}
