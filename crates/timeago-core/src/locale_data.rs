//! Per-locale message data

use crate::error::CoreError;
use crate::messages::{FlavourMessages, PluralCategory, UnitMessages};
use crate::plural::{self, PluralRule};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level key holding the locale-wide "now" message set
pub const NOW_SET: &str = "now";

/// The flavour every complete locale dataset provides
pub const LONG: &str = "long";

#[derive(Deserialize)]
struct RawLocale {
    locale: String,
    #[serde(flatten)]
    flavours: BTreeMap<String, FlavourMessages>,
}

/// Messages of one locale for all label flavours, plus its plural rule
#[derive(Debug, Clone)]
pub struct LocaleData {
    locale: String,
    flavours: BTreeMap<String, FlavourMessages>,
    plural: Option<PluralRule>,
}

impl LocaleData {
    /// Creates locale data; the plural rule is taken from the built-in table
    pub fn new(locale: impl Into<String>, flavours: BTreeMap<String, FlavourMessages>) -> Self {
        let locale = locale.into();
        let plural = plural::rule_for(&locale);
        Self {
            locale,
            flavours,
            plural,
        }
    }

    /// Parses a JSON dataset of the form
    /// `{ "locale": "en", "long": { ... }, "mini": { ... }, "now": { "now": ... } }`
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let raw: RawLocale = serde_json::from_str(json)?;
        Ok(Self::new(raw.locale, raw.flavours))
    }

    /// Replaces the plural classifier
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural = Some(rule);
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Messages of a label flavour
    pub fn flavour(&self, name: &str) -> Option<&FlavourMessages> {
        self.flavours.get(name)
    }

    /// Names of the label flavours (the "now" set excluded)
    pub fn flavours(&self) -> impl Iterator<Item = &str> {
        self.flavours
            .keys()
            .map(String::as_str)
            .filter(|name| *name != NOW_SET)
    }

    /// The locale-wide dedicated "now" message, if any
    pub fn now_messages(&self) -> Option<&UnitMessages> {
        self.flavours.get(NOW_SET)?.get(NOW_SET)
    }

    /// Plural category of `n`; `other` when the locale has no classifier
    pub fn quantify(&self, n: f64) -> PluralCategory {
        self.plural.map_or(PluralCategory::Other, |rule| rule(n))
    }

    pub fn plural_rule(&self) -> Option<PluralRule> {
        self.plural
    }
}
