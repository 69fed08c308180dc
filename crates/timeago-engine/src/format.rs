//! Relative time formatting
//!
//! [`TimeAgo`] ties everything together for one negotiated locale: it picks
//! the label flavour, works out which units the locale can express, lets the
//! scale select a step and renders the step through the locale messages.

use crate::cache::Memo;
use crate::error::FormatError;
use crate::input::TimeInput;
use crate::style::{OverrideContext, Style, Styles, DEFAULT_STYLE};
use serde_json::Value;
use std::sync::Arc;
use timeago_core::{
    format_number, has_now_message, resolve, resolve_now, substitute, FlavourMessages,
    LocaleData, Unit, LONG,
};
use timeago_locale::LocaleRegistry;

/// Per-call options
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Treat a zero duration as future ("in a moment") rather than past
    pub future: bool,

    /// Reference instant in epoch milliseconds; the system clock when unset
    pub now: Option<i64>,
}

impl FormatOptions {
    pub fn at(now: i64) -> Self {
        Self {
            future: false,
            now: Some(now),
        }
    }

    pub fn with_future(mut self, future: bool) -> Self {
        self.future = future;
        self
    }
}

/// A style by name or given inline
#[derive(Debug, Clone, Copy)]
pub enum StyleRef<'a> {
    Named(&'a str),
    Inline(&'a Style),
}

impl Default for StyleRef<'_> {
    fn default() -> Self {
        StyleRef::Named(DEFAULT_STYLE)
    }
}

impl<'a> From<&'a str> for StyleRef<'a> {
    fn from(name: &'a str) -> Self {
        StyleRef::Named(name)
    }
}

impl<'a> From<&'a Style> for StyleRef<'a> {
    fn from(style: &'a Style) -> Self {
        StyleRef::Inline(style)
    }
}

/// Formatted text plus how long it stays valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,

    /// Milliseconds until the text may change; `None` when unknown
    pub refresh_in_ms: Option<u64>,
}

/// Relative time formatter bound to a locale
pub struct TimeAgo {
    locale: String,
    registry: Arc<LocaleRegistry>,
    styles: Arc<Styles>,

    /// Units each (locale, flavour) pair can express
    units: Memo<(String, String), Vec<Unit>>,
}

impl TimeAgo {
    /// Negotiates the best registered locale for the preference list
    pub fn new<S: AsRef<str>>(registry: Arc<LocaleRegistry>, preferred: &[S]) -> Self {
        let locale = registry.choose_locale(preferred);
        log::debug!("Formatting with locale {}", locale);
        Self {
            locale,
            registry,
            styles: Arc::new(Styles::builtin()),
            units: Memo::new(),
        }
    }

    /// Replaces the named styles
    pub fn with_styles(mut self, styles: impl Into<Arc<Styles>>) -> Self {
        self.styles = styles.into();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Formats `input` relative to now.
    ///
    /// Only call-site errors are returned. Incomplete locale data or an
    /// elapsed time no step covers give an empty string.
    pub fn format<'a>(
        &self,
        input: impl Into<TimeInput>,
        style: impl Into<StyleRef<'a>>,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        self.format_with_refresh(input, style, options)
            .map(|formatted| formatted.text)
    }

    /// Formats a dynamic value: epoch milliseconds or an RFC 3339 string
    pub fn format_value<'a>(
        &self,
        input: &Value,
        style: impl Into<StyleRef<'a>>,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let input = TimeInput::try_from(input)?;
        self.format(input, style, options)
    }

    /// Like [`format`](Self::format), also reporting when to re-render
    pub fn format_with_refresh<'a>(
        &self,
        input: impl Into<TimeInput>,
        style: impl Into<StyleRef<'a>>,
        options: &FormatOptions,
    ) -> Result<Formatted, FormatError> {
        let input = input.into();
        let style = self.resolve_style(style.into())?;
        match self.render(&input, style, options) {
            Ok(formatted) => Ok(formatted),
            Err(e) if e.is_recoverable() => {
                match &e {
                    FormatError::NoUnitsAvailable { .. } => log::warn!("{}", e),
                    _ => log::debug!("{}", e),
                }
                Ok(Formatted {
                    text: String::new(),
                    refresh_in_ms: None,
                })
            }
            Err(e) => Err(e),
        }
    }

    fn resolve_style<'s>(&'s self, style: StyleRef<'s>) -> Result<&'s Style, FormatError> {
        match style {
            StyleRef::Named(name) => self
                .styles
                .get(name)
                .ok_or_else(|| FormatError::UnknownStyle(name.to_string())),
            StyleRef::Inline(style) => Ok(style),
        }
    }

    /// First of the style's flavours the locale has, else `long`
    fn pick_flavour<'d>(
        &self,
        data: &'d LocaleData,
        style: &Style,
    ) -> Option<(&'d str, &'d FlavourMessages)> {
        style
            .flavours()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(LONG))
            .find_map(|wanted| {
                let name = data.flavours().find(|name| *name == wanted)?;
                Some((name, data.flavour(name)?))
            })
    }

    /// Units the flavour has messages for, plus `now` when it can be phrased
    fn available_units(&self, data: &LocaleData, flavour: &str, generation: u64) -> Arc<Vec<Unit>> {
        let key = (data.locale().to_string(), flavour.to_string());
        self.units.get_or_insert_with(key, generation, || {
            let Some(messages) = data.flavour(flavour) else {
                return Vec::new();
            };
            let mut units: Vec<Unit> = messages.keys().map(|key| Unit::from(key.as_str())).collect();
            if !units.contains(&Unit::Now)
                && has_now_message(messages, data.flavour(LONG), data.now_messages())
            {
                units.push(Unit::Now);
            }
            units
        })
    }

    fn render(
        &self,
        input: &TimeInput,
        style: &Style,
        options: &FormatOptions,
    ) -> Result<Formatted, FormatError> {
        let now = options
            .now
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        let elapsed = now.saturating_sub(input.epoch_millis()) as f64 / 1000.0;

        if let Some(custom) = style.custom() {
            let context = OverrideContext {
                now,
                input,
                elapsed,
                locale: &self.locale,
            };
            if let Some(text) = custom.attempt(&context) {
                return Ok(Formatted {
                    text,
                    refresh_in_ms: None,
                });
            }
        }

        // Read before fetching data so a concurrent registration only ever
        // makes the cached entry look stale
        let generation = self.registry.generation();
        let no_units = || FormatError::NoUnitsAvailable {
            locale: self.locale.clone(),
            flavours: style.flavours().join(", "),
        };
        let data = self.registry.get(&self.locale).ok_or_else(no_units)?;
        let (flavour_name, flavour) = self.pick_flavour(&data, style).ok_or_else(no_units)?;

        let units: Vec<Unit> = self
            .available_units(&data, flavour_name, generation)
            .iter()
            .filter(|unit| style.allows(unit))
            .cloned()
            .collect();
        if units.is_empty() {
            return Err(no_units());
        }

        let scale = style.scale();
        let selection = scale
            .select(elapsed, Some(units.as_slice()), style.rounding())
            .ok_or(FormatError::NoStepSelected { elapsed })?;
        let refresh_in_ms = scale
            .next_change(elapsed, Some(units.as_slice()), style.rounding())
            .map(|delta| (delta * 1000.0).floor() as u64 + 1);

        let step = selection.step;
        if let Some(formatter) = step.formatter() {
            if let Some(text) = formatter.format(input, &self.locale) {
                return Ok(Formatted {
                    text,
                    refresh_in_ms,
                });
            }
        }

        let text = if *step.unit() == Unit::Now {
            let future = options.future || elapsed < 0.0;
            resolve_now(future, flavour, data.flavour(LONG), data.now_messages())
                .unwrap_or_default()
                .to_string()
        } else {
            let signed = if elapsed == 0.0 {
                0.0
            } else {
                -elapsed.signum() * selection.amount
            };
            match flavour.get(step.unit().as_str()) {
                Some(messages) => {
                    let template = resolve(messages, signed, data.plural_rule(), options.future);
                    substitute(template, &format_number(selection.amount, data.locale()))
                }
                None => {
                    log::warn!("No {} message in {}/{}", step.unit(), self.locale, flavour_name);
                    String::new()
                }
            }
        };

        log::trace!("{}s in {} -> {:?}", elapsed, self.locale, text);
        Ok(Formatted {
            text,
            refresh_in_ms,
        })
    }
}
