//! Formatting styles and the built-in style book

use crate::input::TimeInput;
use crate::round::Rounding;
use crate::scale::{Scale, Step};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use timeago_core::unit::{DAY, HOUR, MINUTE, MONTH, WEEK};
use timeago_core::{Unit, LONG};

/// Style used when none is given
pub const DEFAULT_STYLE: &str = "round";

/// What a style override gets to look at
#[derive(Debug, Clone, Copy)]
pub struct OverrideContext<'a> {
    /// Reference instant in epoch milliseconds
    pub now: i64,
    pub input: &'a TimeInput,
    /// Seconds from the input to `now`; positive for the past
    pub elapsed: f64,
    pub locale: &'a str,
}

/// Wholesale replacement of a style's output.
///
/// Runs before unit selection. `Some` is returned verbatim, `None` lets
/// regular formatting proceed.
pub trait StyleOverride: Send + Sync {
    fn attempt(&self, context: &OverrideContext<'_>) -> Option<String>;
}

impl<F> StyleOverride for F
where
    F: Fn(&OverrideContext<'_>) -> Option<String> + Send + Sync,
{
    fn attempt(&self, context: &OverrideContext<'_>) -> Option<String> {
        self(context)
    }
}

/// Label flavours, a scale, an optional unit filter and an optional override
#[derive(Clone)]
pub struct Style {
    flavours: Vec<String>,
    scale: Scale,
    units: Option<Vec<Unit>>,
    rounding: Rounding,
    custom: Option<Arc<dyn StyleOverride>>,
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("flavours", &self.flavours)
            .field("scale", &self.scale)
            .field("units", &self.units)
            .field("rounding", &self.rounding)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl Style {
    /// A style over `scale` using the `long` flavour
    pub fn new(scale: Scale) -> Self {
        Self {
            flavours: vec![LONG.to_string()],
            scale,
            units: None,
            rounding: Rounding::Round,
            custom: None,
        }
    }

    /// Flavours to try in order; `long` is always the last resort
    pub fn with_flavours<I, S>(mut self, flavours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavours = flavours.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the scale to the given units
    pub fn with_units<I, U>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Unit>,
    {
        self.units = Some(units.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_custom(mut self, custom: impl StyleOverride + 'static) -> Self {
        self.custom = Some(Arc::new(custom));
        self
    }

    pub fn flavours(&self) -> &[String] {
        &self.flavours
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn units(&self) -> Option<&[Unit]> {
        self.units.as_deref()
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn custom(&self) -> Option<&dyn StyleOverride> {
        self.custom.as_deref()
    }

    /// Whether the unit filter lets `unit` through
    pub fn allows(&self, unit: &Unit) -> bool {
        self.units.as_ref().map_or(true, |units| units.contains(unit))
    }
}

// ── built-in scales ──────────────────────────────────────────────────────────

fn round_scale() -> Scale {
    [
        Unit::Now,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ]
    .into_iter()
    .map(Step::new)
    .collect()
}

/// Minutes in steps of five past a few minutes, a half-hour label, and
/// larger units once they are mostly reached
fn approximate_steps() -> Vec<Step> {
    vec![
        Step::new(Unit::Minute).with_threshold(45.0),
        Step::new(Unit::Minute)
            .with_granularity(5.0)
            .with_threshold(2.5 * MINUTE),
        Step::new("half-hour")
            .with_divisor(30.0 * MINUTE)
            .with_threshold(22.5 * MINUTE),
        Step::new(Unit::Hour)
            .with_threshold(42.5 * MINUTE)
            .with_threshold_after(Unit::Minute, 52.5 * MINUTE),
        Step::new(Unit::Day).with_threshold(20.5 * HOUR),
        Step::new(Unit::Week).with_threshold(5.5 * DAY),
        Step::new(Unit::Month).with_threshold(3.5 * WEEK),
        Step::new(Unit::Year).with_threshold(10.5 * MONTH),
    ]
}

fn approximate_scale() -> Scale {
    std::iter::once(Step::now())
        .chain(approximate_steps())
        .collect()
}

fn approximate_time_scale() -> Scale {
    std::iter::once(Step::new(Unit::Second))
        .chain(approximate_steps())
        .collect()
}

fn mini_scale(now: bool, seconds: bool) -> Scale {
    let mut steps = Vec::new();
    if now {
        steps.push(Step::now());
    }
    if seconds {
        steps.push(Step::new(Unit::Second));
    }
    steps.extend(
        [Unit::Minute, Unit::Hour, Unit::Day, Unit::Month, Unit::Year]
            .into_iter()
            .map(Step::new),
    );
    Scale::new(steps)
}

fn mini(now: bool, seconds: bool) -> Style {
    Style::new(mini_scale(now, seconds))
        .with_flavours(["mini"])
        .with_rounding(Rounding::Floor)
}

/// Named styles
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: BTreeMap<String, Style>,
}

impl Styles {
    /// An empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in styles
    pub fn builtin() -> Self {
        let mut styles = Self::new();
        styles.insert("round", Style::new(round_scale()));
        styles.insert(
            "round-minute",
            Style::new(round_scale()).with_units([
                Unit::Now,
                Unit::Minute,
                Unit::Hour,
                Unit::Day,
                Unit::Week,
                Unit::Month,
                Unit::Year,
            ]),
        );
        styles.insert("approximate", Style::new(approximate_scale()));
        styles.insert(
            "approximate-time",
            Style::new(approximate_time_scale()).with_flavours(["long-time", LONG]),
        );
        styles.insert("mini", mini(false, true));
        styles.insert("mini-now", mini(true, true));
        styles.insert("mini-minute", mini(false, false));
        styles.insert("mini-minute-now", mini(true, false));
        styles
    }

    /// Adds or replaces a named style
    pub fn insert(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Style names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }
}
