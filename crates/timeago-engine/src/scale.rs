//! Scale (gradation) steps and unit selection
//!
//! A scale is an ordered list of steps, smallest unit first. For an elapsed
//! time the stepper walks the steps while their thresholds are met, takes
//! the last one reached, and steps back down while the rounded amount is
//! zero.

use crate::input::TimeInput;
use crate::round::Rounding;
use std::fmt;
use std::sync::Arc;
use timeago_core::Unit;

/// Formats a step's output directly, bypassing locale messages.
/// Returning `None` falls back to the locale template.
pub trait StepFormatter: Send + Sync {
    fn format(&self, input: &TimeInput, locale: &str) -> Option<String>;
}

impl<F> StepFormatter for F
where
    F: Fn(&TimeInput, &str) -> Option<String> + Send + Sync,
{
    fn format(&self, input: &TimeInput, locale: &str) -> Option<String> {
        self(input, locale)
    }
}

/// One entry of a scale
#[derive(Clone)]
pub struct Step {
    unit: Unit,
    divisor: Option<f64>,
    threshold: Option<f64>,
    thresholds_after: Vec<(Unit, f64)>,
    granularity: Option<f64>,
    formatter: Option<Arc<dyn StepFormatter>>,
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("unit", &self.unit)
            .field("divisor", &self.divisor)
            .field("threshold", &self.threshold)
            .field("thresholds_after", &self.thresholds_after)
            .field("granularity", &self.granularity)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl Step {
    /// A step in `unit`; the divisor defaults to the unit's length
    pub fn new(unit: impl Into<Unit>) -> Self {
        let unit = unit.into();
        Self {
            divisor: unit.seconds(),
            unit,
            threshold: None,
            thresholds_after: Vec::new(),
            granularity: None,
            formatter: None,
        }
    }

    /// The `now` pseudo-step
    pub fn now() -> Self {
        Self::new(Unit::Now)
    }

    /// Seconds per unit of this step
    pub fn with_divisor(mut self, seconds: f64) -> Self {
        self.divisor = Some(seconds);
        self
    }

    /// Minimum elapsed seconds for this step to apply
    pub fn with_threshold(mut self, seconds: f64) -> Self {
        self.threshold = Some(seconds);
        self
    }

    /// Threshold used when the step directly follows a step in `previous`
    pub fn with_threshold_after(mut self, previous: impl Into<Unit>, seconds: f64) -> Self {
        self.thresholds_after.push((previous.into(), seconds));
        self
    }

    /// Rounds amounts to multiples of `granularity` units
    pub fn with_granularity(mut self, granularity: f64) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub fn with_formatter(mut self, formatter: impl StepFormatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn divisor(&self) -> Option<f64> {
        self.divisor
    }

    pub fn granularity(&self) -> Option<f64> {
        self.granularity
    }

    pub fn formatter(&self) -> Option<&dyn StepFormatter> {
        self.formatter.as_deref()
    }

    /// Whether the step can express an amount; unit steps need a divisor
    fn is_applicable(&self) -> bool {
        self.unit == Unit::Now || self.increment().is_some()
    }

    /// Seconds covered by one rounding increment
    fn increment(&self) -> Option<f64> {
        let divisor = self.divisor.filter(|_| self.unit != Unit::Now)?;
        Some(divisor * self.granularity.unwrap_or(1.0))
    }

    /// Threshold of this step when preceded by `previous`.
    ///
    /// Unless set explicitly, the first step starts at zero. With `Floor` a
    /// step starts once one whole increment has elapsed; with `Round` it
    /// starts where the previous step would round up to it.
    fn threshold_after(&self, previous: Option<&Step>, rounding: Rounding) -> f64 {
        if let Some(previous) = previous {
            if let Some((_, seconds)) = self
                .thresholds_after
                .iter()
                .find(|(unit, _)| *unit == previous.unit)
            {
                return *seconds;
            }
        }
        if let Some(seconds) = self.threshold {
            return seconds;
        }
        let (Some(previous), Some(increment)) = (previous, self.increment()) else {
            return 0.0;
        };
        match (rounding, previous.increment()) {
            (Rounding::Floor, _) => increment,
            (Rounding::Round, Some(smaller)) => increment - smaller / 2.0,
            (Rounding::Round, None) => increment / 2.0,
        }
    }

    /// Rounded amount of this step's unit; always zero for `now`
    fn amount(&self, magnitude: f64, rounding: Rounding) -> f64 {
        match self.divisor.filter(|_| self.unit != Unit::Now) {
            Some(divisor) => rounding.apply(magnitude / divisor, self.granularity),
            None => 0.0,
        }
    }

    /// Magnitudes around `magnitude` at which the rounded amount changes
    fn rounding_boundaries(&self, magnitude: f64, rounding: Rounding) -> Vec<f64> {
        let Some(increment) = self.increment() else {
            return Vec::new();
        };
        let offset = match rounding {
            Rounding::Round => 0.5,
            Rounding::Floor => 0.0,
        };
        let n = (magnitude / increment - offset).floor();
        [n - 1.0, n, n + 1.0]
            .iter()
            .map(|k| (k + offset) * increment)
            .filter(|b| *b >= 0.0)
            .collect()
    }
}

/// The step chosen for an elapsed time
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub step: &'a Step,
    /// Rounded, unsigned amount in the step's unit
    pub amount: f64,
}

/// Ordered list of steps, smallest unit first
#[derive(Debug, Clone, Default)]
pub struct Scale {
    steps: Vec<Step>,
}

impl FromIterator<Step> for Scale {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Scale {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Distinct units of the scale in step order
    pub fn units(&self) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = Vec::new();
        for step in &self.steps {
            if !units.contains(&&step.unit) {
                units.push(&step.unit);
            }
        }
        units
    }

    fn candidates(&self, allowed: Option<&[Unit]>) -> Vec<&Step> {
        self.steps
            .iter()
            .filter(|step| allowed.map_or(true, |units| units.contains(&step.unit)))
            .filter(|step| {
                let applicable = step.is_applicable();
                if !applicable {
                    log::trace!("skipping step {} without a divisor", step.unit);
                }
                applicable
            })
            .collect()
    }

    /// Index of the last candidate whose threshold `magnitude` meets
    fn reached(candidates: &[&Step], magnitude: f64, rounding: Rounding) -> Option<usize> {
        let mut reached = None;
        for (i, step) in candidates.iter().enumerate() {
            let previous = i.checked_sub(1).map(|p| candidates[p]);
            if magnitude < step.threshold_after(previous, rounding) {
                break;
            }
            reached = Some(i);
        }
        reached
    }

    /// Selects the step for `elapsed` seconds (sign ignored).
    ///
    /// Only steps whose unit is in `allowed` take part (all when `None`);
    /// unit steps without a divisor never do.
    /// A step whose rounded amount is zero hands over to the next smaller
    /// step, repeatedly; the smallest candidate is kept even at zero.
    pub fn select(
        &self,
        elapsed: f64,
        allowed: Option<&[Unit]>,
        rounding: Rounding,
    ) -> Option<Selection<'_>> {
        let candidates = self.candidates(allowed);
        let magnitude = elapsed.abs();
        let mut index = Self::reached(&candidates, magnitude, rounding)?;

        loop {
            let step = candidates[index];
            let amount = step.amount(magnitude, rounding);
            if amount != 0.0 || step.unit == Unit::Now || index == 0 {
                return Some(Selection { step, amount });
            }
            log::trace!("{} rounds to zero at {}s, trying a smaller step", step.unit, magnitude);
            index -= 1;
        }
    }

    /// Seconds from `elapsed` until the selection for this scale may change.
    ///
    /// Elapsed time grows as the clock advances, so past magnitudes grow
    /// and future ones shrink towards zero. `None` when nothing is selected.
    pub fn next_change(
        &self,
        elapsed: f64,
        allowed: Option<&[Unit]>,
        rounding: Rounding,
    ) -> Option<f64> {
        let candidates = self.candidates(allowed);
        let magnitude = elapsed.abs();
        let reached = Self::reached(&candidates, magnitude, rounding)?;
        let selected = self.select(elapsed, allowed, rounding)?;

        let mut boundaries = vec![0.0];
        for (i, step) in candidates.iter().enumerate() {
            let previous = i.checked_sub(1).map(|p| candidates[p]);
            boundaries.push(step.threshold_after(previous, rounding));
        }
        boundaries.extend(selected.step.rounding_boundaries(magnitude, rounding));
        boundaries.extend(candidates[reached].rounding_boundaries(magnitude, rounding));

        boundaries
            .iter()
            .flat_map(|b| [*b, -*b])
            .map(|boundary| boundary - elapsed)
            .filter(|delta| *delta > 0.0)
            .min_by(f64::total_cmp)
    }
}
