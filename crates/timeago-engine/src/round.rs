//! Quantity rounding

/// Rounds `amount` to the nearest multiple of `granularity`.
/// Without a granularity the amount is returned unchanged.
pub fn round(amount: f64, granularity: Option<f64>) -> f64 {
    match granularity {
        Some(step) if step > 0.0 => (amount / step).round() * step,
        _ => amount,
    }
}

/// How a style turns a fractional unit amount into the displayed one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Nearest whole value: 1.5 hours is "2 hours"
    #[default]
    Round,
    /// Whole units elapsed so far: 1.9 hours is "1 hour"
    Floor,
}

impl Rounding {
    pub fn as_str(self) -> &'static str {
        match self {
            Rounding::Round => "round",
            Rounding::Floor => "floor",
        }
    }

    /// Rounds to a multiple of `granularity`, or to an integer when unset
    pub fn apply(self, amount: f64, granularity: Option<f64>) -> f64 {
        let step = granularity.filter(|g| *g > 0.0).unwrap_or(1.0);
        let multiples = amount / step;
        let multiples = match self {
            Rounding::Round => multiples.round(),
            Rounding::Floor => multiples.floor(),
        };
        multiples * step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_without_granularity_is_identity() {
        for amount in [0.0, 0.4, 1.5, 62.0, 1e9] {
            assert_eq!(round(amount, None), amount);
        }
    }

    #[test]
    fn test_round_to_granularity() {
        assert_eq!(round(62.0, Some(5.0)), 60.0);
        assert_eq!(round(63.0, Some(5.0)), 65.0);
        assert_eq!(round(2.0, Some(5.0)), 0.0);
    }

    #[test]
    fn test_round_result_is_multiple() {
        for i in 0..500 {
            let amount = i as f64 * 0.37;
            let rounded = round(amount, Some(15.0));
            assert_eq!(rounded % 15.0, 0.0, "{} -> {}", amount, rounded);
        }
    }

    #[test]
    fn test_rounding_modes() {
        assert_eq!(Rounding::Round.apply(1.5, None), 2.0);
        assert_eq!(Rounding::Floor.apply(1.9, None), 1.0);
        assert_eq!(Rounding::Floor.apply(9.9, Some(5.0)), 5.0);
        assert_eq!(Rounding::Round.apply(0.4, None), 0.0);
    }
}
