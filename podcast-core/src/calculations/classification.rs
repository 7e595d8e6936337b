//! Qualitative profit indicators for the headline display.
//!
//! The tier and the colour are independent: a small positive profit is
//! coloured positive but sits in the neutral tier.

use serde::{Deserialize, Serialize};

/// Profit at or above this value is at least [`ProfitTier::Medium`].
pub const MEDIUM_PROFIT_THRESHOLD: f64 = 100_000.0;

/// Profit at or above this value is [`ProfitTier::High`].
pub const HIGH_PROFIT_THRESHOLD: f64 = 500_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitTier {
    /// Zero or negative profit.
    NoProfit,
    Low,
    Medium,
    High,
}

impl ProfitTier {
    /// Buckets a profit value.
    ///
    /// The comparisons run from the bottom up, so a NaN profit fails every
    /// one of them and lands in [`ProfitTier::High`].
    pub fn classify(profit: f64) -> Self {
        if profit <= 0.0 {
            Self::NoProfit
        } else if profit < MEDIUM_PROFIT_THRESHOLD {
            Self::Low
        } else if profit < HIGH_PROFIT_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoProfit => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Self::NoProfit => "😢",
            Self::Low => "😐",
            Self::Medium => "🙂",
            Self::High => "🤑",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitColor {
    Negative,
    Positive,
}

impl ProfitColor {
    pub fn classify(profit: f64) -> Self {
        if profit <= 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // ProfitTier tests
    // =========================================================================

    #[test]
    fn zero_profit_is_no_profit() {
        assert_eq!(ProfitTier::classify(0.0), ProfitTier::NoProfit);
    }

    #[test]
    fn loss_is_no_profit() {
        assert_eq!(ProfitTier::classify(-250_000.0), ProfitTier::NoProfit);
    }

    #[test]
    fn small_profit_is_low() {
        assert_eq!(ProfitTier::classify(0.01), ProfitTier::Low);
        assert_eq!(ProfitTier::classify(99_999.99), ProfitTier::Low);
    }

    #[test]
    fn medium_starts_at_one_hundred_thousand() {
        assert_eq!(ProfitTier::classify(100_000.0), ProfitTier::Medium);
        assert_eq!(ProfitTier::classify(499_999.99), ProfitTier::Medium);
    }

    #[test]
    fn high_starts_at_five_hundred_thousand() {
        assert_eq!(ProfitTier::classify(500_000.0), ProfitTier::High);
        assert_eq!(ProfitTier::classify(10_000_000.0), ProfitTier::High);
    }

    #[test]
    fn nan_falls_through_to_high() {
        assert_eq!(ProfitTier::classify(f64::NAN), ProfitTier::High);
    }

    #[test]
    fn indicators_match_tiers() {
        assert_eq!(ProfitTier::NoProfit.indicator(), "😢");
        assert_eq!(ProfitTier::Low.indicator(), "😐");
        assert_eq!(ProfitTier::Medium.indicator(), "🙂");
        assert_eq!(ProfitTier::High.indicator(), "🤑");
    }

    // =========================================================================
    // ProfitColor tests
    // =========================================================================

    #[test]
    fn color_is_negative_at_or_below_zero() {
        assert_eq!(ProfitColor::classify(0.0), ProfitColor::Negative);
        assert_eq!(ProfitColor::classify(-1.0), ProfitColor::Negative);
    }

    #[test]
    fn color_is_positive_for_any_gain() {
        assert_eq!(ProfitColor::classify(0.5), ProfitColor::Positive);
    }

    #[test]
    fn color_is_independent_of_tier() {
        let profit = 50.0;

        assert_eq!(ProfitTier::classify(profit), ProfitTier::Low);
        assert_eq!(ProfitColor::classify(profit), ProfitColor::Positive);
    }
}
