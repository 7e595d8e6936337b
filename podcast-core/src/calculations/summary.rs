//! Final-year headline figures.
//!
//! This is computed separately from the series in [`super::projection`]
//! and differs from it in one respect: one-time costs are
//! counted once here, whereas the series charges them in every year.
//! Equity investments are added to the final-year costs as well.

use serde::{Deserialize, Serialize};

use super::common::{compound, total_investments, total_revenue};
use super::{ProfitColor, ProfitTier};
use crate::{Cost, CostCategory, ProjectionConfig, Show};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalYearSummary {
    /// Index of the summarised year (`horizon - 1`).
    pub year_index: usize,
    pub total_revenue: f64,
    pub total_investments: f64,
    pub total_costs: f64,
    pub total_profit: f64,
}

impl FinalYearSummary {
    /// Computes the summary for the last year of `horizon`.
    ///
    /// # Arguments
    ///
    /// * `shows` - Every show; equity investments are added to the costs
    /// * `costs` - Operating costs; one-time amounts are counted once
    /// * `horizon` - Number of projected years; zero is summarised as year 0
    /// * `inflation_factor` - Year-over-year multiplier for recurring costs (1.03 for 3%)
    ///
    /// # Returns
    ///
    /// Revenue, investments, costs and profit for year `horizon - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use podcast_core::{Cost, CostCategory, FinalYearSummary};
    ///
    /// let costs = vec![
    ///     Cost {
    ///         id: 1,
    ///         name: "Producer".to_string(),
    ///         amount: 50_000.0,
    ///         category: CostCategory::Recurring,
    ///     },
    ///     Cost {
    ///         id: 2,
    ///         name: "Microphones".to_string(),
    ///         amount: 5_000.0,
    ///         category: CostCategory::OneTime,
    ///     },
    /// ];
    ///
    /// let summary = FinalYearSummary::compute(&[], &costs, 3, 1.0);
    ///
    /// assert_eq!(summary.year_index, 2);
    /// assert_eq!(summary.total_costs, 55_000.0);
    /// assert_eq!(summary.total_profit, -55_000.0);
    /// ```
    pub fn compute(
        shows: &[Show],
        costs: &[Cost],
        horizon: usize,
        inflation_factor: f64,
    ) -> Self {
        let year = horizon.saturating_sub(1);

        let total_revenue = total_revenue(shows, year);
        let total_investments = total_investments(shows);
        let total_costs = costs.iter().fold(0.0, |sum, cost| match cost.category {
            CostCategory::Recurring => sum + compound(cost.amount, inflation_factor, year),
            CostCategory::OneTime => sum + cost.amount,
        }) + total_investments;

        Self {
            year_index: year,
            total_revenue,
            total_investments,
            total_costs,
            total_profit: total_revenue - total_costs,
        }
    }

    /// Display label of the summarised year, e.g. `"Year 5"`.
    pub fn label(&self) -> String {
        format!("Year {}", self.year_index + 1)
    }

    pub fn tier(&self) -> ProfitTier {
        ProfitTier::classify(self.total_profit)
    }

    pub fn color(&self) -> ProfitColor {
        ProfitColor::classify(self.total_profit)
    }
}

/// Summarises the last year of `horizon` at the default 3% inflation.
pub fn summarize(
    shows: &[Show],
    costs: &[Cost],
    horizon: usize,
) -> FinalYearSummary {
    let config = ProjectionConfig {
        horizon,
        ..Default::default()
    };
    FinalYearSummary::compute(shows, costs, horizon, config.inflation_factor())
}
