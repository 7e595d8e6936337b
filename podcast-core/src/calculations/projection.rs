//! Year-by-year revenue, cost, and profit projection.
//!
//! For each year index `y` in `0..horizon`:
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | revenue  | Σ shows: `revenue × (1 + growth/100)^y × rev_share/100` |
//! | costs    | Σ recurring: `amount × (1 + inflation)^y`, plus Σ one-time: `amount`, plus equity investments in year 0 only |
//! | profit   | `revenue − costs` |
//!
//! One-time operating costs appear in every year of the series, while the
//! equity investment is a year-0 lump sum. [`FinalYearSummary`] counts
//! one-time costs once; the two computations are kept apart on purpose.
//!
//! # Example
//!
//! ```
//! use podcast_core::{Cost, CostCategory, project};
//!
//! let costs = vec![Cost {
//!     id: 1,
//!     name: "Salary 1".to_string(),
//!     amount: 150_000.0,
//!     category: CostCategory::Recurring,
//! }];
//!
//! let years = project(&[], &costs, 5);
//!
//! assert_eq!(years.len(), 5);
//! assert_eq!(years[0].costs, 150_000.0);
//! assert!((years[4].costs - 168_826.32).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use super::common::{compound, total_investments, total_revenue};
use super::{FinalYearSummary, ProfitColor, ProfitTier};
use crate::{Cost, CostCategory, ProjectionConfig, Show};

/// One point of the projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearResult {
    /// Zero-based year index; displayed as `year_index + 1`.
    pub year_index: usize,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
}

impl YearResult {
    /// Display label, e.g. `"Year 1"` for index 0.
    pub fn label(&self) -> String {
        format!("Year {}", self.year_index + 1)
    }
}

/// Series and headline figures for one snapshot of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub years: Vec<YearResult>,
    pub summary: FinalYearSummary,
}

impl Projection {
    pub fn tier(&self) -> ProfitTier {
        self.summary.tier()
    }

    pub fn color(&self) -> ProfitColor {
        self.summary.color()
    }
}

/// Runs projections with a fixed [`ProjectionConfig`].
///
/// The engine keeps no state between calls; every method reads its inputs
/// once and returns freshly allocated values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Projects `horizon` years, ordered by increasing year index.
    ///
    /// A zero horizon yields an empty series.
    pub fn series(
        &self,
        shows: &[Show],
        costs: &[Cost],
    ) -> Vec<YearResult> {
        let investments = total_investments(shows);

        (0..self.config.horizon)
            .map(|year| {
                let revenue = total_revenue(shows, year);
                let costs = self.operating_costs(costs, year)
                    + if year == 0 { investments } else { 0.0 };

                YearResult {
                    year_index: year,
                    revenue,
                    costs,
                    profit: revenue - costs,
                }
            })
            .collect()
    }

    /// Final-year headline figures; see [`FinalYearSummary`].
    pub fn summarize(
        &self,
        shows: &[Show],
        costs: &[Cost],
    ) -> FinalYearSummary {
        FinalYearSummary::compute(shows, costs, self.config.horizon, self.config.inflation_factor())
    }

    /// Runs both the series and the summary over the same snapshot.
    pub fn run(
        &self,
        shows: &[Show],
        costs: &[Cost],
    ) -> Projection {
        Projection {
            years: self.series(shows, costs),
            summary: self.summarize(shows, costs),
        }
    }

    /// Cost of a single line item in `year` as charged in the series.
    ///
    /// Recurring costs inflate from year 0; one-time costs are charged at
    /// their base amount in every year.
    pub fn cost_in_year(
        &self,
        cost: &Cost,
        year: usize,
    ) -> f64 {
        match cost.category {
            CostCategory::Recurring => compound(cost.amount, self.config.inflation_factor(), year),
            CostCategory::OneTime => cost.amount,
        }
    }

    fn operating_costs(
        &self,
        costs: &[Cost],
        year: usize,
    ) -> f64 {
        costs
            .iter()
            .fold(0.0, |sum, cost| sum + self.cost_in_year(cost, year))
    }
}

/// Projects `horizon` years at the default 3% inflation.
pub fn project(
    shows: &[Show],
    costs: &[Cost],
    horizon: usize,
) -> Vec<YearResult> {
    ProjectionEngine::new(ProjectionConfig {
        horizon,
        ..Default::default()
    })
    .series(shows, costs)
}
