use serde::{Deserialize, Serialize};

use super::{Deal, ModelError};

pub type ShowId = u64;

/// One podcast and the deal struck with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub name: String,

    /// Current-year base revenue.
    pub revenue: f64,

    /// Informational only; the projection never reads it.
    pub listeners: u64,

    /// Annual growth as a percentage (10 means +10% per year). May be
    /// negative.
    pub growth_rate: f64,

    /// Percentage of revenue attributed to the counterparty.
    pub rev_share: f64,

    pub deal: Deal,
}

impl Show {
    /// Checks the non-negativity invariants of the record.
    ///
    /// Percentages are not range-checked. NaN passes, since it is not
    /// negative; it simply propagates through the projection.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.revenue < 0.0 {
            return Err(ModelError::NegativeRevenue(self.revenue));
        }
        if let Deal::Equity { investment } = self.deal {
            if investment < 0.0 {
                return Err(ModelError::NegativeInvestment(investment));
            }
        }
        Ok(())
    }

    /// Upfront investment counted as a year-0 cost.
    pub fn investment(&self) -> f64 {
        self.deal.investment()
    }

    pub fn is_equity(&self) -> bool {
        matches!(self.deal, Deal::Equity { .. })
    }
}
