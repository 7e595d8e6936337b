//! The editable lists of shows and costs.
//!
//! Every edit replaces a whole record: the current record is cloned, the
//! change is applied to the copy, the copy is validated, and only then does
//! it take the original's place. Ids are unique within each list.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    Cost, CostCategory, CostId, Deal, DealType, ModelError, Projection, ProjectionEngine, Show,
    ShowId,
};

#[derive(Debug, Error, PartialEq)]
pub enum PortfolioError {
    #[error("duplicate show id {0}")]
    DuplicateShowId(ShowId),

    #[error("duplicate cost id {0}")]
    DuplicateCostId(CostId),

    #[error("no show with id {0}")]
    ShowNotFound(ShowId),

    #[error("no cost with id {0}")]
    CostNotFound(CostId),

    /// New costs need a name.
    #[error("cost name must not be empty")]
    EmptyCostName,

    /// Investments only exist on equity deals.
    #[error("show {0} is not an equity deal")]
    NotEquity(ShowId),

    #[error(transparent)]
    Invalid(#[from] ModelError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    shows: Vec<Show>,
    costs: Vec<Cost>,
}

impl Portfolio {
    /// Builds a portfolio after validating every record and checking id
    /// uniqueness in both lists.
    pub fn new(
        shows: Vec<Show>,
        costs: Vec<Cost>,
    ) -> Result<Self, PortfolioError> {
        let mut seen = HashSet::new();
        for show in &shows {
            show.validate()?;
            if !seen.insert(show.id) {
                return Err(PortfolioError::DuplicateShowId(show.id));
            }
        }

        let mut seen = HashSet::new();
        for cost in &costs {
            cost.validate()?;
            if !seen.insert(cost.id) {
                return Err(PortfolioError::DuplicateCostId(cost.id));
            }
        }

        Ok(Self { shows, costs })
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    pub fn show(
        &self,
        id: ShowId,
    ) -> Option<&Show> {
        self.shows.iter().find(|s| s.id == id)
    }

    pub fn cost(
        &self,
        id: CostId,
    ) -> Option<&Cost> {
        self.costs.iter().find(|c| c.id == id)
    }

    // ---------------------------------------------------------------------
    // Shows
    // ---------------------------------------------------------------------

    pub fn remove_show(
        &mut self,
        id: ShowId,
    ) -> Result<Show, PortfolioError> {
        let index = self
            .shows
            .iter()
            .position(|s| s.id == id)
            .ok_or(PortfolioError::ShowNotFound(id))?;

        let removed = self.shows.remove(index);
        info!(id, name = %removed.name, "show removed");
        Ok(removed)
    }

    /// Applies `edit` to a copy of the show and swaps it in if it is valid.
    ///
    /// The id cannot be changed through an edit.
    pub fn update_show<F>(
        &mut self,
        id: ShowId,
        edit: F,
    ) -> Result<(), PortfolioError>
    where
        F: FnOnce(&mut Show),
    {
        let slot = self
            .shows
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(PortfolioError::ShowNotFound(id))?;

        let mut updated = slot.clone();
        edit(&mut updated);
        updated.id = id;
        updated.validate()?;

        debug!(id, "show updated");
        *slot = updated;
        Ok(())
    }

    /// Switches a show's deal type.
    ///
    /// Moving to revenue share drops any investment; moving to equity starts
    /// with a zero investment. Re-selecting the current type changes nothing.
    pub fn set_deal_type(
        &mut self,
        id: ShowId,
        deal_type: DealType,
    ) -> Result<(), PortfolioError> {
        self.update_show(id, |show| {
            if show.deal.deal_type() != deal_type {
                show.deal = Deal::from_parts(deal_type, None);
            }
        })
    }

    pub fn set_investment(
        &mut self,
        id: ShowId,
        amount: f64,
    ) -> Result<(), PortfolioError> {
        match self.show(id) {
            None => return Err(PortfolioError::ShowNotFound(id)),
            Some(show) if !show.is_equity() => return Err(PortfolioError::NotEquity(id)),
            Some(_) => {}
        }

        self.update_show(id, |show| {
            show.deal = Deal::Equity { investment: amount };
        })
    }

    // ---------------------------------------------------------------------
    // Costs
    // ---------------------------------------------------------------------

    /// Adds a cost under the next free id and returns that id.
    pub fn add_cost(
        &mut self,
        name: &str,
        amount: f64,
        category: CostCategory,
    ) -> Result<CostId, PortfolioError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PortfolioError::EmptyCostName);
        }

        let cost = Cost {
            id: self.next_cost_id(),
            name: name.to_string(),
            amount,
            category,
        };
        cost.validate()?;

        let id = cost.id;
        info!(id, name, amount, category = category.as_str(), "cost added");
        self.costs.push(cost);
        Ok(id)
    }

    pub fn remove_cost(
        &mut self,
        id: CostId,
    ) -> Result<Cost, PortfolioError> {
        let index = self
            .costs
            .iter()
            .position(|c| c.id == id)
            .ok_or(PortfolioError::CostNotFound(id))?;

        let removed = self.costs.remove(index);
        info!(id, name = %removed.name, "cost removed");
        Ok(removed)
    }

    pub fn update_cost<F>(
        &mut self,
        id: CostId,
        edit: F,
    ) -> Result<(), PortfolioError>
    where
        F: FnOnce(&mut Cost),
    {
        let slot = self
            .costs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(PortfolioError::CostNotFound(id))?;

        let mut updated = slot.clone();
        edit(&mut updated);
        updated.id = id;
        updated.validate()?;

        debug!(id, "cost updated");
        *slot = updated;
        Ok(())
    }

    /// Sum of the base cost amounts, without inflation or investments.
    pub fn total_annual_costs(&self) -> f64 {
        self.costs.iter().fold(0.0, |sum, c| sum + c.amount)
    }

    /// Projects the current snapshot of both lists.
    pub fn project(
        &self,
        engine: &ProjectionEngine,
    ) -> Projection {
        engine.run(&self.shows, &self.costs)
    }

    fn next_cost_id(&self) -> CostId {
        self.costs.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }
}
