//! Command-line edits applied to a portfolio before projecting.
//!
//! | Syntax | Effect |
//! |--------|--------|
//! | `show.<id>.<field>=<value>` | edit a show; fields: `name`, `revenue`, `listeners`, `growth`, `rev_share`, `investment`, `deal` |
//! | `cost.<id>.<field>=<value>` | edit a cost; fields: `name`, `amount`, `category` |
//! | `remove-show=<id>` | remove a show |
//! | `remove-cost=<id>` | remove a cost |
//! | `add-cost=<name>:<amount>:<category>` | add a cost under the next free id |
//!
//! Numeric values go through a [`DraftNumber`] seeded with the current
//! value, so text that does not parse leaves the field unchanged.

use std::str::FromStr;

use podcast_core::{CostCategory, CostId, DealType, Portfolio, PortfolioError, ShowId};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::draft::DraftNumber;
use crate::utils::{ParseAmountError, parse_amount};

#[derive(Debug, Error)]
pub enum EditError {
    #[error("malformed edit '{0}'")]
    Syntax(String),

    #[error("unknown {target} field '{field}'")]
    UnknownField { target: &'static str, field: String },

    #[error("invalid id '{0}'")]
    InvalidId(String),

    #[error("unrecognised deal type '{0}'")]
    InvalidDealType(String),

    #[error("unrecognised cost category '{0}'")]
    InvalidCategory(String),

    #[error(transparent)]
    Amount(#[from] ParseAmountError),

    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowField {
    Name,
    Revenue,
    Listeners,
    Growth,
    RevShare,
    Investment,
    Deal,
}

impl ShowField {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "revenue" => Some(Self::Revenue),
            "listeners" => Some(Self::Listeners),
            "growth" | "growth_rate" => Some(Self::Growth),
            "rev_share" => Some(Self::RevShare),
            "investment" => Some(Self::Investment),
            "deal" | "deal_type" => Some(Self::Deal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostField {
    Name,
    Amount,
    Category,
}

impl CostField {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "amount" => Some(Self::Amount),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

/// A single parsed edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Show {
        id: ShowId,
        field: ShowField,
        value: String,
    },
    Cost {
        id: CostId,
        field: CostField,
        value: String,
    },
    RemoveShow(ShowId),
    RemoveCost(CostId),
    AddCost {
        name: String,
        amount: f64,
        category: CostCategory,
    },
}

impl FromStr for Edit {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, value) = s
            .split_once('=')
            .ok_or_else(|| EditError::Syntax(s.to_string()))?;
        let target = target.trim();

        match target {
            "remove-show" => return Ok(Self::RemoveShow(parse_id(value)?)),
            "remove-cost" => return Ok(Self::RemoveCost(parse_id(value)?)),
            "add-cost" => return parse_add_cost(s, value),
            _ => {}
        }

        let mut parts = target.splitn(3, '.');
        let (Some(kind), Some(id), Some(field)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EditError::Syntax(s.to_string()));
        };
        let id = parse_id(id)?;
        let value = value.to_string();

        match kind {
            "show" => {
                let field = ShowField::parse(field).ok_or_else(|| EditError::UnknownField {
                    target: "show",
                    field: field.to_string(),
                })?;
                Ok(Self::Show { id, field, value })
            }
            "cost" => {
                let field = CostField::parse(field).ok_or_else(|| EditError::UnknownField {
                    target: "cost",
                    field: field.to_string(),
                })?;
                Ok(Self::Cost { id, field, value })
            }
            _ => Err(EditError::Syntax(s.to_string())),
        }
    }
}

impl Edit {
    /// Applies the edit. On error the portfolio is left as it was.
    pub fn apply(
        &self,
        portfolio: &mut Portfolio,
    ) -> Result<(), EditError> {
        match self {
            Self::Show { id, field, value } => apply_show_edit(portfolio, *id, *field, value),
            Self::Cost { id, field, value } => apply_cost_edit(portfolio, *id, *field, value),
            Self::RemoveShow(id) => {
                portfolio.remove_show(*id)?;
                Ok(())
            }
            Self::RemoveCost(id) => {
                portfolio.remove_cost(*id)?;
                Ok(())
            }
            Self::AddCost {
                name,
                amount,
                category,
            } => {
                portfolio.add_cost(name, *amount, *category)?;
                Ok(())
            }
        }
    }
}

fn apply_show_edit(
    portfolio: &mut Portfolio,
    id: ShowId,
    field: ShowField,
    value: &str,
) -> Result<(), EditError> {
    let show = portfolio
        .show(id)
        .ok_or(PortfolioError::ShowNotFound(id))?
        .clone();

    match field {
        ShowField::Name => {
            let name = value.trim().to_string();
            portfolio.update_show(id, |s| s.name = name)?;
        }
        ShowField::Revenue => {
            let revenue = redraft(show.revenue, value);
            portfolio.update_show(id, |s| s.revenue = revenue)?;
        }
        ShowField::Listeners => {
            let listeners = redraft(show.listeners as f64, value);
            if !listeners.is_finite() || listeners < 0.0 {
                warn!(id, listeners, "ignoring listener count");
                return Ok(());
            }
            portfolio.update_show(id, |s| s.listeners = listeners.round() as u64)?;
        }
        ShowField::Growth => {
            let growth_rate = redraft(show.growth_rate, value);
            portfolio.update_show(id, |s| s.growth_rate = growth_rate)?;
        }
        ShowField::RevShare => {
            let rev_share = redraft(show.rev_share, value);
            portfolio.update_show(id, |s| s.rev_share = rev_share)?;
        }
        ShowField::Investment => {
            let investment = redraft(show.investment(), value);
            portfolio.set_investment(id, investment)?;
        }
        ShowField::Deal => {
            let deal_type = DealType::parse(value)
                .ok_or_else(|| EditError::InvalidDealType(value.to_string()))?;
            portfolio.set_deal_type(id, deal_type)?;
        }
    }

    info!(id, ?field, value, "show edited");
    Ok(())
}

fn apply_cost_edit(
    portfolio: &mut Portfolio,
    id: CostId,
    field: CostField,
    value: &str,
) -> Result<(), EditError> {
    let cost = portfolio
        .cost(id)
        .ok_or(PortfolioError::CostNotFound(id))?
        .clone();

    match field {
        CostField::Name => {
            let name = value.trim().to_string();
            portfolio.update_cost(id, |c| c.name = name)?;
        }
        CostField::Amount => {
            let amount = redraft(cost.amount, value);
            portfolio.update_cost(id, |c| c.amount = amount)?;
        }
        CostField::Category => {
            let category = CostCategory::parse(value)
                .ok_or_else(|| EditError::InvalidCategory(value.to_string()))?;
            portfolio.update_cost(id, |c| c.category = category)?;
        }
    }

    info!(id, ?field, value, "cost edited");
    Ok(())
}

/// Runs `text` through a draft seeded with `current`.
fn redraft(
    current: f64,
    text: &str,
) -> f64 {
    let mut draft = DraftNumber::new(current);
    draft.focus();
    draft.input(text);
    debug!(draft = %draft.display(), "amount entered");
    draft.commit()
}

fn parse_id(s: &str) -> Result<u64, EditError> {
    s.trim()
        .parse()
        .map_err(|_| EditError::InvalidId(s.to_string()))
}

fn parse_add_cost(
    edit: &str,
    value: &str,
) -> Result<Edit, EditError> {
    // Split from the right so the name may contain colons.
    let mut parts = value.rsplitn(3, ':');
    let (Some(category), Some(amount), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(EditError::Syntax(edit.to_string()));
    };

    let category =
        CostCategory::parse(category).ok_or_else(|| EditError::InvalidCategory(category.to_string()))?;

    Ok(Edit::AddCost {
        name: name.trim().to_string(),
        amount: parse_amount(amount)?,
        category,
    })
}
