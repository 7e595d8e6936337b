use serde::{Deserialize, Serialize};

use super::ModelError;

pub type CostId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "recurring")]
    Recurring,
}

impl CostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Recurring => "recurring",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneTime => "One-time Investment",
            Self::Recurring => "Recurring Cost",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "one-time" | "one_time" | "onetime" => Some(Self::OneTime),
            "recurring" => Some(Self::Recurring),
            _ => None,
        }
    }
}

/// An operating cost line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: CostId,
    pub name: String,

    /// Base annual amount for recurring costs, or the one-time amount.
    pub amount: f64,

    pub category: CostCategory,
}

impl Cost {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.amount < 0.0 {
            return Err(ModelError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}
