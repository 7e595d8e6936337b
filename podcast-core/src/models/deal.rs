use serde::{Deserialize, Serialize};

/// Field-less deal code, as entered in forms and data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealType {
    RevShare,
    Equity,
}

impl DealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RevShare => "rev_share",
            Self::Equity => "equity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RevShare => "Rev Share",
            Self::Equity => "Equity",
        }
    }

    /// Accepts the snake-case code as well as the camel-case `revShare`
    /// spelling used by older exports.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "rev_share" | "revShare" | "revshare" => Some(Self::RevShare),
            "equity" => Some(Self::Equity),
            _ => None,
        }
    }
}

/// The terms agreed with a show.
///
/// Only an equity deal carries an upfront investment, so a revenue-share
/// show can never hold a stray investment amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Deal {
    RevenueShare,
    Equity { investment: f64 },
}

impl Deal {
    pub fn deal_type(&self) -> DealType {
        match self {
            Self::RevenueShare => DealType::RevShare,
            Self::Equity { .. } => DealType::Equity,
        }
    }

    /// Upfront capital counted as a cost; zero for revenue-share deals.
    pub fn investment(&self) -> f64 {
        match self {
            Self::RevenueShare => 0.0,
            Self::Equity { investment } => *investment,
        }
    }

    /// Builds a deal from its code and an optional investment amount.
    ///
    /// A missing investment on an equity deal is treated as zero; an
    /// investment supplied with a revenue-share code is dropped.
    pub fn from_parts(
        deal_type: DealType,
        investment: Option<f64>,
    ) -> Self {
        match deal_type {
            DealType::RevShare => Self::RevenueShare,
            DealType::Equity => Self::Equity {
                investment: investment.unwrap_or(0.0),
            },
        }
    }
}
