use podcast_core::{Cost, CostCategory, Deal, Portfolio, PortfolioError, Show};

/// The seed shows a fresh session starts with.
fn sample_shows() -> Vec<Show> {
    vec![
        Show {
            id: 1,
            name: "Fifth Column".to_string(),
            revenue: 1_000_000.0,
            listeners: 50_000,
            growth_rate: 10.0,
            rev_share: 30.0,
            deal: Deal::RevenueShare,
        },
        Show {
            id: 2,
            name: "Blocked & Reported".to_string(),
            revenue: 800_000.0,
            listeners: 40_000,
            growth_rate: 10.0,
            rev_share: 10.0,
            deal: Deal::RevenueShare,
        },
        Show {
            id: 3,
            name: "New Show Example".to_string(),
            revenue: 50_000.0,
            listeners: 3_000,
            growth_rate: 20.0,
            rev_share: 25.0,
            deal: Deal::Equity {
                investment: 100_000.0,
            },
        },
    ]
}

/// The seed operating costs: two salaries.
fn sample_costs() -> Vec<Cost> {
    vec![
        Cost {
            id: 1,
            name: "Salary 1".to_string(),
            amount: 150_000.0,
            category: CostCategory::Recurring,
        },
        Cost {
            id: 2,
            name: "Salary 2".to_string(),
            amount: 140_000.0,
            category: CostCategory::Recurring,
        },
    ]
}

pub fn sample_portfolio() -> Result<Portfolio, PortfolioError> {
    Portfolio::new(sample_shows(), sample_costs())
}
