//! CSV loaders for show and cost lists.
//!
//! ## Show CSV
//!
//! | Column        | Required | Type    | Notes |
//! |---------------|----------|---------|-------|
//! | `id`          | yes      | integer | unique within the file |
//! | `name`        | yes      | string  | |
//! | `revenue`     | yes      | decimal | current-year base revenue |
//! | `listeners`   | yes      | integer | informational |
//! | `growth_rate` | yes      | decimal | percent per year, e.g. `10` |
//! | `deal_type`   | yes      | string  | `rev_share` or `equity` |
//! | `rev_share`   | yes      | decimal | percent, e.g. `30` |
//! | `investment`  | no       | decimal | only read for `equity`; empty means 0 |
//!
//! ## Cost CSV
//!
//! | Column     | Required | Type    | Notes |
//! |------------|----------|---------|-------|
//! | `id`       | yes      | integer | unique within the file |
//! | `name`     | yes      | string  | |
//! | `amount`   | yes      | decimal | |
//! | `category` | yes      | string  | `one-time` or `recurring` |
//!
//! ```csv
//! id,name,amount,category
//! 1,Salary 1,150000,recurring
//! 2,Studio build-out,40000,one-time
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use podcast_core::{Cost, CostCategory, Deal, DealType, ModelError, Show};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading show or cost data.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    /// `row` is 1-based, not counting the header.
    #[error("unrecognised deal type '{value}' on row {row}")]
    InvalidDealType { value: String, row: usize },

    #[error("unrecognised cost category '{value}' on row {row}")]
    InvalidCategory { value: String, row: usize },

    #[error("invalid record on row {row}: {source}")]
    Model {
        row: usize,
        #[source]
        source: ModelError,
    },

    #[error("duplicate id {id} on row {row}")]
    DuplicateId { id: u64, row: usize },
}

/// A show row as it appears in a CSV or scenario file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowRecord {
    pub id: u64,
    pub name: String,
    pub revenue: f64,
    #[serde(default)]
    pub listeners: u64,
    #[serde(default)]
    pub growth_rate: f64,
    pub deal_type: String,
    #[serde(default)]
    pub rev_share: f64,
    #[serde(default)]
    pub investment: Option<f64>,
}

impl ShowRecord {
    /// Converts the row into a validated [`Show`].
    ///
    /// `row` is 1-based and only used in error messages.
    pub fn into_show(
        self,
        row: usize,
    ) -> Result<Show, LoaderError> {
        let deal_type =
            DealType::parse(&self.deal_type).ok_or_else(|| LoaderError::InvalidDealType {
                value: self.deal_type.clone(),
                row,
            })?;

        let show = Show {
            id: self.id,
            name: self.name,
            revenue: self.revenue,
            listeners: self.listeners,
            growth_rate: self.growth_rate,
            rev_share: self.rev_share,
            deal: Deal::from_parts(deal_type, self.investment),
        };
        show.validate()
            .map_err(|source| LoaderError::Model { row, source })?;
        Ok(show)
    }
}

/// A cost row as it appears in a CSV or scenario file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CostRecord {
    pub id: u64,
    pub name: String,
    pub amount: f64,
    pub category: String,
}

impl CostRecord {
    pub fn into_cost(
        self,
        row: usize,
    ) -> Result<Cost, LoaderError> {
        let category =
            CostCategory::parse(&self.category).ok_or_else(|| LoaderError::InvalidCategory {
                value: self.category.clone(),
                row,
            })?;

        let cost = Cost {
            id: self.id,
            name: self.name,
            amount: self.amount,
            category,
        };
        cost.validate()
            .map_err(|source| LoaderError::Model { row, source })?;
        Ok(cost)
    }
}

/// Loader for show lists.
pub struct ShowLoader;

impl ShowLoader {
    /// Parses and validates every row. Ids must be unique.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Show>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<ShowRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        let shows = convert_records(records, |record, row| record.into_show(row))?;
        check_unique(shows.iter().map(|s| s.id))?;

        debug!(count = shows.len(), "parsed shows");
        Ok(shows)
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<Show>, LoaderError> {
        Self::parse(open(path)?)
    }
}

/// Loader for cost lists.
pub struct CostLoader;

impl CostLoader {
    /// Parses and validates every row. Ids must be unique.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Cost>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<CostRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        let costs = convert_records(records, |record, row| record.into_cost(row))?;
        check_unique(costs.iter().map(|c| c.id))?;

        debug!(count = costs.len(), "parsed costs");
        Ok(costs)
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<Cost>, LoaderError> {
        Self::parse(open(path)?)
    }
}

/// Converts records in order, numbering rows from 1.
pub(crate) fn convert_records<R, T, F>(
    records: Vec<R>,
    convert: F,
) -> Result<Vec<T>, LoaderError>
where
    F: Fn(R, usize) -> Result<T, LoaderError>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| convert(record, index + 1))
        .collect()
}

/// Fails on the first repeated id; `row` is 1-based.
pub(crate) fn check_unique(ids: impl Iterator<Item = u64>) -> Result<(), LoaderError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if !seen.insert(id) {
            return Err(LoaderError::DuplicateId { id, row: index + 1 });
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<File, LoaderError> {
    File::open(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SHOWS_CSV: &str = "id,name,revenue,listeners,growth_rate,deal_type,rev_share,investment
1,Fifth Column,1000000,50000,10,rev_share,30,
2,New Show Example,50000,3000,20,equity,25,100000
";

    const COSTS_CSV: &str = "id,name,amount,category
1,Salary 1,150000,recurring
2,Studio,40000,one-time
";

    // =========================================================================
    // show parsing tests
    // =========================================================================

    #[test]
    fn parse_shows_reads_all_rows() {
        let shows = ShowLoader::parse(SHOWS_CSV.as_bytes()).unwrap();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].name, "Fifth Column");
        assert_eq!(shows[0].deal, Deal::RevenueShare);
        assert_eq!(shows[1].deal, Deal::Equity { investment: 100_000.0 });
    }

    #[test]
    fn parse_shows_treats_missing_equity_investment_as_zero() {
        let csv = "id,name,revenue,listeners,growth_rate,deal_type,rev_share,investment
7,Pilot,1000,10,0,equity,50,
";

        let shows = ShowLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(shows[0].investment(), 0.0);
    }

    #[test]
    fn parse_shows_drops_investment_on_revenue_share() {
        let csv = "id,name,revenue,listeners,growth_rate,deal_type,rev_share,investment
1,Old Equity,1000,10,0,rev_share,50,5000
";

        let shows = ShowLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(shows[0].deal, Deal::RevenueShare);
    }

    #[test]
    fn parse_shows_rejects_unknown_deal_type() {
        let csv = "id,name,revenue,listeners,growth_rate,deal_type,rev_share,investment
1,A,1,1,0,rev_share,10,
2,B,1,1,0,loan,10,
";

        let err = ShowLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            LoaderError::InvalidDealType { ref value, row: 2 } if value == "loan"
        ));
    }

    #[test]
    fn parse_shows_rejects_negative_revenue() {
        let csv = "id,name,revenue,listeners,growth_rate,deal_type,rev_share,investment
1,A,-1,1,0,rev_share,10,
";

        let err = ShowLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            LoaderError::Model {
                row: 1,
                source: ModelError::NegativeRevenue(_)
            }
        ));
    }

    #[test]
    fn parse_shows_rejects_negative_listeners() {
        let csv = "id,name,revenue,listeners,growth_rate,deal_type,rev_share,investment
1,A,1,-5,0,rev_share,10,
";

        let err = ShowLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoaderError::CsvParse(_)));
    }

    #[test]
    fn parse_shows_rejects_duplicate_ids() {
        let csv = "id,name,revenue,listeners,growth_rate,deal_type,rev_share,investment
4,A,1,1,0,rev_share,10,
4,B,1,1,0,rev_share,10,
";

        let err = ShowLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoaderError::DuplicateId { id: 4, row: 2 }));
    }

    // =========================================================================
    // cost parsing tests
    // =========================================================================

    #[test]
    fn parse_costs_reads_categories() {
        let costs = CostLoader::parse(COSTS_CSV.as_bytes()).unwrap();

        assert_eq!(costs.len(), 2);
        assert_eq!(costs[0].category, CostCategory::Recurring);
        assert_eq!(costs[1].category, CostCategory::OneTime);
    }

    #[test]
    fn parse_costs_rejects_unknown_category() {
        let csv = "id,name,amount,category
1,Rent,1000,monthly
";

        let err = CostLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoaderError::InvalidCategory { row: 1, .. }));
    }

    #[test]
    fn parse_costs_rejects_missing_column() {
        let csv = "id,name,amount
1,Rent,1000
";

        assert!(CostLoader::parse(csv.as_bytes()).is_err());
    }

    #[test]
    fn parse_empty_cost_file_yields_empty_list() {
        let costs = CostLoader::parse("id,name,amount,category\n".as_bytes()).unwrap();

        assert!(costs.is_empty());
    }
}
