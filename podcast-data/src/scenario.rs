//! TOML scenario files.
//!
//! A scenario bundles both input lists and, optionally, the projection
//! settings:
//!
//! ```toml
//! [projection]
//! horizon = 5
//! inflation_rate = 0.03
//!
//! [[shows]]
//! id = 1
//! name = "Fifth Column"
//! revenue = 1000000
//! listeners = 50000
//! growth_rate = 10
//! deal_type = "rev_share"
//! rev_share = 30
//!
//! [[costs]]
//! id = 1
//! name = "Salary 1"
//! amount = 150000
//! category = "recurring"
//! ```

use std::fs;
use std::path::Path;

use podcast_core::{Portfolio, PortfolioError, ProjectionConfig};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::loader::{CostRecord, LoaderError, ShowRecord, check_unique, convert_records};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Record(#[from] LoaderError),

    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scenario {
    /// Absent when the file does not override the defaults.
    #[serde(default)]
    pub projection: Option<ProjectionConfig>,

    #[serde(default)]
    pub shows: Vec<ShowRecord>,

    #[serde(default)]
    pub costs: Vec<CostRecord>,
}

impl Scenario {
    pub fn from_toml_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let scenario = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            shows = scenario.shows.len(),
            costs = scenario.costs.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Validates the records and builds a [`Portfolio`] from them.
    pub fn into_portfolio(self) -> Result<Portfolio, ScenarioError> {
        let shows = convert_records(self.shows, |record, row| record.into_show(row))?;
        check_unique(shows.iter().map(|s| s.id))?;
        let costs = convert_records(self.costs, |record, row| record.into_cost(row))?;
        check_unique(costs.iter().map(|c| c.id))?;

        Ok(Portfolio::new(shows, costs)?)
    }
}
