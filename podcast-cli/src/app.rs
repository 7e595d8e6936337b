use std::path::Path;

use anyhow::{Context, Result};
use podcast_core::{ConfigError, Portfolio, Projection, ProjectionConfig, ProjectionEngine};
use podcast_data::{CostLoader, Scenario, ShowLoader, sample_portfolio};
use tracing::{debug, info};

use crate::edit::Edit;
use crate::report::{self, OutputFormat};

/// Where the input lists come from.
///
/// A scenario file supplies both lists and optional projection settings;
/// a show or cost CSV replaces the corresponding list. With no inputs at
/// all, the built-in sample lists are used.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputPaths<'a> {
    pub scenario: Option<&'a Path>,
    pub shows: Option<&'a Path>,
    pub costs: Option<&'a Path>,
}

impl InputPaths<'_> {
    fn is_empty(&self) -> bool {
        self.scenario.is_none() && self.shows.is_none() && self.costs.is_none()
    }
}

/// A portfolio and any projection settings that came with it.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub portfolio: Portfolio,
    pub projection: Option<ProjectionConfig>,
}

pub fn load_inputs(paths: &InputPaths<'_>) -> Result<LoadedInputs> {
    if paths.is_empty() {
        info!("no inputs given, using sample portfolio");
        let portfolio = sample_portfolio().context("sample portfolio is invalid")?;
        return Ok(LoadedInputs {
            portfolio,
            projection: None,
        });
    }

    let (mut shows, mut costs, projection) = match paths.scenario {
        Some(path) => {
            let scenario = Scenario::load(path)
                .with_context(|| format!("Failed to load scenario: {}", path.display()))?;
            let projection = scenario.projection;
            let portfolio = scenario
                .into_portfolio()
                .with_context(|| format!("Invalid scenario: {}", path.display()))?;
            (
                portfolio.shows().to_vec(),
                portfolio.costs().to_vec(),
                projection,
            )
        }
        None => (Vec::new(), Vec::new(), None),
    };

    if let Some(path) = paths.shows {
        shows = ShowLoader::load_from_file(path)
            .with_context(|| format!("Failed to load shows: {}", path.display()))?;
    }
    if let Some(path) = paths.costs {
        costs = CostLoader::load_from_file(path)
            .with_context(|| format!("Failed to load costs: {}", path.display()))?;
    }

    debug!(shows = shows.len(), costs = costs.len(), "inputs loaded");
    let portfolio = Portfolio::new(shows, costs).context("Invalid inputs")?;
    Ok(LoadedInputs {
        portfolio,
        projection,
    })
}

/// Merges projection settings: explicit overrides win over the scenario
/// file, which wins over the defaults. The result is validated.
pub fn resolve_config(
    from_file: Option<ProjectionConfig>,
    horizon: Option<usize>,
    inflation_rate: Option<f64>,
) -> Result<ProjectionConfig, ConfigError> {
    let mut config = from_file.unwrap_or_default();
    if let Some(horizon) = horizon {
        config.horizon = horizon;
    }
    if let Some(rate) = inflation_rate {
        config.inflation_rate = rate;
    }
    config.validate()?;
    Ok(config)
}

/// Applies edits in order, stopping at the first failure.
pub fn apply_edits(
    portfolio: &mut Portfolio,
    edits: &[Edit],
) -> Result<()> {
    for edit in edits {
        edit.apply(portfolio)
            .with_context(|| format!("Failed to apply edit {edit:?}"))?;
    }
    Ok(())
}

pub fn run_projection(
    portfolio: &Portfolio,
    config: ProjectionConfig,
) -> Projection {
    let projection = portfolio.project(&ProjectionEngine::new(config));
    info!(
        years = projection.years.len(),
        final_profit = projection.summary.total_profit,
        tier = projection.tier().as_str(),
        "projection complete"
    );
    projection
}

pub fn render(
    portfolio: &Portfolio,
    projection: &Projection,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            report::render_table(portfolio, projection, color).context("Failed to render table")
        }
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            report::write_csv(projection, &mut buffer).context("Failed to write CSV")?;
            String::from_utf8(buffer).context("CSV output is not UTF-8")
        }
    }
}
