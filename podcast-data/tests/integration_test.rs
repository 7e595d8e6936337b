//! Integration tests that load the on-disk fixtures and run them through
//! the projection engine.

use std::path::{Path, PathBuf};

use podcast_core::{CostCategory, Deal, Portfolio, ProjectionEngine};
use podcast_data::{CostLoader, LoaderError, Scenario, ShowLoader, sample_portfolio};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_show_fixture() {
    let shows = ShowLoader::load_from_file(&fixture("sample_shows.csv")).expect("shows should load");

    assert_eq!(shows.len(), 3);
    assert_eq!(shows[1].name, "Blocked & Reported");
    assert_eq!(
        shows[2].deal,
        Deal::Equity {
            investment: 100_000.0
        }
    );
}

#[test]
fn test_load_cost_fixture() {
    let costs = CostLoader::load_from_file(&fixture("sample_costs.csv")).expect("costs should load");

    assert_eq!(costs.len(), 3);
    assert_eq!(costs[2].category, CostCategory::OneTime);
}

#[test]
fn test_csv_fixtures_match_sample_shows() {
    let shows = ShowLoader::load_from_file(&fixture("sample_shows.csv")).unwrap();

    let sample = sample_portfolio().unwrap();

    assert_eq!(shows, sample.shows());
}

#[test]
fn test_project_csv_fixtures() {
    let shows = ShowLoader::load_from_file(&fixture("sample_shows.csv")).unwrap();
    let costs = CostLoader::load_from_file(&fixture("sample_costs.csv")).unwrap();
    let portfolio = Portfolio::new(shows, costs).unwrap();

    let projection = portfolio.project(&ProjectionEngine::default());

    // The one-time studio cost is charged in every year of the series...
    assert_eq!(projection.years[0].costs, 430_000.0);
    assert!((projection.years[1].costs - (290_000.0 * 1.03 + 40_000.0)).abs() < 1e-6);
    // ...but only once in the final-year summary, alongside the investment.
    let recurring = 290_000.0 * 1.03_f64.powf(4.0);
    assert!((projection.summary.total_costs - (recurring + 40_000.0 + 100_000.0)).abs() < 1e-6);
}

#[test]
fn test_load_scenario_fixture() {
    let scenario = Scenario::load(&fixture("scenario.toml")).expect("scenario should load");

    let config = scenario.projection.unwrap();
    let portfolio = scenario.into_portfolio().unwrap();

    assert_eq!(config.horizon, 5);
    assert_eq!(portfolio.shows().len(), 2);
    assert_eq!(portfolio.costs().len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ShowLoader::load_from_file(Path::new("/this/path/does/not/exist.csv"));

    assert!(matches!(result, Err(LoaderError::Io { .. })));
}

#[test]
fn test_missing_scenario_is_error() {
    assert!(Scenario::load(Path::new("/this/path/does/not/exist.toml")).is_err());
}
