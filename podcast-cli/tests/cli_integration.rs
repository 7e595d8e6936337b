//! End-to-end runs of the load → edit → project → render pipeline against
//! on-disk fixtures.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use podcast_cli::app::{self, InputPaths};
use podcast_cli::edit::Edit;
use podcast_cli::report::OutputFormat;
use podcast_core::{Portfolio, ProfitTier, Projection};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(
    paths: &InputPaths<'_>,
    edits: &[&str],
    horizon: Option<usize>,
) -> (Portfolio, Projection) {
    let mut loaded = app::load_inputs(paths).unwrap();
    let edits: Vec<Edit> = edits.iter().map(|e| e.parse().unwrap()).collect();
    app::apply_edits(&mut loaded.portfolio, &edits).unwrap();
    let config = app::resolve_config(loaded.projection, horizon, None).unwrap();
    let projection = app::run_projection(&loaded.portfolio, config);
    (loaded.portfolio, projection)
}

fn project(
    paths: &InputPaths<'_>,
    edits: &[&str],
    horizon: Option<usize>,
) -> Projection {
    run(paths, edits, horizon).1
}

// =========================================================================
// Scenario file
// =========================================================================

#[test]
fn test_scenario_settings_drive_projection() {
    let scenario = fixture_path("flat_scenario.toml");
    let paths = InputPaths {
        scenario: Some(&scenario),
        ..Default::default()
    };

    let projection = project(&paths, &[], None);

    assert_eq!(projection.years.len(), 3);
    // Year 1 carries the equity investment.
    assert_eq!(projection.years[0].revenue, 110_000.0);
    assert_eq!(projection.years[0].costs, 65_000.0);
    assert_eq!(projection.years[0].profit, 45_000.0);
    // Later years still charge the one-time cost.
    assert_eq!(projection.years[1].costs, 55_000.0);
    assert_eq!(projection.years[2].profit, 55_000.0);
}

#[test]
fn test_scenario_summary_counts_one_time_and_investment_once() {
    let scenario = fixture_path("flat_scenario.toml");
    let paths = InputPaths {
        scenario: Some(&scenario),
        ..Default::default()
    };

    let summary = project(&paths, &[], None).summary;

    assert_eq!(summary.year_index, 2);
    assert_eq!(summary.total_revenue, 110_000.0);
    assert_eq!(summary.total_investments, 10_000.0);
    assert_eq!(summary.total_costs, 65_000.0);
    assert_eq!(summary.total_profit, 45_000.0);
    assert_eq!(summary.tier(), ProfitTier::Low);
}

#[test]
fn test_horizon_override_beats_scenario() {
    let scenario = fixture_path("flat_scenario.toml");
    let paths = InputPaths {
        scenario: Some(&scenario),
        ..Default::default()
    };

    let projection = project(&paths, &[], Some(6));

    assert_eq!(projection.years.len(), 6);
    assert_eq!(projection.summary.year_index, 5);
}

#[test]
fn test_cost_csv_replaces_scenario_costs() {
    let scenario = fixture_path("flat_scenario.toml");
    let costs = fixture_path("override_costs.csv");
    let paths = InputPaths {
        scenario: Some(&scenario),
        costs: Some(&costs),
        ..Default::default()
    };

    let projection = project(&paths, &[], None);

    // 80k salary plus the 10k investment; the one-time cost is gone.
    assert_eq!(projection.years[0].costs, 90_000.0);
    assert_eq!(projection.years[1].costs, 80_000.0);
}

// =========================================================================
// Edits
// =========================================================================

#[test]
fn test_edits_switch_deal_and_add_cost() {
    let scenario = fixture_path("flat_scenario.toml");
    let paths = InputPaths {
        scenario: Some(&scenario),
        ..Default::default()
    };

    let projection = project(
        &paths,
        &["show.2.deal=rev_share", "add-cost=Editor:15,000:recurring"],
        None,
    );

    // No investment any more; 50k + 5k + 15k every year.
    assert_eq!(projection.years[0].costs, 70_000.0);
    assert_eq!(projection.summary.total_investments, 0.0);
    assert_eq!(projection.summary.total_profit, 40_000.0);
}

#[test]
fn test_failed_edit_is_reported() {
    let mut loaded = app::load_inputs(&InputPaths::default()).unwrap();
    let edits: Vec<Edit> = vec!["show.1.investment=5000".parse().unwrap()];

    let err = app::apply_edits(&mut loaded.portfolio, &edits).unwrap_err();

    assert!(err.to_string().contains("Failed to apply edit"));
}

// =========================================================================
// Rendering
// =========================================================================

#[test]
fn test_table_report_from_scenario() {
    let scenario = fixture_path("flat_scenario.toml");
    let paths = InputPaths {
        scenario: Some(&scenario),
        ..Default::default()
    };
    let (portfolio, projection) = run(&paths, &[], None);

    let text = app::render(&portfolio, &projection, OutputFormat::Table, false).unwrap();

    assert!(text.starts_with("Shows\n"));
    assert!(text.contains("Night Shift"));
    assert!(text.contains("Total Annual Costs: $55,000"));
    assert!(text.contains("3 Year Projections\n"));
    assert!(text.contains("Year 3 Financial Summary"));
    assert!(text.contains("Total Revenue: $110,000"));
    assert!(text.contains("Total Costs: $65,000"));
    assert!(text.contains("Net Profit: $45,000 😐"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_csv_report_from_scenario() {
    let scenario = fixture_path("flat_scenario.toml");
    let paths = InputPaths {
        scenario: Some(&scenario),
        ..Default::default()
    };
    let (portfolio, projection) = run(&paths, &[], None);

    let text = app::render(&portfolio, &projection, OutputFormat::Csv, false).unwrap();

    assert_eq!(
        text,
        "year,revenue,costs,profit\n\
         1,110000,65000,45000\n\
         2,110000,55000,55000\n\
         3,110000,55000,55000\n"
    );
}

#[test]
fn test_missing_scenario_file_errors() {
    let scenario = fixture_path("does_not_exist.toml");
    let paths = InputPaths {
        scenario: Some(&scenario),
        ..Default::default()
    };

    let err = app::load_inputs(&paths).unwrap_err();

    assert!(err.to_string().contains("Failed to load scenario"));
}
