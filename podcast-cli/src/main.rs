use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use podcast_cli::app::{self, InputPaths};
use podcast_cli::edit::Edit;
use podcast_cli::logging;
use podcast_cli::report::OutputFormat;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Podcast deal projection calculator.
///
/// Loads show and cost lists, applies any edits, and prints a year-by-year
/// projection of revenue, costs and profit with a final-year summary.
/// Without inputs, the built-in sample portfolio is projected.
#[derive(Debug, Parser)]
#[command(name = "podcast-projector")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML scenario file with shows, costs and projection settings.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Show CSV; replaces the scenario's shows.
    #[arg(long)]
    shows: Option<PathBuf>,

    /// Cost CSV; replaces the scenario's costs.
    #[arg(long)]
    costs: Option<PathBuf>,

    /// Project the built-in sample portfolio, ignoring any input files.
    #[arg(long, conflicts_with_all = ["scenario", "shows", "costs"])]
    sample: bool,

    /// Number of projected years.
    #[arg(long)]
    horizon: Option<usize>,

    /// Annual inflation on recurring costs, as a fraction (0.03 = 3%).
    #[arg(long)]
    inflation: Option<f64>,

    /// Edit to apply before projecting, e.g. `show.1.growth=12` or
    /// `add-cost=Editor:60000:recurring`. Repeatable.
    #[arg(long = "set", value_name = "EDIT")]
    edits: Vec<Edit>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Disable ANSI colour in the report.
    #[arg(long)]
    no_color: bool,

    /// Log filter, e.g. `debug` or `podcast_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(short, long)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if cli.quiet {
        logging::set_stderr_enabled(false);
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let paths = if cli.sample {
        InputPaths::default()
    } else {
        InputPaths {
            scenario: cli.scenario.as_deref(),
            shows: cli.shows.as_deref(),
            costs: cli.costs.as_deref(),
        }
    };
    let mut loaded = app::load_inputs(&paths)?;

    app::apply_edits(&mut loaded.portfolio, &cli.edits)?;

    let config = app::resolve_config(loaded.projection, cli.horizon, cli.inflation)
        .context("Invalid projection settings")?;
    debug!(?config, "projection settings");

    let projection = app::run_projection(&loaded.portfolio, config);

    let color = !cli.no_color && io::stdout().is_terminal();
    print!("{}", app::render(&loaded.portfolio, &projection, cli.format, color)?);

    Ok(())
}
