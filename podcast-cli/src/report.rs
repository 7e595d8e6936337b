//! Text renderings of a [`Projection`].

use std::fmt::{self, Write as _};
use std::io;

use clap::ValueEnum;
use podcast_core::{Portfolio, ProfitColor, Projection, Show};

use crate::utils::{format_amount, format_currency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Inputs, an aligned year table and the final-year summary.
    #[default]
    Table,
    /// `year,revenue,costs,profit` rows.
    Csv,
}

const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// Renders the inputs, the series and the final-year summary as text.
///
/// The report opens with the show list and the operating costs (each with
/// its category label, then the uninflated "Total Annual Costs"), then
/// the year-by-year table and the summary. With `color` set, the net profit
/// is wrapped in red or green ANSI escapes according to [`ProfitColor`].
pub fn render_table(
    portfolio: &Portfolio,
    projection: &Projection,
    color: bool,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_shows(&mut out, portfolio.shows())?;
    writeln!(out)?;
    write_costs(&mut out, portfolio)?;
    writeln!(out)?;
    write_years(&mut out, projection)?;
    writeln!(out)?;
    write_summary(&mut out, projection, color)?;
    Ok(out)
}

fn write_shows(
    out: &mut impl fmt::Write,
    shows: &[Show],
) -> fmt::Result {
    writeln!(out, "Shows")?;
    writeln!(
        out,
        "{:<24} {:<10} {:>16} {:>8} {:>16}",
        "", "Deal", "Revenue", "Share", "Investment"
    )?;
    for show in shows {
        let investment = if show.is_equity() {
            format_currency(show.investment())
        } else {
            String::new()
        };
        writeln!(
            out,
            "{:<24} {:<10} {:>16} {:>8} {:>16}",
            show.name,
            show.deal.deal_type().label(),
            format_currency(show.revenue),
            format!("{}%", format_amount(show.rev_share)),
            investment,
        )?;
    }
    Ok(())
}

fn write_costs(
    out: &mut impl fmt::Write,
    portfolio: &Portfolio,
) -> fmt::Result {
    writeln!(out, "Operating Costs")?;
    for cost in portfolio.costs() {
        writeln!(
            out,
            "{:<24} {:<20} {:>16}",
            cost.name,
            cost.category.label(),
            format_currency(cost.amount),
        )?;
    }
    writeln!(
        out,
        "Total Annual Costs: {}",
        format_currency(portfolio.total_annual_costs())
    )
}

fn write_years(
    out: &mut impl fmt::Write,
    projection: &Projection,
) -> fmt::Result {
    writeln!(out, "{} Year Projections", projection.years.len())?;
    writeln!(
        out,
        "{:<8} {:>16} {:>16} {:>16}",
        "", "Revenue", "Costs", "Profit"
    )?;
    for year in &projection.years {
        writeln!(
            out,
            "{:<8} {:>16} {:>16} {:>16}",
            year.label(),
            format_currency(year.revenue),
            format_currency(year.costs),
            format_currency(year.profit),
        )?;
    }
    Ok(())
}

fn write_summary(
    out: &mut impl fmt::Write,
    projection: &Projection,
    color: bool,
) -> fmt::Result {
    let summary = &projection.summary;
    let profit = format_currency(summary.total_profit);
    let profit = if color {
        let code = match summary.color() {
            ProfitColor::Negative => RED,
            ProfitColor::Positive => GREEN,
        };
        format!("{code}{profit}{RESET}")
    } else {
        profit
    };

    writeln!(out, "{} Financial Summary", summary.label())?;
    writeln!(out, "Total Revenue: {}", format_currency(summary.total_revenue))?;
    writeln!(out, "Total Costs: {}", format_currency(summary.total_costs))?;
    writeln!(out, "Net Profit: {} {}", profit, summary.tier().indicator())
}

/// Writes the series as CSV with a `year,revenue,costs,profit` header.
///
/// Years are 1-based; amounts are rounded to cents without separators.
pub fn write_csv<W: io::Write>(
    projection: &Projection,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["year", "revenue", "costs", "profit"])?;

    for year in &projection.years {
        csv_writer.write_record([
            (year.year_index + 1).to_string(),
            plain_amount(year.revenue),
            plain_amount(year.costs),
            plain_amount(year.profit),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn plain_amount(value: f64) -> String {
    format_amount(value).replace(',', "")
}
