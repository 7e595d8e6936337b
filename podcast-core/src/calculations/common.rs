//! Shared arithmetic for the projection calculations.

use crate::Show;

/// Grows `base` by `factor` compounded over `years` whole years.
///
/// The exponent is taken as a real power, so the result rounds the same
/// way as a plain `pow` call on the factor.
///
/// # Arguments
///
/// * `base` - The year-0 amount
/// * `factor` - Year-over-year multiplier, e.g. `1.03` for 3%
/// * `years` - Number of years to compound
///
/// # Returns
///
/// `base × factor^years`. NaN inputs propagate.
///
/// # Examples
///
/// ```
/// use podcast_core::calculations::common::compound;
///
/// assert_eq!(compound(100.0, 1.5, 0), 100.0);
/// assert_eq!(compound(100.0, 1.5, 2), 225.0);
/// assert_eq!(compound(150_000.0, 1.03, 4), 150_000.0 * 1.03_f64.powf(4.0));
/// ```
pub fn compound(
    base: f64,
    factor: f64,
    years: usize,
) -> f64 {
    base * factor.powf(years as f64)
}

/// Converts a percentage (10 means 10%) to a fraction.
///
/// # Examples
///
/// ```
/// use podcast_core::calculations::common::percent;
///
/// assert_eq!(percent(10.0), 0.1);
/// assert_eq!(percent(250.0), 2.5);
/// ```
pub fn percent(value: f64) -> f64 {
    value / 100.0
}

/// Revenue attributed to the counterparty for one show in `year`.
///
/// Growth compounds on the base revenue first; the revenue share is then
/// applied to the grown figure.
///
/// # Arguments
///
/// * `show` - The show; only `revenue`, `growth_rate` and `rev_share` are read
/// * `year` - Zero-based year index
///
/// # Returns
///
/// `revenue × (1 + growth_rate/100)^year × rev_share/100`.
///
/// # Examples
///
/// ```
/// use podcast_core::calculations::common::show_revenue;
/// use podcast_core::{Deal, Show};
///
/// let show = Show {
///     id: 1,
///     name: "Fifth Column".to_string(),
///     revenue: 1_000_000.0,
///     listeners: 50_000,
///     growth_rate: 10.0,
///     rev_share: 30.0,
///     deal: Deal::RevenueShare,
/// };
///
/// assert_eq!(show_revenue(&show, 0), 300_000.0);
/// assert!((show_revenue(&show, 1) - 330_000.0).abs() < 1e-6);
/// ```
pub fn show_revenue(
    show: &Show,
    year: usize,
) -> f64 {
    let growth_factor = 1.0 + percent(show.growth_rate);
    compound(show.revenue, growth_factor, year) * percent(show.rev_share)
}

/// Revenue summed across all shows for `year`.
///
/// # Arguments
///
/// * `shows` - Every show in the portfolio
/// * `year` - Zero-based year index
///
/// # Returns
///
/// The sum of [`show_revenue`] over `shows`, or 0 for an empty slice.
pub fn total_revenue(
    shows: &[Show],
    year: usize,
) -> f64 {
    shows
        .iter()
        .fold(0.0, |sum, show| sum + show_revenue(show, year))
}

/// Upfront capital of every equity deal.
///
/// Revenue-share shows contribute nothing.
///
/// # Examples
///
/// ```
/// use podcast_core::calculations::common::total_investments;
/// use podcast_core::{Deal, Show};
///
/// let show = |id, deal| Show {
///     id,
///     name: format!("Show {id}"),
///     revenue: 50_000.0,
///     listeners: 3_000,
///     growth_rate: 20.0,
///     rev_share: 25.0,
///     deal,
/// };
/// let shows = vec![
///     show(1, Deal::RevenueShare),
///     show(2, Deal::Equity { investment: 100_000.0 }),
/// ];
///
/// assert_eq!(total_investments(&shows), 100_000.0);
/// ```
pub fn total_investments(shows: &[Show]) -> f64 {
    shows
        .iter()
        .filter(|show| show.is_equity())
        .fold(0.0, |sum, show| sum + show.investment())
}
