//! Projection calculations.
//!
//! This module turns show and cost records into a year-by-year series, a
//! final-year summary, and the qualitative profit classification shown
//! next to that summary.

pub mod classification;
pub mod common;
pub mod projection;
pub mod summary;

pub use classification::{ProfitColor, ProfitTier};
pub use projection::{Projection, ProjectionEngine, YearResult, project};
pub use summary::{FinalYearSummary, summarize};
