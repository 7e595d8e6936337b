pub mod calculations;
pub mod config;
pub mod models;
pub mod portfolio;

pub use calculations::{
    FinalYearSummary, Projection, ProjectionEngine, ProfitColor, ProfitTier, YearResult, project,
    summarize,
};
pub use config::{ConfigError, ProjectionConfig};
pub use models::*;
pub use portfolio::{Portfolio, PortfolioError};
