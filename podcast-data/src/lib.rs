mod loader;
mod sample;
mod scenario;

pub use loader::{CostLoader, CostRecord, LoaderError, ShowLoader, ShowRecord};
pub use sample::sample_portfolio;
pub use scenario::{Scenario, ScenarioError};
