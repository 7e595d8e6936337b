mod cost;
mod deal;
mod error;
mod show;

pub use cost::{Cost, CostCategory, CostId};
pub use deal::{Deal, DealType};
pub use error::ModelError;
pub use show::{Show, ShowId};
