pub mod app;
pub mod draft;
pub mod edit;
pub mod logging;
pub mod report;
pub mod utils;
