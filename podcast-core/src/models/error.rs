use thiserror::Error;

/// Errors raised when a record violates its shape invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Base revenue must be non-negative.
    #[error("revenue must be non-negative, got {0}")]
    NegativeRevenue(f64),

    /// Cost amounts must be non-negative.
    #[error("cost amount must be non-negative, got {0}")]
    NegativeAmount(f64),

    /// Equity investments must be non-negative.
    #[error("investment must be non-negative, got {0}")]
    NegativeInvestment(f64),
}
