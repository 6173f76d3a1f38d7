//! Core error types for Spotfolio.

use thiserror::Error;

use spotfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the domain layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream price lookup failed. The message is the upstream one.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error("Currency {0} not found")]
    CurrencyNotFound(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was absent or empty. Carries the caller-facing message.
    #[error("{0}")]
    MissingField(String),
}
