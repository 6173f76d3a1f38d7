//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching a spot price from a provider.
///
/// The display strings are surfaced verbatim to API callers, so they are
/// phrased from the caller's point of view.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the provider did not complete within the client timeout.
    #[error("Request to {provider} timed out")]
    Timeout {
        /// Display name of the provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    /// The status is propagated to the caller unchanged.
    #[error("Failed to fetch price from {provider}")]
    UpstreamStatus {
        /// Display name of the provider
        provider: String,
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// The request failed before a response was received
    /// (DNS, connection refused, TLS, ...).
    #[error("Failed to fetch price: {message}")]
    RequestFailed {
        /// Display name of the provider
        provider: String,
        /// Transport error detail
        message: String,
    },

    /// The provider returned a success status but the body could not be
    /// interpreted as a spot price.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// Display name of the provider
        provider: String,
        /// Parse failure detail
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl MarketDataError {
    /// Upstream HTTP status, when the provider answered with one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the provider did not answer in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
