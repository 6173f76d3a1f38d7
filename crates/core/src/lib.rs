//! Spotfolio Core - price caching and the holdings ledger.
//!
//! This crate contains the domain logic behind the Spotfolio HTTP service.
//! It depends on `spotfolio-market-data` for upstream price lookups and is
//! agnostic of the web framework that exposes it.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod prices;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
