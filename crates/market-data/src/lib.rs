//! Spotfolio Market Data Crate
//!
//! This crate fetches crypto spot prices from upstream quote providers
//! on behalf of the Spotfolio service.
//!
//! # Overview
//!
//! - [`SpotPriceProvider`] - the provider abstraction used by the domain layer
//! - [`CoinbaseProvider`] - the Coinbase public spot-price endpoint
//! - [`MarketDataError`] - the upstream error taxonomy (timeout, bad status,
//!   transport failure, malformed response)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +-------------------+     +------------------+
//! |   Domain Layer   | --> | SpotPriceProvider | --> |  Coinbase (HTTP) |
//! +------------------+     +-------------------+     +------------------+
//!                                   |
//!                                   v
//!                          +------------------+
//!                          |    SpotPrice     |
//!                          +------------------+
//! ```
//!
//! # Type Aliases
//!
//! - [`CurrencyPair`] - upstream pair identifier in `BASE-QUOTE` form (e.g. "BTC-USD")

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CurrencyPair, SpotPrice};
pub use provider::coinbase::CoinbaseProvider;
pub use provider::SpotPriceProvider;
