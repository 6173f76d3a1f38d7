//! Spot price provider abstractions and implementations.
//!
//! The domain layer only sees [`SpotPriceProvider`]; concrete providers
//! (currently Coinbase) live in submodules.

pub mod coinbase;
mod traits;

pub use traits::SpotPriceProvider;
