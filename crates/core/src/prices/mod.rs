//! Spot price lookups with short-lived caching.
//!
//! - [`cache`] - time-bounded, lock-guarded memoization keyed by currency pair
//! - [`model`] - cache entry type and price formatting
//! - [`service`] - single-pair and batch lookups (cache first, then upstream)
//!
//! ```text
//! PriceService → PriceCache (hit) ─────────────→ price
//!       ↓ (miss)
//! SpotPriceProvider (market-data crate) → PriceCache::put → price
//! ```

pub mod cache;
pub mod model;
pub mod service;

pub use cache::PriceCache;
pub use model::{format_amount, CachedPrice};
pub use service::{BatchPrices, PriceService, PriceServiceTrait};
