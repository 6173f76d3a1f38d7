//! Spot price provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::SpotPrice;

/// Trait for spot price providers.
///
/// Implementations perform exactly one upstream request per call; caching
/// and retry policy belong to the caller.
#[async_trait]
pub trait SpotPriceProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "COINBASE".
    fn id(&self) -> &'static str;

    /// Fetch the current spot price for `pair` (e.g. "BTC-USD").
    async fn fetch_spot_price(&self, pair: &str) -> Result<SpotPrice, MarketDataError>;
}
