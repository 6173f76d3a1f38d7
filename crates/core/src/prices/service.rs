//! Price service: cache first, upstream on miss.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use spotfolio_market_data::SpotPriceProvider;

use super::cache::PriceCache;
use crate::constants::NO_PAIRS_PROVIDED;
use crate::errors::{Result, ValidationError};

/// Batch lookup result in request order. `None` marks a pair whose
/// individual lookup failed.
pub type BatchPrices = Vec<(String, Option<f64>)>;

#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Spot price for a single pair.
    ///
    /// Served from the cache while fresh; otherwise fetched upstream and
    /// cached. Upstream failures are returned unchanged and leave the
    /// cache untouched.
    async fn get_spot_price(&self, pair: &str) -> Result<f64>;

    /// Spot prices for several pairs, looked up one after another in list order.
    ///
    /// Fails only when `pairs` is empty. Repeated pairs are looked up
    /// again each time they appear.
    async fn get_batch_prices(&self, pairs: &[String]) -> Result<BatchPrices>;
}

pub struct PriceService {
    provider: Arc<dyn SpotPriceProvider>,
    cache: PriceCache,
}

impl PriceService {
    pub fn new(provider: Arc<dyn SpotPriceProvider>, cache: PriceCache) -> Self {
        Self { provider, cache }
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn get_spot_price(&self, pair: &str) -> Result<f64> {
        if let Some(price) = self.cache.get(pair) {
            debug!("Price cache hit for {}", pair);
            return Ok(price);
        }

        debug!(
            "Price cache miss for {}, fetching from {}",
            pair,
            self.provider.id()
        );
        let quote = self.provider.fetch_spot_price(pair).await?;
        self.cache.put(pair, quote.amount);
        Ok(quote.amount)
    }

    async fn get_batch_prices(&self, pairs: &[String]) -> Result<BatchPrices> {
        if pairs.is_empty() {
            return Err(ValidationError::MissingField(NO_PAIRS_PROVIDED.to_string()).into());
        }

        let mut results = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let price = match self.get_spot_price(pair).await {
                Ok(price) => Some(price),
                Err(e) => {
                    warn!("Batch price lookup failed for {}: {}", pair, e);
                    None
                }
            };
            results.push((pair.clone(), price));
        }

        Ok(results)
    }
}
