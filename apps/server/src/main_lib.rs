use std::sync::Arc;

use crate::config::Config;
use spotfolio_core::{
    holdings::{HoldingsService, HoldingsServiceTrait, InMemoryHoldingsRepository},
    prices::{PriceCache, PriceService, PriceServiceTrait},
};
use spotfolio_market_data::{CoinbaseProvider, SpotPriceProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub price_service: Arc<dyn PriceServiceTrait>,
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = CoinbaseProvider::with_config(&config.coinbase_api_url, config.upstream_timeout)?;
    tracing::info!(
        "Using {} spot prices from {} (timeout {:?}, cache ttl {:?})",
        provider.id(),
        config.coinbase_api_url,
        config.upstream_timeout,
        config.price_cache_ttl
    );
    Ok(build_state_with_provider(config, Arc::new(provider)))
}

/// Wire services around an already constructed price provider.
pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn SpotPriceProvider>,
) -> Arc<AppState> {
    let price_service = Arc::new(PriceService::new(
        provider,
        PriceCache::new(config.price_cache_ttl),
    ));

    let holdings_repository = Arc::new(InMemoryHoldingsRepository::default());
    let holdings_service = Arc::new(HoldingsService::new(holdings_repository));

    Arc::new(AppState {
        price_service,
        holdings_service,
    })
}
