use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use spotfolio_core::constants::DEFAULT_PRICE_CACHE_TTL;
use spotfolio_market_data::provider::coinbase;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:80";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub price_cache_ttl: Duration,
    pub upstream_timeout: Duration,
    pub coinbase_api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr_raw =
            std::env::var("SF_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr_raw
            .parse()
            .with_context(|| format!("Invalid SF_LISTEN_ADDR: {}", listen_addr_raw))?;
        let cors_allow = std::env::var("SF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let coinbase_api_url = std::env::var("SF_COINBASE_API_URL")
            .unwrap_or_else(|_| coinbase::DEFAULT_BASE_URL.to_string());
        Ok(Self {
            listen_addr,
            cors_allow,
            price_cache_ttl: env_millis(
                "SF_PRICE_CACHE_TTL_MS",
                DEFAULT_PRICE_CACHE_TTL.as_millis() as u64,
            ),
            upstream_timeout: env_millis(
                "SF_UPSTREAM_TIMEOUT_MS",
                coinbase::DEFAULT_TIMEOUT.as_millis() as u64,
            ),
            coinbase_api_url,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 80)),
            cors_allow: vec!["*".to_string()],
            price_cache_ttl: DEFAULT_PRICE_CACHE_TTL,
            upstream_timeout: coinbase::DEFAULT_TIMEOUT,
            coinbase_api_url: coinbase::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Millisecond duration from `key`, falling back to `default_ms` when unset or unparsable.
fn env_millis(key: &str, default_ms: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}
