#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use spotfolio_market_data::{MarketDataError, SpotPrice, SpotPriceProvider};
use spotfolio_server::{api::app_router, build_state_with_provider, config::Config};
use tower::ServiceExt;

/// Fixed prices for BTC-USD and ETH-USD; "SLOW-USD" times out and
/// "DOWN-USD" fails at the transport level. Everything else is a 404.
#[derive(Default)]
pub struct StubProvider {
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpotPriceProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn fetch_spot_price(&self, pair: &str) -> Result<SpotPrice, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match pair {
            "BTC-USD" => Ok(SpotPrice::new(pair, 67000.0, "STUB")),
            "ETH-USD" => Ok(SpotPrice::new(pair, 3456.78, "STUB")),
            "SLOW-USD" => Err(MarketDataError::Timeout {
                provider: "Coinbase".to_string(),
            }),
            "DOWN-USD" => Err(MarketDataError::RequestFailed {
                provider: "Coinbase".to_string(),
                message: "connection refused".to_string(),
            }),
            _ => Err(MarketDataError::UpstreamStatus {
                provider: "Coinbase".to_string(),
                status: 404,
            }),
        }
    }
}

pub fn test_router() -> (Router, Arc<StubProvider>) {
    let provider = Arc::new(StubProvider::default());
    (router_with_provider(provider.clone()), provider)
}

pub fn router_with_provider(provider: Arc<dyn SpotPriceProvider>) -> Router {
    let config = Config::default();
    let state = build_state_with_provider(&config, provider);
    app_router(state, &config)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
