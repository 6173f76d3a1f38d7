mod common;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::http::Method;
use common::{router_with_provider, send, test_router};
use serde_json::json;
use spotfolio_market_data::{MarketDataError, SpotPrice, SpotPriceProvider};

/// Every lookup runs into the full upstream timeout.
struct HangingProvider;

#[async_trait]
impl SpotPriceProvider for HangingProvider {
    fn id(&self) -> &'static str {
        "HANGING"
    }

    async fn fetch_spot_price(&self, _pair: &str) -> Result<SpotPrice, MarketDataError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Err(MarketDataError::Timeout {
            provider: "Coinbase".to_string(),
        })
    }
}

#[tokio::test]
async fn spot_price_is_returned_as_string() {
    let (app, _) = test_router();
    let (status, body) = send(&app, Method::GET, "/api/prices/BTC-USD/spot", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "data": { "amount": "67000.0" } }));
}

#[tokio::test]
async fn repeated_lookup_is_served_from_cache() {
    let (app, provider) = test_router();
    send(&app, Method::GET, "/api/prices/ETH-USD/spot", None).await;
    let (status, body) = send(&app, Method::GET, "/api/prices/ETH-USD/spot", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["amount"], "3456.78");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn upstream_status_is_propagated() {
    let (app, _) = test_router();
    let (status, body) = send(&app, Method::GET, "/api/prices/NOPE-USD/spot", None).await;
    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({ "error": "Failed to fetch price from Coinbase", "status": 404 })
    );
}

#[tokio::test]
async fn upstream_timeout_is_gateway_timeout() {
    let (app, _) = test_router();
    let (status, body) = send(&app, Method::GET, "/api/prices/SLOW-USD/spot", None).await;
    assert_eq!(status, 504);
    assert_eq!(
        body,
        json!({ "error": "Request to Coinbase timed out", "status": 504 })
    );
}

#[tokio::test]
async fn transport_failure_is_internal_error() {
    let (app, _) = test_router();
    let (status, body) = send(&app, Method::GET, "/api/prices/DOWN-USD/spot", None).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to fetch price: connection refused");
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn batch_degrades_per_pair() {
    let (app, _) = test_router();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/prices/batch",
        Some(json!({ "pairs": ["ETH-USD", "NOPE-USD", "BTC-USD", "SLOW-USD"] })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "data": {
                "BTC-USD": "67000.0",
                "ETH-USD": "3456.78",
                "NOPE-USD": null,
                "SLOW-USD": null
            }
        })
    );
}

#[tokio::test]
async fn batch_duplicates_hit_the_cache() {
    let (app, provider) = test_router();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/prices/batch",
        Some(json!({ "pairs": ["BTC-USD", "BTC-USD"] })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["BTC-USD"], "67000.0");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn batch_without_pairs_is_bad_request() {
    let (app, _) = test_router();
    let expected = json!({ "error": "No currency pairs provided", "status": 400 });

    for body in [json!({ "pairs": [] }), json!({})] {
        let (status, json) = send(&app, Method::POST, "/api/prices/batch", Some(body)).await;
        assert_eq!(status, 400);
        assert_eq!(json, expected);
    }

    let (status, json) = send(&app, Method::POST, "/api/prices/batch", None).await;
    assert_eq!(status, 400);
    assert_eq!(json, expected);
}

#[tokio::test(start_paused = true)]
async fn long_batch_of_timeouts_still_answers_with_json() {
    let app = router_with_provider(Arc::new(HangingProvider));
    let pairs: Vec<String> = (0..8).map(|i| format!("P{}-USD", i)).collect();

    let started = tokio::time::Instant::now();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/prices/batch",
        Some(json!({ "pairs": pairs })),
    )
    .await;

    assert_eq!(status, 200);
    assert!(started.elapsed() >= Duration::from_secs(40));
    let data = body["data"].as_object().unwrap();
    assert_eq!(data.len(), 8);
    assert!(data.values().all(|price| price.is_null()));
}
