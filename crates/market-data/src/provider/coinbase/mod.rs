//! Coinbase spot price provider.
//!
//! Uses the public, unauthenticated `GET /v2/prices/{pair}/spot` endpoint.
//! API documentation: https://docs.cdp.coinbase.com/coinbase-app/docs/api-prices

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::SpotPrice;
use crate::provider::SpotPriceProvider;

/// Default API root for the Coinbase v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com/v2";

/// Default upstream request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const PROVIDER_ID: &str = "COINBASE";
const PROVIDER_NAME: &str = "Coinbase";

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /prices/{pair}/spot
#[derive(Debug, Deserialize)]
struct SpotPriceResponse {
    data: SpotPriceData,
}

#[derive(Debug, Deserialize)]
struct SpotPriceData {
    /// Coinbase sends a decimal string; a bare number is accepted as well
    amount: Amount,
    // Note: base and currency are also returned but the pair already carries them
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Text(String),
    Number(f64),
}

// ============================================================================
// CoinbaseProvider
// ============================================================================

/// Coinbase spot price provider.
pub struct CoinbaseProvider {
    client: Client,
    base_url: Url,
}

impl CoinbaseProvider {
    /// Create a provider against the public Coinbase API with the default timeout.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a provider against `base_url` (the API root, e.g.
    /// `https://api.coinbase.com/v2`) with the given request timeout.
    pub fn with_config(base_url: &str, timeout: Duration) -> Result<Self, MarketDataError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MarketDataError::ClientBuild(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(MarketDataError::ClientBuild(format!(
                "Base URL '{}' cannot have path segments",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("spotfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MarketDataError::ClientBuild(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Build `{base}/prices/{pair}/spot`, percent-encoding the pair.
    fn spot_url(&self, pair: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["prices", pair, "spot"]);
        }
        url
    }

    fn transport_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_NAME.to_string(),
            }
        } else {
            MarketDataError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                message: e.to_string(),
            }
        }
    }
}

/// Extract the amount from a spot price response body.
fn parse_spot_amount(body: &str) -> Result<f64, MarketDataError> {
    let invalid = |message: String| MarketDataError::InvalidResponse {
        provider: PROVIDER_NAME.to_string(),
        message,
    };

    let response: SpotPriceResponse = serde_json::from_str(body)
        .map_err(|e| invalid(format!("Failed to parse spot price response: {}", e)))?;

    let amount = match response.data.amount {
        Amount::Number(value) => value,
        Amount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(format!("Invalid amount '{}': {}", text, e)))?,
    };

    if !amount.is_finite() {
        return Err(invalid(format!("Non-finite amount: {}", amount)));
    }

    Ok(amount)
}

#[async_trait]
impl SpotPriceProvider for CoinbaseProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_spot_price(&self, pair: &str) -> Result<SpotPrice, MarketDataError> {
        let url = self.spot_url(pair);
        debug!("Coinbase request: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Coinbase returned HTTP {} for pair {}", status, pair);
            return Err(MarketDataError::UpstreamStatus {
                provider: PROVIDER_NAME.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::transport_error)?;
        let amount = parse_spot_amount(&body)?;

        Ok(SpotPrice::new(pair, amount, PROVIDER_ID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = CoinbaseProvider::new().unwrap();
        assert_eq!(provider.id(), "COINBASE");
    }

    #[test]
    fn test_spot_url() {
        let provider = CoinbaseProvider::new().unwrap();
        assert_eq!(
            provider.spot_url("BTC-USD").as_str(),
            "https://api.coinbase.com/v2/prices/BTC-USD/spot"
        );
    }

    #[test]
    fn test_spot_url_with_trailing_slash_base() {
        let provider =
            CoinbaseProvider::with_config("http://localhost:9999/v2/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            provider.spot_url("ETH-EUR").as_str(),
            "http://localhost:9999/v2/prices/ETH-EUR/spot"
        );
    }

    #[test]
    fn test_spot_url_escapes_pair() {
        let provider = CoinbaseProvider::new().unwrap();
        let url = provider.spot_url("BTC/USD?x");
        assert_eq!(
            url.as_str(),
            "https://api.coinbase.com/v2/prices/BTC%2FUSD%3Fx/spot"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = CoinbaseProvider::with_config("not a url", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(MarketDataError::ClientBuild(_))));

        let result = CoinbaseProvider::with_config("mailto:ops@example.com", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(MarketDataError::ClientBuild(_))));
    }

    #[test]
    fn test_parse_string_amount() {
        let body = r#"{"data":{"amount":"67012.345","base":"BTC","currency":"USD"}}"#;
        assert_eq!(parse_spot_amount(body).unwrap(), 67012.345);
    }

    #[test]
    fn test_parse_numeric_amount() {
        let body = r#"{"data":{"amount":0.85}}"#;
        assert_eq!(parse_spot_amount(body).unwrap(), 0.85);
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let body = r#"{"data":{"amount":"n/a"}}"#;
        assert!(matches!(
            parse_spot_amount(body),
            Err(MarketDataError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_data() {
        let body = r#"{"errors":[{"id":"not_found","message":"Invalid currency"}]}"#;
        assert!(matches!(
            parse_spot_amount(body),
            Err(MarketDataError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_connection_failure_is_request_failed() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let provider =
            CoinbaseProvider::with_config("http://127.0.0.1:9/v2", Duration::from_secs(2)).unwrap();
        let result = provider.fetch_spot_price("BTC-USD").await;
        assert!(matches!(
            result,
            Err(MarketDataError::RequestFailed { .. }) | Err(MarketDataError::Timeout { .. })
        ));
    }

    #[tokio::test]
    #[ignore] // Calls the live Coinbase API
    async fn test_real_coinbase_spot_price() {
        let provider = CoinbaseProvider::new().unwrap();
        let price = provider.fetch_spot_price("BTC-USD").await.unwrap();
        assert!(price.amount > 0.0);
        assert_eq!(price.source, "COINBASE");
    }
}
