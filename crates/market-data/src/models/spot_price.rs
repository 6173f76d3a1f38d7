use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::CurrencyPair;

/// Spot price for a currency pair as reported by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotPrice {
    /// Pair the price was requested for
    pub pair: CurrencyPair,

    /// Price of one unit of the base currency in the quote currency
    pub amount: f64,

    /// Time the price was received
    pub timestamp: DateTime<Utc>,

    /// Provider that produced the price (COINBASE, ...)
    pub source: String,
}

impl SpotPrice {
    pub fn new(pair: impl Into<CurrencyPair>, amount: f64, source: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            amount,
            timestamp: Utc::now(),
            source: source.into(),
        }
    }
}
