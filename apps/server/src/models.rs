use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use spotfolio_core::holdings as core_holdings;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub name: String,
    pub currency: String,
    pub cost_basis: f64,
    pub quantity: f64,
}

impl From<core_holdings::Holding> for Holding {
    fn from(h: core_holdings::Holding) -> Self {
        Self {
            name: h.name,
            currency: h.currency,
            cost_basis: h.cost_basis,
            quantity: h.quantity,
        }
    }
}

/// Partial update; omitted fields keep their current value. An explicit
/// `null` is rejected rather than read as omitted.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    #[serde(default, deserialize_with = "present_number")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "present_number")]
    pub cost_basis: Option<f64>,
}

fn present_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

impl From<HoldingUpdate> for core_holdings::HoldingUpdate {
    fn from(u: HoldingUpdate) -> Self {
        Self {
            quantity: u.quantity,
            cost_basis: u.cost_basis,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SpotAmount {
    /// Price as a decimal string, e.g. "67000.0"
    pub amount: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SpotPriceResponse {
    pub data: SpotAmount,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct BatchPricesRequest {
    #[serde(default)]
    pub pairs: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BatchPricesResponse {
    /// Pair to price string, `null` where the lookup failed
    pub data: BTreeMap<String, Option<String>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HoldingsResponse {
    pub data: Vec<Holding>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateHoldingResponse {
    pub success: bool,
    pub data: Holding,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HarvestResponse {
    pub success: bool,
    pub message: String,
    pub amount_sold: f64,
    pub original_cost_basis: f64,
    pub updated_currency: Holding,
}

impl From<core_holdings::HarvestResult> for HarvestResponse {
    fn from(r: core_holdings::HarvestResult) -> Self {
        Self {
            success: true,
            message: r.message(),
            amount_sold: r.amount_sold,
            original_cost_basis: r.original_cost_basis,
            updated_currency: r.holding.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}
