//! Holding records and mutation inputs.

use serde::{Deserialize, Serialize};

/// A position in one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub name: String,
    /// Currency symbol, unique within the ledger (e.g. "BTC")
    pub currency: String,
    /// Acquisition price per unit
    pub cost_basis: f64,
    pub quantity: f64,
}

impl Holding {
    pub fn new(name: &str, currency: &str, cost_basis: f64, quantity: f64) -> Self {
        Self {
            name: name.to_string(),
            currency: currency.to_string(),
            cost_basis,
            quantity,
        }
    }

    /// Overwrite the fields present in `update`; absent fields are kept.
    pub fn apply(&mut self, update: &HoldingUpdate) {
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(cost_basis) = update.cost_basis {
            self.cost_basis = cost_basis;
        }
    }
}

/// Partial update of a holding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub cost_basis: Option<f64>,
}

/// Outcome of liquidating a holding.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestResult {
    /// Quantity held before the sale
    pub amount_sold: f64,
    /// Cost basis before the sale
    pub original_cost_basis: f64,
    /// The holding after the sale (quantity and cost basis zeroed)
    pub holding: Holding,
}

impl HarvestResult {
    pub fn message(&self) -> String {
        format!(
            "Successfully sold {} {}",
            self.amount_sold, self.holding.currency
        )
    }
}

/// Holdings the ledger starts with.
pub fn default_holdings() -> Vec<Holding> {
    vec![
        Holding::new("Bitcoin", "BTC", 118000.00, 0.45),
        Holding::new("Ethereum", "ETH", 4300.50, 12.5),
        Holding::new("Solana", "SOL", 145.20, 250.0),
        Holding::new("Cardano", "ADA", 0.85, 10000.0),
    ]
}
