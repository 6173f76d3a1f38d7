use std::sync::Arc;

use log::info;

use super::holdings_model::{HarvestResult, Holding, HoldingUpdate};
use super::holdings_repository::HoldingsRepositoryTrait;
use crate::errors::Result;

pub trait HoldingsServiceTrait: Send + Sync {
    /// All holdings in ledger order.
    fn get_holdings(&self) -> Vec<Holding>;

    /// Overwrite the quantity and/or cost basis of the holding for `currency`.
    fn update_holding(&self, currency: &str, update: HoldingUpdate) -> Result<Holding>;

    /// Sell the whole position in `currency`.
    ///
    /// The sale is unconditional: it does not compare the cost basis with the
    /// market price. Quantity and cost basis are both reset to zero.
    fn harvest_tax_loss(&self, currency: &str) -> Result<HarvestResult>;
}

pub struct HoldingsService {
    repository: Arc<dyn HoldingsRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(repository: Arc<dyn HoldingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn get_holdings(&self) -> Vec<Holding> {
        self.repository.list()
    }

    fn update_holding(&self, currency: &str, update: HoldingUpdate) -> Result<Holding> {
        let holding = self
            .repository
            .modify(currency, &mut |holding| holding.apply(&update))?;
        info!(
            "Updated holding {}: quantity={}, cost_basis={}",
            currency, holding.quantity, holding.cost_basis
        );
        Ok(holding)
    }

    fn harvest_tax_loss(&self, currency: &str) -> Result<HarvestResult> {
        let mut amount_sold = 0.0;
        let mut original_cost_basis = 0.0;

        let holding = self.repository.modify(currency, &mut |holding| {
            amount_sold = holding.quantity;
            original_cost_basis = holding.cost_basis;
            holding.quantity = 0.0;
            holding.cost_basis = 0.0;
        })?;

        info!(
            "Harvested {} {} (original cost basis {})",
            amount_sold, currency, original_cost_basis
        );

        Ok(HarvestResult {
            amount_sold,
            original_cost_basis,
            holding,
        })
    }
}
