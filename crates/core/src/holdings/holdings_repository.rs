use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

use super::holdings_model::{default_holdings, Holding};
use crate::errors::{Error, Result};

/// Storage for holding records.
///
/// Records are looked up by exact currency symbol. The set of records is
/// fixed at construction; only their fields change.
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// All holdings in their original order.
    fn list(&self) -> Vec<Holding>;

    /// Run `f` on the holding for `currency` in one critical section and
    /// return the holding as left by `f`.
    fn modify(&self, currency: &str, f: &mut dyn FnMut(&mut Holding)) -> Result<Holding>;
}

/// Process-lifetime, in-memory holdings store.
pub struct InMemoryHoldingsRepository {
    holdings: RwLock<Vec<Holding>>,
}

impl InMemoryHoldingsRepository {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self {
            holdings: RwLock::new(holdings),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Holding>> {
        self.holdings.read().unwrap_or_else(|poisoned| {
            warn!("Holdings lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Holding>> {
        self.holdings.write().unwrap_or_else(|poisoned| {
            warn!("Holdings lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for InMemoryHoldingsRepository {
    fn default() -> Self {
        Self::new(default_holdings())
    }
}

impl HoldingsRepositoryTrait for InMemoryHoldingsRepository {
    fn list(&self) -> Vec<Holding> {
        self.read().clone()
    }

    fn modify(&self, currency: &str, f: &mut dyn FnMut(&mut Holding)) -> Result<Holding> {
        let mut holdings = self.write();
        let holding = holdings
            .iter_mut()
            .find(|h| h.currency == currency)
            .ok_or_else(|| Error::CurrencyNotFound(currency.to_string()))?;
        f(holding);
        Ok(holding.clone())
    }
}
