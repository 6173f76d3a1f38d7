//! Holdings ledger: currency holdings and the tax loss harvest operation.

pub mod holdings_model;
pub mod holdings_repository;
pub mod holdings_service;


pub use holdings_model::{default_holdings, HarvestResult, Holding, HoldingUpdate};
pub use holdings_repository::{HoldingsRepositoryTrait, InMemoryHoldingsRepository};
pub use holdings_service::{HoldingsService, HoldingsServiceTrait};
