//! Market data models.

mod spot_price;
mod types;

pub use spot_price::SpotPrice;
pub use types::CurrencyPair;
