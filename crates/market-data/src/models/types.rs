/// Upstream pair identifier in `BASE-QUOTE` form (e.g. "BTC-USD")
pub type CurrencyPair = String;
