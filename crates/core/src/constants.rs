use std::time::Duration;

/// How long a fetched spot price is served from the cache.
pub const DEFAULT_PRICE_CACHE_TTL: Duration = Duration::from_secs(2);

/// Validation message for a batch request without pairs.
pub const NO_PAIRS_PROVIDED: &str = "No currency pairs provided";
