use tokio::time::Instant;

/// A cached spot price and the moment it was fetched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CachedPrice {
    pub price: f64,
    pub fetched_at: Instant,
}

impl CachedPrice {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            fetched_at: Instant::now(),
        }
    }

    /// True while the entry is younger than `ttl`.
    pub fn is_fresh(&self, ttl: std::time::Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Render a price as the decimal string used in API responses.
///
/// Integral values keep a trailing `.0` so clients always see a decimal
/// (`67000` is rendered as `"67000.0"`).
pub fn format_amount(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
