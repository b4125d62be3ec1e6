use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for price data sources.
///
/// The Binance ticker API is the only real implementation, but the seam
/// keeps the services testable with a mock and lets the exchange be
/// swapped without touching the rest of the codebase.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the current price of a ticker pair (e.g., "BTCUSDT").
    /// Each call is a fresh round trip — no retry, no caching.
    async fn get_current_price(&self, symbol: &str) -> Result<f64, CoreError>;
}
