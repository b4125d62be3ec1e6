use tracing::warn;

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;
use crate::providers::traits::PriceProvider;

/// A live price lookup for one tracked coin. A per-symbol fetch failure is
/// carried in the entry so the rest of the batch can still be displayed.
#[derive(Debug)]
pub struct Quote {
    pub symbol: String,
    pub result: Result<f64, CoreError>,
}

/// Whether an alarm fired when checked against the live price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlarmStatus {
    /// Current price has reached or exceeded the threshold
    Triggered { current: f64 },
    /// Current price is still below the threshold
    Quiet { current: f64 },
}

/// One alarm evaluated against the live market.
#[derive(Debug)]
pub struct AlarmCheck {
    pub symbol: String,
    pub threshold: f64,
    pub result: Result<AlarmStatus, CoreError>,
}

/// Fetches live prices for the portfolio, one sequential round trip per
/// symbol. No caching — every call hits the API, and fetched prices are
/// never written back into the portfolio record (only `save` persists
/// state, and it persists whatever is in memory).
pub struct QuoteService {
    provider: Box<dyn PriceProvider>,
}

impl QuoteService {
    pub fn new(provider: Box<dyn PriceProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch a live price for every tracked coin, in insertion order.
    /// Failures are reported per symbol and never abort the batch.
    pub async fn list_quotes(&self, portfolio: &Portfolio) -> Vec<Quote> {
        let mut quotes = Vec::with_capacity(portfolio.coins.len());

        for coin in &portfolio.coins {
            let result = self.provider.get_current_price(&coin.symbol).await;
            if let Err(e) = &result {
                warn!(symbol = %coin.symbol, error = %e, "price fetch failed");
            }
            quotes.push(Quote {
                symbol: coin.symbol.clone(),
                result,
            });
        }

        quotes
    }

    /// Evaluate every alarm against the live price.
    ///
    /// An alarm triggers when `current >= threshold`. The alarm map has no
    /// inherent order, so checks are sorted by symbol for deterministic
    /// output. Fetch failures are reported per symbol and skipped.
    pub async fn check_alarms(&self, portfolio: &Portfolio) -> Vec<AlarmCheck> {
        let mut alarms: Vec<(&String, &f64)> = portfolio.alarms.iter().collect();
        alarms.sort_by(|a, b| a.0.cmp(b.0));

        let mut checks = Vec::with_capacity(alarms.len());

        for (symbol, &threshold) in alarms {
            let result = match self.provider.get_current_price(symbol).await {
                Ok(current) if current >= threshold => Ok(AlarmStatus::Triggered { current }),
                Ok(current) => Ok(AlarmStatus::Quiet { current }),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "price fetch failed");
                    Err(e)
                }
            };
            checks.push(AlarmCheck {
                symbol: symbol.clone(),
                threshold,
                result,
            });
        }

        checks
    }
}
