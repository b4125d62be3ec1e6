use crate::errors::CoreError;
use crate::models::coin::Coin;
use crate::models::portfolio::Portfolio;

/// Result of an add attempt. "Already exists" is an expected, reported
/// outcome — not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Result of a remove attempt. "Not found" is an expected, reported
/// outcome — not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Manages the coin list and alarm thresholds.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add a coin to the portfolio.
    ///
    /// The symbol is validated and uppercased. If a coin with the same
    /// symbol is already tracked, nothing changes and `AlreadyExists` is
    /// reported. Otherwise the coin is appended (insertion order of the
    /// existing coins is preserved) with an unset price.
    pub fn add_coin(
        &self,
        portfolio: &mut Portfolio,
        symbol: &str,
    ) -> Result<AddOutcome, CoreError> {
        let symbol = Self::validate_symbol(symbol)?;

        if portfolio.contains(&symbol) {
            return Ok(AddOutcome::AlreadyExists);
        }

        portfolio.coins.push(Coin::new(symbol));
        Ok(AddOutcome::Added)
    }

    /// Remove the coin matching `symbol` (exact match after uppercasing).
    /// Relative order of the remaining coins is preserved.
    pub fn remove_coin(&self, portfolio: &mut Portfolio, symbol: &str) -> RemoveOutcome {
        let upper = symbol.to_uppercase();
        match portfolio.coins.iter().position(|c| c.symbol == upper) {
            Some(idx) => {
                portfolio.coins.remove(idx);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Set or overwrite the alarm threshold for a symbol.
    ///
    /// The symbol does not need to match a tracked coin — an alarm can be
    /// set for a pair that was removed or never added.
    pub fn set_alarm(
        &self,
        portfolio: &mut Portfolio,
        symbol: &str,
        price: f64,
    ) -> Result<(), CoreError> {
        let symbol = Self::validate_symbol(symbol)?;

        if !price.is_finite() || price < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Invalid alarm price {price}: must be a finite, non-negative number"
            )));
        }

        portfolio.alarms.insert(symbol, price);
        Ok(())
    }

    /// Validate a ticker symbol and return its canonical uppercase form.
    ///
    /// Rules: non-empty, ASCII alphanumeric only (Binance pairs like
    /// "BTCUSDT", "1INCHUSDT").
    fn validate_symbol(symbol: &str) -> Result<String, CoreError> {
        let trimmed = symbol.trim().to_uppercase();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid symbol '{symbol}': must be a non-empty alphanumeric ticker pair (e.g., BTCUSDT)"
            )));
        }
        Ok(trimmed)
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
