pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::collections::HashMap;
use std::path::Path;

use errors::CoreError;
use models::coin::Coin;
use models::portfolio::Portfolio;
use providers::binance::BinanceProvider;
use providers::traits::PriceProvider;
use services::portfolio_service::{AddOutcome, PortfolioService, RemoveOutcome};
use services::quote_service::{AlarmCheck, Quote, QuoteService};
use storage::manager::StorageManager;

/// Main entry point for the Coinfolio core library.
/// Holds the portfolio state and the services needed to operate on it.
///
/// One instance per process invocation: load, apply at most one command,
/// optionally save. Mutations are lost at exit unless `save_to_file` is
/// called — persisting is an explicit user action.
#[must_use]
pub struct CoinTracker {
    portfolio: Portfolio,
    portfolio_service: PortfolioService,
    quote_service: QuoteService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for CoinTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinTracker")
            .field("coins", &self.portfolio.coins.len())
            .field("alarms", &self.portfolio.alarms.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CoinTracker {
    /// Create a brand new empty portfolio.
    pub fn create_new() -> Self {
        Self::build(Portfolio::default(), Box::new(BinanceProvider::new()))
    }

    /// Load the portfolio from a file. A missing file yields an empty
    /// portfolio; a malformed or unreadable file is an error.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let portfolio = StorageManager::load_from_file(path)?;
        Ok(Self::build(portfolio, Box::new(BinanceProvider::new())))
    }

    /// Load with a custom price provider (tests, alternative exchanges).
    pub fn load_from_file_with_provider(
        path: impl AsRef<Path>,
        provider: Box<dyn PriceProvider>,
    ) -> Result<Self, CoreError> {
        let portfolio = StorageManager::load_from_file(path)?;
        Ok(Self::build(portfolio, provider))
    }

    /// Save the current portfolio to a file, stamping the timestamp.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        StorageManager::save_to_file(&mut self.portfolio, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Coin Management ─────────────────────────────────────────────

    /// Add a coin by symbol. Reports `AlreadyExists` without modifying
    /// anything when the symbol is already tracked.
    pub fn add_coin(&mut self, symbol: &str) -> Result<AddOutcome, CoreError> {
        let outcome = self
            .portfolio_service
            .add_coin(&mut self.portfolio, symbol)?;
        if outcome == AddOutcome::Added {
            self.dirty = true;
        }
        Ok(outcome)
    }

    /// Remove a coin by symbol. Reports `NotFound` when absent.
    pub fn remove_coin(&mut self, symbol: &str) -> RemoveOutcome {
        let outcome = self.portfolio_service.remove_coin(&mut self.portfolio, symbol);
        if outcome == RemoveOutcome::Removed {
            self.dirty = true;
        }
        outcome
    }

    /// Set or overwrite a price alarm threshold for a symbol.
    pub fn set_alarm(&mut self, symbol: &str, price: f64) -> Result<(), CoreError> {
        self.portfolio_service
            .set_alarm(&mut self.portfolio, symbol, price)?;
        self.dirty = true;
        Ok(())
    }

    // ── Live Prices ─────────────────────────────────────────────────

    /// Fetch a live quote for every tracked coin, in insertion order.
    /// Per-symbol failures are carried in the result, not fatal.
    pub async fn list_quotes(&self) -> Vec<Quote> {
        self.quote_service.list_quotes(&self.portfolio).await
    }

    /// Evaluate every alarm against the live price, sorted by symbol.
    pub async fn check_alarms(&self) -> Vec<AlarmCheck> {
        self.quote_service.check_alarms(&self.portfolio).await
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Tracked coins, in insertion order.
    #[must_use]
    pub fn coins(&self) -> &[Coin] {
        &self.portfolio.coins
    }

    /// Alarm thresholds keyed by symbol. Iteration order is unspecified.
    #[must_use]
    pub fn alarms(&self) -> &HashMap<String, f64> {
        &self.portfolio.alarms
    }

    #[must_use]
    pub fn coin_count(&self) -> usize {
        self.portfolio.coins.len()
    }

    /// Returns `true` if the portfolio has been modified since the last
    /// save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio, provider: Box<dyn PriceProvider>) -> Self {
        Self {
            portfolio,
            portfolio_service: PortfolioService::new(),
            quote_service: QuoteService::new(provider),
            dirty: false,
        }
    }
}
