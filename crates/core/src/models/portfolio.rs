use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::coin::Coin;

/// The main data container. Everything in here gets serialized as
/// pretty-printed JSON and saved to the portfolio file.
///
/// Contains: the tracked coins (insertion order preserved), per-symbol
/// alarm thresholds, and the instant of the last save.
///
/// Invariant: no two coins share a symbol. Alarm keys are independent of
/// the coin list — an alarm may outlive (or precede) its coin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Tracked coins, in the order they were added
    #[serde(default)]
    pub coins: Vec<Coin>,

    /// Instant of the last save. Stamped by the storage layer on every save.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,

    /// Price alarm thresholds, keyed by symbol.
    /// Iteration order is unspecified; callers that need deterministic
    /// output sort by symbol.
    #[serde(default)]
    pub alarms: HashMap<String, f64>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            coins: Vec::new(),
            timestamp: Utc::now(),
            alarms: HashMap::new(),
        }
    }
}

impl Portfolio {
    /// Whether a coin with this exact (uppercase) symbol is tracked.
    pub fn contains(&self, symbol: &str) -> bool {
        self.coins.iter().any(|c| c.symbol == symbol)
    }
}
