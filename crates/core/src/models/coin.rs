use serde::{Deserialize, Serialize};

/// A tracked coin, identified by its ticker pair symbol (e.g., "BTCUSDT").
///
/// **Equality** is based solely on `symbol` — `price` is the last price
/// fetched before the portfolio was saved, advisory only. It is never
/// consulted when displaying live data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    /// Ticker pair symbol, uppercased (e.g., "BTCUSDT", "ETHUSDT")
    pub symbol: String,

    /// Last-fetched price at the time of the last save. Advisory only;
    /// 0.0 for a coin that has never been priced.
    #[serde(default)]
    pub price: f64,
}

impl PartialEq for Coin {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Coin {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            price: 0.0,
        }
    }
}
