use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::traits::PriceProvider;
use crate::errors::CoreError;

const BASE_URL: &str = "https://api.binance.com";

/// Binance public ticker API provider.
///
/// - **Free**: no API key required.
/// - **Endpoint**: `/api/v3/ticker/price?symbol={SYMBOL}`
///
/// Binance quotes ticker *pairs* ("BTCUSDT"), not bare assets, and returns
/// the price as a decimal string inside a JSON object.
pub struct BinanceProvider {
    client: Client,
    base_url: String,
}

impl BinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the provider at a different base URL (test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for BinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── Binance API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct TickerResponse {
    /// Absent when Binance answers with an error body ({"code": .., "msg": ..})
    price: Option<String>,
    msg: Option<String>,
}

#[async_trait]
impl PriceProvider for BinanceProvider {
    fn name(&self) -> &str {
        "Binance"
    }

    async fn get_current_price(&self, symbol: &str) -> Result<f64, CoreError> {
        let url = format!("{}/api/v3/ticker/price?symbol={symbol}", self.base_url);
        debug!(symbol, "fetching ticker price");

        let resp: TickerResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Binance".into(),
                message: format!("Failed to parse response for {symbol}: {e}"),
            })?;

        let raw = resp.price.ok_or_else(|| CoreError::Api {
            provider: "Binance".into(),
            message: match resp.msg {
                Some(msg) => format!("No price data for {symbol}: {msg}"),
                None => format!("No price data for {symbol}"),
            },
        })?;

        let price: f64 = raw.parse().map_err(|e| CoreError::Api {
            provider: "Binance".into(),
            message: format!("Invalid price format for {symbol}: {e}"),
        })?;

        Ok(price)
    }
}
