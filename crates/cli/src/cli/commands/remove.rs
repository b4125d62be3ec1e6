use std::path::Path;

use anyhow::Result;
use clap::Args;

use coinfolio_core::services::portfolio_service::RemoveOutcome;
use coinfolio_core::CoinTracker;

#[derive(Args)]
pub struct RemoveArgs {
    /// Ticker pair symbol (e.g., BTCUSDT)
    pub symbol: String,
}

pub fn execute(file: &Path, args: RemoveArgs) -> Result<()> {
    let mut tracker = CoinTracker::load_from_file(file)?;

    match tracker.remove_coin(&args.symbol) {
        RemoveOutcome::Removed => println!("Coin removed."),
        RemoveOutcome::NotFound => println!("Coin not found in the portfolio."),
    }

    Ok(())
}
