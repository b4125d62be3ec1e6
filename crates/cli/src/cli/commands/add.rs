use std::path::Path;

use anyhow::Result;
use clap::Args;

use coinfolio_core::services::portfolio_service::AddOutcome;
use coinfolio_core::CoinTracker;

#[derive(Args)]
pub struct AddArgs {
    /// Ticker pair symbol (e.g., BTCUSDT)
    pub symbol: String,
}

pub fn execute(file: &Path, args: AddArgs) -> Result<()> {
    let mut tracker = CoinTracker::load_from_file(file)?;

    match tracker.add_coin(&args.symbol)? {
        AddOutcome::Added => println!("Coin added successfully."),
        AddOutcome::AlreadyExists => println!("Coin already exists in portfolio."),
    }

    Ok(())
}
