use std::path::Path;

use anyhow::Result;
use clap::Args;

use coinfolio_core::CoinTracker;

#[derive(Args)]
pub struct AlarmArgs {
    /// Ticker pair symbol (e.g., BTCUSDT)
    pub symbol: String,

    /// Threshold price; the alarm triggers when the live price reaches it
    pub price: f64,
}

pub fn execute(file: &Path, args: AlarmArgs) -> Result<()> {
    let mut tracker = CoinTracker::load_from_file(file)?;

    tracker.set_alarm(&args.symbol, args.price)?;
    println!(
        "Alarm set for {} at ${:.2}",
        args.symbol.to_uppercase(),
        args.price
    );

    Ok(())
}
