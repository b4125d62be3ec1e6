use std::path::Path;

use anyhow::Result;

use coinfolio_core::CoinTracker;

use super::display;

pub async fn execute(file: &Path) -> Result<()> {
    let tracker = CoinTracker::load_from_file(file)?;

    if tracker.coin_count() == 0 {
        println!("No coins in portfolio.");
        return Ok(());
    }

    let quotes = tracker.list_quotes().await;

    // Report failed fetches first, then render the table of the rest.
    for quote in &quotes {
        if let Err(e) = &quote.result {
            println!("Error fetching price for {}: {}", quote.symbol, e);
        }
    }

    println!("{}", display::quotes_table(&quotes));

    Ok(())
}
