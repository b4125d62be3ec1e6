use std::path::Path;

use anyhow::Result;

use coinfolio_core::CoinTracker;

pub fn execute(file: &Path) -> Result<()> {
    let mut tracker = CoinTracker::load_from_file(file)?;

    tracker.save_to_file(file)?;
    println!("Portfolio saved successfully.");

    Ok(())
}
