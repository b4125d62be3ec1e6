use std::path::Path;

use anyhow::Result;

use coinfolio_core::services::quote_service::AlarmStatus;
use coinfolio_core::CoinTracker;

pub async fn execute(file: &Path) -> Result<()> {
    let tracker = CoinTracker::load_from_file(file)?;

    if tracker.alarms().is_empty() {
        println!("No alarms set.");
        return Ok(());
    }

    for check in tracker.check_alarms().await {
        match check.result {
            Ok(AlarmStatus::Triggered { current }) => {
                println!(
                    "ALARM: {} has reached ${:.2} (current: ${:.2})",
                    check.symbol, check.threshold, current
                );
            }
            Ok(AlarmStatus::Quiet { .. }) => {}
            Err(e) => {
                println!("Error fetching price for {}: {}", check.symbol, e);
            }
        }
    }

    Ok(())
}
