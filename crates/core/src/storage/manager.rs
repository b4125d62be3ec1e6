use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

/// High-level storage operations: save/load the portfolio to/from a
/// pretty-printed JSON file.
pub struct StorageManager;

impl StorageManager {
    /// Load a portfolio from disk.
    ///
    /// A missing file is not an error — it yields an empty portfolio, so a
    /// first run works without setup. Any other read failure is fatal
    /// (`FileIO`), and a file that exists but does not parse is fatal
    /// (`Deserialization`). The two cases are deliberately not collapsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Portfolio, CoreError> {
        let path = path.as_ref();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no portfolio file, starting empty");
                return Ok(Portfolio::default());
            }
            Err(e) => return Err(e.into()),
        };

        let portfolio: Portfolio = serde_json::from_str(&content)?;
        info!(
            path = %path.display(),
            coins = portfolio.coins.len(),
            alarms = portfolio.alarms.len(),
            "loaded portfolio"
        );
        Ok(portfolio)
    }

    /// Save a portfolio to disk, stamping `timestamp` to the current instant.
    ///
    /// Writes to `<path>.tmp` and renames over the target, so a crash
    /// mid-write cannot leave a truncated file behind.
    pub fn save_to_file(
        portfolio: &mut Portfolio,
        path: impl AsRef<Path>,
    ) -> Result<(), CoreError> {
        let path = path.as_ref();
        portfolio.timestamp = Utc::now();

        let json = serde_json::to_string_pretty(portfolio)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))?;

        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, path)?;

        debug!(path = %path.display(), coins = portfolio.coins.len(), "saved portfolio");
        Ok(())
    }
}
