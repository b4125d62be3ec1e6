// ═══════════════════════════════════════════════════════════════════
// Storage Tests — StorageManager load/save semantics
// ═══════════════════════════════════════════════════════════════════

use coinfolio_core::errors::CoreError;
use coinfolio_core::models::coin::Coin;
use coinfolio_core::models::portfolio::Portfolio;
use coinfolio_core::storage::manager::StorageManager;

fn sample_portfolio() -> Portfolio {
    let mut portfolio = Portfolio::default();
    portfolio.coins.push(Coin::new("BTCUSDT"));
    portfolio.coins.push(Coin::new("ETHUSDT"));
    portfolio.alarms.insert("BTCUSDT".into(), 100_000.0);
    portfolio
}

// ═══════════════════════════════════════════════════════════════════
// load_from_file
// ═══════════════════════════════════════════════════════════════════

mod load {
    use super::*;

    #[test]
    fn missing_file_yields_empty_portfolio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        let portfolio = StorageManager::load_from_file(&path).unwrap();
        assert!(portfolio.coins.is_empty());
        assert!(portfolio.alarms.is_empty());
    }

    #[test]
    fn malformed_file_is_a_deserialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = StorageManager::load_from_file(&path).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn wrong_shape_is_a_deserialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, r#"{"coins": "not-an-array"}"#).unwrap();

        let err = StorageManager::load_from_file(&path).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn unreadable_path_is_a_file_io_error() {
        // Reading a directory as a file fails with something other than
        // NotFound, which must NOT be collapsed into the empty default.
        let dir = tempfile::tempdir().unwrap();

        let err = StorageManager::load_from_file(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn loads_legacy_file_without_alarms_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(
            &path,
            r#"{"coins":[{"symbol":"BTCUSDT","price":0}],"timestamp":"2024-06-01T00:00:00Z"}"#,
        )
        .unwrap();

        let portfolio = StorageManager::load_from_file(&path).unwrap();
        assert_eq!(portfolio.coins.len(), 1);
        assert!(portfolio.alarms.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// save_to_file
// ═══════════════════════════════════════════════════════════════════

mod save {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut portfolio = sample_portfolio();

        StorageManager::save_to_file(&mut portfolio, &path).unwrap();
        let loaded = StorageManager::load_from_file(&path).unwrap();

        let symbols: Vec<&str> = loaded.coins.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTCUSDT", "ETHUSDT"]);
        assert_eq!(loaded.alarms, portfolio.alarms);
    }

    #[test]
    fn save_stamps_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut portfolio = sample_portfolio();
        portfolio.timestamp = "2020-01-01T00:00:00Z".parse().unwrap();

        let before = chrono::Utc::now();
        StorageManager::save_to_file(&mut portfolio, &path).unwrap();
        assert!(portfolio.timestamp >= before);

        let loaded = StorageManager::load_from_file(&path).unwrap();
        assert!(loaded.timestamp >= before);
    }

    #[test]
    fn saving_twice_without_mutation_keeps_coins_and_alarms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut portfolio = sample_portfolio();

        StorageManager::save_to_file(&mut portfolio, &path).unwrap();
        let first = StorageManager::load_from_file(&path).unwrap();

        StorageManager::save_to_file(&mut portfolio, &path).unwrap();
        let second = StorageManager::load_from_file(&path).unwrap();

        assert_eq!(first.coins, second.coins);
        assert_eq!(first.alarms, second.alarms);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");

        let mut portfolio = sample_portfolio();
        StorageManager::save_to_file(&mut portfolio, &path).unwrap();

        portfolio.coins.clear();
        StorageManager::save_to_file(&mut portfolio, &path).unwrap();

        let loaded = StorageManager::load_from_file(&path).unwrap();
        assert!(loaded.coins.is_empty());
        // Alarms survive coin removal independently
        assert_eq!(loaded.alarms.len(), 1);
    }

    #[test]
    fn output_is_pretty_printed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut portfolio = sample_portfolio();

        StorageManager::save_to_file(&mut portfolio, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.contains('\n'));
        assert!(content.contains("\"coins\""));
        assert!(content.contains("\"timestamp\""));
        assert!(content.contains("\"alarms\""));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut portfolio = sample_portfolio();

        StorageManager::save_to_file(&mut portfolio, &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn write_failure_is_a_file_io_error() {
        // Parent directory does not exist, so the temp-file write fails.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-parent").join("portfolio.json");
        let mut portfolio = sample_portfolio();

        let err = StorageManager::save_to_file(&mut portfolio, &path).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}
