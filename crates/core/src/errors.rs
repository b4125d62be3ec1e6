use thiserror::Error;

/// Unified error type for the entire coinfolio-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── File I/O ────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network(e.to_string())
    }
}
