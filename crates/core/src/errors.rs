use thiserror::Error;

/// Unified error type for the entire arbitrack-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Chain evaluation itself never fails: numeric oddities (zero rates,
/// negative capital, out-of-range tax) propagate arithmetically.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Session / File ──────────────────────────────────────────────
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Strategy not found: {0}")]
    StrategyNotFound(String),

    #[error("Step {step_id} not found in strategy {strategy_id}")]
    StepNotFound {
        strategy_id: String,
        step_id: String,
    },

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Exchange not found: {0}")]
    ExchangeNotFound(String),

    #[error("Cannot remove the last remaining strategy")]
    LastStrategy,
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
