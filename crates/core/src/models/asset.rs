use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tradable / holdable unit (e.g. "USDT", "BTC", "RUB").
///
/// Only `id` is unique. Two assets may share a symbol, so lookups by
/// symbol can return more than one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier
    pub id: String,

    /// Display symbol, free-form
    pub symbol: String,
}

impl Asset {
    /// Create an asset with a fresh UUID. The symbol is uppercased.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            symbol: symbol.into().to_uppercase(),
        }
    }

    /// Create an asset with a caller-chosen id. The symbol is kept as given.
    pub fn with_id(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}
