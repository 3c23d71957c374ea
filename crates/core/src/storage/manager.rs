use tracing::info;

use crate::errors::CoreError;
use crate::models::session::Session;

use super::format;

/// Save/load sessions as plain JSON documents.
///
/// Loading is all-or-nothing: a document with missing fields, wrong types,
/// or duplicate ids is rejected with a descriptive error.
pub struct SessionStore;

impl SessionStore {
    /// Serialize a session to pretty-printed JSON.
    ///
    /// Fails if any stored number is NaN or infinite, so every saved
    /// document can be loaded back.
    pub fn save_to_json(session: &Session) -> Result<String, CoreError> {
        format::ensure_finite(session)?;
        serde_json::to_string_pretty(session)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))
    }

    /// Parse and validate a session document.
    pub fn load_from_json(json: &str) -> Result<Session, CoreError> {
        let session: Session = serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse session: {e}")))?;
        format::validate_session(&session)?;

        info!(
            assets = session.assets.len(),
            exchanges = session.exchanges.len(),
            strategies = session.strategies.len(),
            "loaded session"
        );
        Ok(session)
    }

    /// Save a session to a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(session: &Session, path: &str) -> Result<(), CoreError> {
        let json = Self::save_to_json(session)?;
        std::fs::write(path, json)?;
        info!(path, strategies = session.strategies.len(), "saved session");
        Ok(())
    }

    /// Load a session from a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Session, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_json(&json)
    }
}
