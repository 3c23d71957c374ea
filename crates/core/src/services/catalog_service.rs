use tracing::debug;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::exchange::{Exchange, NewExchange};
use crate::models::session::Session;

/// Manages the global asset and exchange catalogs.
///
/// Removing an exchange leaves steps that reference it untouched; they just
/// stop getting a limit check.
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Register an asset. The symbol is trimmed and uppercased.
    /// Duplicate symbols are allowed.
    pub fn add_asset(&self, session: &mut Session, symbol: &str) -> Result<String, CoreError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError(
                "Asset symbol must not be empty".into(),
            ));
        }
        let asset = Asset::new(trimmed);
        let id = asset.id.clone();
        debug!(asset = %id, symbol = %asset.symbol, "added asset");
        session.assets.push(asset);
        Ok(id)
    }

    pub fn remove_asset(&self, session: &mut Session, asset_id: &str) -> Result<Asset, CoreError> {
        let idx = session
            .assets
            .iter()
            .position(|a| a.id == asset_id)
            .ok_or_else(|| CoreError::AssetNotFound(asset_id.to_string()))?;
        Ok(session.assets.remove(idx))
    }

    /// All assets carrying `symbol` (case-insensitive). May be more than one.
    pub fn find_assets_by_symbol<'a>(&self, session: &'a Session, symbol: &str) -> Vec<&'a Asset> {
        session
            .assets
            .iter()
            .filter(|a| a.symbol.eq_ignore_ascii_case(symbol))
            .collect()
    }

    /// Register an exchange from form data. The name must not be blank.
    pub fn add_exchange(&self, session: &mut Session, form: NewExchange) -> Result<String, CoreError> {
        if form.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Exchange name must not be empty".into(),
            ));
        }
        let exchange = form.into_exchange();
        let id = exchange.id.clone();
        debug!(exchange = %id, name = %exchange.name, "added exchange");
        session.exchanges.push(exchange);
        Ok(id)
    }

    pub fn remove_exchange(
        &self,
        session: &mut Session,
        exchange_id: &str,
    ) -> Result<Exchange, CoreError> {
        let idx = session
            .exchanges
            .iter()
            .position(|e| e.id == exchange_id)
            .ok_or_else(|| CoreError::ExchangeNotFound(exchange_id.to_string()))?;
        Ok(session.exchanges.remove(idx))
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
