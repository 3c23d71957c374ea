pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::{
    asset::Asset,
    comparison::{ChartRow, Comparison},
    exchange::{Exchange, NewExchange},
    result::ChainResult,
    session::Session,
    settings::{InitialCapital, Settings},
    step::ChainStep,
    strategy::StrategyChain,
};
use services::{
    calculator_service::ChainCalculator, catalog_service::CatalogService,
    ranking_service::RankingService, strategy_service::StrategyService,
};
use storage::manager::SessionStore;

use errors::CoreError;

/// Main entry point for the ArbiTrack core library.
/// Holds the session state and all services needed to operate on it.
///
/// Results are never cached: every call to [`ArbitrageTracker::results`]
/// re-evaluates all strategies from the current session.
#[must_use]
pub struct ArbitrageTracker {
    session: Session,
    calculator: ChainCalculator,
    ranking_service: RankingService,
    strategy_service: StrategyService,
    catalog_service: CatalogService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for ArbitrageTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArbitrageTracker")
            .field("assets", &self.session.assets.len())
            .field("exchanges", &self.session.exchanges.len())
            .field("strategies", &self.session.strategies.len())
            .field("settings", &self.session.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl ArbitrageTracker {
    /// Start from the default seed session (sample assets, exchanges, two empty chains).
    pub fn create_new() -> Self {
        Self::build(Session::default())
    }

    /// Wrap an existing session (e.g. one supplied by a state store).
    pub fn from_session(session: Session) -> Self {
        Self::build(session)
    }

    /// Load a session from a JSON document. Malformed documents are rejected whole.
    pub fn load_from_json(json: &str) -> Result<Self, CoreError> {
        let session = SessionStore::load_from_json(json)?;
        Ok(Self::build(session))
    }

    /// Serialize the session to JSON. Clears the unsaved-changes flag on success.
    pub fn save_to_json(&mut self) -> Result<String, CoreError> {
        let json = SessionStore::save_to_json(&self.session)?;
        self.dirty = false;
        Ok(json)
    }

    /// Load from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let session = SessionStore::load_from_file(path)?;
        Ok(Self::build(session))
    }

    /// Save to a JSON file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        SessionStore::save_to_file(&self.session, path)?;
        self.dirty = false;
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns `true` if the session has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Evaluation ──────────────────────────────────────────────────

    /// Evaluate every strategy against the current settings, in session order.
    #[must_use]
    pub fn results(&self) -> Vec<ChainResult> {
        self.calculator.evaluate_all(&self.session)
    }

    /// Evaluate a single strategy by id.
    pub fn result_for(&self, strategy_id: &str) -> Result<ChainResult, CoreError> {
        let strategy = self
            .session
            .strategy(strategy_id)
            .ok_or_else(|| CoreError::StrategyNotFound(strategy_id.to_string()))?;
        Ok(self.calculator.evaluate(
            strategy,
            self.session.settings.initial_capital.amount,
            self.session.settings.global_tax,
            &self.session.exchange_map(),
        ))
    }

    /// Rank precomputed results. `None` when `results` is empty.
    #[must_use]
    pub fn compare<'a>(&self, results: &'a [ChainResult]) -> Option<Comparison<'a>> {
        self.ranking_service.compare(results)
    }

    /// Chart rows for precomputed results.
    #[must_use]
    pub fn chart_rows(&self, results: &[ChainResult]) -> Vec<ChartRow> {
        self.ranking_service.chart_rows(results)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.session.settings
    }

    /// Set the global tax percentage. Any value is accepted, including
    /// negatives and values above 100.
    pub fn set_global_tax(&mut self, tax_percent: f64) {
        self.session.settings.global_tax = tax_percent;
        self.dirty = true;
    }

    /// Set the starting capital. Any amount is accepted. The asset symbol is
    /// only trimmed, so it keeps matching the catalog symbol it came from.
    pub fn set_initial_capital(&mut self, amount: f64, asset: &str) {
        self.session.settings.initial_capital = InitialCapital {
            amount,
            asset: asset.trim().to_string(),
        };
        self.dirty = true;
    }

    // ── Catalogs ────────────────────────────────────────────────────

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.session.assets
    }

    pub fn add_asset(&mut self, symbol: &str) -> Result<String, CoreError> {
        let id = self.catalog_service.add_asset(&mut self.session, symbol)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn remove_asset(&mut self, asset_id: &str) -> Result<Asset, CoreError> {
        let removed = self.catalog_service.remove_asset(&mut self.session, asset_id)?;
        self.dirty = true;
        Ok(removed)
    }

    /// Assets with the given symbol (case-insensitive). Symbols are not unique.
    #[must_use]
    pub fn find_assets_by_symbol(&self, symbol: &str) -> Vec<&Asset> {
        self.catalog_service.find_assets_by_symbol(&self.session, symbol)
    }

    #[must_use]
    pub fn exchanges(&self) -> &[Exchange] {
        &self.session.exchanges
    }

    pub fn add_exchange(&mut self, form: NewExchange) -> Result<String, CoreError> {
        let id = self.catalog_service.add_exchange(&mut self.session, form)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn remove_exchange(&mut self, exchange_id: &str) -> Result<Exchange, CoreError> {
        let removed = self.catalog_service.remove_exchange(&mut self.session, exchange_id)?;
        self.dirty = true;
        Ok(removed)
    }

    // ── Strategies ──────────────────────────────────────────────────

    #[must_use]
    pub fn strategies(&self) -> &[StrategyChain] {
        &self.session.strategies
    }

    #[must_use]
    pub fn get_strategy(&self, strategy_id: &str) -> Option<&StrategyChain> {
        self.session.strategy(strategy_id)
    }

    pub fn add_strategy(&mut self) -> String {
        let id = self.strategy_service.add_strategy(&mut self.session);
        self.dirty = true;
        id
    }

    pub fn remove_strategy(&mut self, strategy_id: &str) -> Result<(), CoreError> {
        self.strategy_service.remove_strategy(&mut self.session, strategy_id)?;
        self.dirty = true;
        Ok(())
    }

    pub fn rename_strategy(&mut self, strategy_id: &str, name: &str) -> Result<(), CoreError> {
        self.strategy_service
            .rename_strategy(&mut self.session, strategy_id, name)?;
        self.dirty = true;
        Ok(())
    }

    pub fn set_steps(&mut self, strategy_id: &str, steps: Vec<ChainStep>) -> Result<(), CoreError> {
        self.strategy_service
            .set_steps(&mut self.session, strategy_id, steps)?;
        self.dirty = true;
        Ok(())
    }

    pub fn add_step(&mut self, strategy_id: &str) -> Result<String, CoreError> {
        let id = self.strategy_service.add_step(&mut self.session, strategy_id)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn update_step(
        &mut self,
        strategy_id: &str,
        step_id: &str,
        step: ChainStep,
    ) -> Result<(), CoreError> {
        self.strategy_service
            .update_step(&mut self.session, strategy_id, step_id, step)?;
        self.dirty = true;
        Ok(())
    }

    pub fn remove_step(&mut self, strategy_id: &str, step_id: &str) -> Result<ChainStep, CoreError> {
        let removed = self
            .strategy_service
            .remove_step(&mut self.session, strategy_id, step_id)?;
        self.dirty = true;
        Ok(removed)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(session: Session) -> Self {
        Self {
            session,
            calculator: ChainCalculator::new(),
            ranking_service: RankingService::new(),
            strategy_service: StrategyService::new(),
            catalog_service: CatalogService::new(),
            dirty: false,
        }
    }
}
