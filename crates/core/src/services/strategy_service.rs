use tracing::debug;

use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::step::{ChainStep, FeeSpec, StepAction};
use crate::models::strategy::StrategyChain;

/// Fallback destination symbol for new steps when the asset catalog is empty.
const DEFAULT_TO_ASSET: &str = "USDT";

/// Default fee for new steps: 0.1% of input.
const DEFAULT_FEE: FeeSpec = FeeSpec::Percent(0.1);

/// Creates, renames, and removes strategies and edits their step sequences.
///
/// Operates on a `Session` in memory.
pub struct StrategyService;

impl StrategyService {
    pub fn new() -> Self {
        Self
    }

    /// Append an empty strategy named "Chain N" (N = new strategy count).
    pub fn add_strategy(&self, session: &mut Session) -> String {
        let strategy = StrategyChain::new(format!("Chain {}", session.strategies.len() + 1));
        let id = strategy.id.clone();
        debug!(strategy = %id, name = %strategy.name, "added strategy");
        session.strategies.push(strategy);
        id
    }

    /// Remove a strategy. The last remaining strategy cannot be removed.
    pub fn remove_strategy(&self, session: &mut Session, strategy_id: &str) -> Result<(), CoreError> {
        let idx = Self::position(session, strategy_id)?;
        if session.strategies.len() <= 1 {
            return Err(CoreError::LastStrategy);
        }
        session.strategies.remove(idx);
        debug!(strategy = %strategy_id, "removed strategy");
        Ok(())
    }

    pub fn rename_strategy(
        &self,
        session: &mut Session,
        strategy_id: &str,
        name: impl Into<String>,
    ) -> Result<(), CoreError> {
        let strategy = Self::find_mut(session, strategy_id)?;
        strategy.name = name.into();
        Ok(())
    }

    /// Replace a strategy's whole step sequence.
    pub fn set_steps(
        &self,
        session: &mut Session,
        strategy_id: &str,
        steps: Vec<ChainStep>,
    ) -> Result<(), CoreError> {
        let strategy = Self::find_mut(session, strategy_id)?;
        strategy.steps = steps;
        Ok(())
    }

    /// Append a step pre-filled to continue the chain.
    ///
    /// The new step reuses the previous step's exchange and starts from its
    /// destination asset. For an empty chain it uses the first exchange and
    /// the initial capital asset.
    pub fn add_step(&self, session: &mut Session, strategy_id: &str) -> Result<String, CoreError> {
        let default_exchange = session
            .exchanges
            .first()
            .map(|e| e.id.clone())
            .unwrap_or_default();
        let default_to = session
            .assets
            .first()
            .map(|a| a.symbol.clone())
            .unwrap_or_else(|| DEFAULT_TO_ASSET.to_string());
        let capital_asset = session.settings.initial_capital.asset.clone();

        let strategy = Self::find_mut(session, strategy_id)?;
        let last = strategy.steps.last();

        // An empty exchange id on the last step falls back like a missing one.
        let exchange_id = last
            .map(|s| s.exchange_id.clone())
            .filter(|id| !id.is_empty())
            .unwrap_or(default_exchange);
        let from_asset = last
            .map(|s| s.to_asset.clone())
            .filter(|a| !a.is_empty())
            .unwrap_or(capital_asset);

        let step = ChainStep::new(
            exchange_id,
            StepAction::Buy,
            from_asset,
            default_to,
            1.0,
            DEFAULT_FEE,
            0,
        );
        let id = step.id.clone();
        debug!(strategy = %strategy_id, step = %id, "added step");
        strategy.steps.push(step);
        Ok(id)
    }

    /// Overwrite a step in place. The step keeps its original id.
    pub fn update_step(
        &self,
        session: &mut Session,
        strategy_id: &str,
        step_id: &str,
        mut step: ChainStep,
    ) -> Result<(), CoreError> {
        let strategy = Self::find_mut(session, strategy_id)?;
        let slot = strategy
            .steps
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| CoreError::StepNotFound {
                strategy_id: strategy_id.to_string(),
                step_id: step_id.to_string(),
            })?;
        step.id = slot.id.clone();
        *slot = step;
        Ok(())
    }

    pub fn remove_step(
        &self,
        session: &mut Session,
        strategy_id: &str,
        step_id: &str,
    ) -> Result<ChainStep, CoreError> {
        let strategy = Self::find_mut(session, strategy_id)?;
        let idx = strategy
            .steps
            .iter()
            .position(|s| s.id == step_id)
            .ok_or_else(|| CoreError::StepNotFound {
                strategy_id: strategy_id.to_string(),
                step_id: step_id.to_string(),
            })?;
        debug!(strategy = %strategy_id, step = %step_id, "removed step");
        Ok(strategy.steps.remove(idx))
    }

    fn position(session: &Session, strategy_id: &str) -> Result<usize, CoreError> {
        session
            .strategies
            .iter()
            .position(|s| s.id == strategy_id)
            .ok_or_else(|| CoreError::StrategyNotFound(strategy_id.to_string()))
    }

    fn find_mut<'a>(
        session: &'a mut Session,
        strategy_id: &str,
    ) -> Result<&'a mut StrategyChain, CoreError> {
        session
            .strategy_mut(strategy_id)
            .ok_or_else(|| CoreError::StrategyNotFound(strategy_id.to_string()))
    }
}

impl Default for StrategyService {
    fn default() -> Self {
        Self::new()
    }
}
