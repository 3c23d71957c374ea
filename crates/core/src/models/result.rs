use serde::{Deserialize, Serialize};

use super::step::ChainStep;

/// A step paired with the amounts it produced during one evaluation.
/// Recomputed on every evaluation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedStep {
    pub step: ChainStep,

    /// Amount entering the step (previous step's output, or initial capital)
    pub input_amount: f64,

    /// Amount leaving the step after fee and conversion
    pub output_amount: f64,

    pub fee_amount: f64,

    /// Running hold total including this step's delay
    pub cumulative_hold: u64,

    /// `true` when the input exceeds the exchange's daily limit
    pub limit_warning: bool,

    /// Amount checked against the limit (the input amount)
    pub limit_used: f64,
}

/// Full evaluation of one strategy against the global settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainResult {
    pub strategy_id: String,
    pub strategy_name: String,

    /// One entry per step, in chain order
    pub steps: Vec<CalculatedStep>,

    pub total_fees: f64,

    /// Sum of all hold days
    pub total_hold: u64,

    /// Amount left after the last step
    pub final_gross: f64,

    /// `final_gross - initial_amount`
    pub net_profit_before_tax: f64,

    /// Taxed only when the pre-tax profit is strictly positive
    pub net_profit_after_tax: f64,

    /// After-tax profit as a percentage of initial capital (0 if capital <= 0)
    pub roi: f64,

    /// After-tax profit per hold day (raw profit if no days were held)
    pub efficiency: f64,
}

impl ChainResult {
    /// Whether any step in this result breached its exchange's daily limit.
    pub fn has_limit_warning(&self) -> bool {
        self.steps.iter().any(|s| s.limit_warning)
    }
}
