use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::exchange::Exchange;
use crate::models::result::{CalculatedStep, ChainResult};
use crate::models::session::Session;
use crate::models::step::{ChainStep, StepAction};
use crate::models::strategy::StrategyChain;

/// Evaluates strategy chains: propagates the amount step by step, charges
/// fees, checks daily limits, then applies tax and derives ROI / efficiency.
///
/// Pure business logic with no I/O and no shared state. Inputs are never
/// validated: a zero Buy rate yields infinity or NaN, negative capital and
/// out-of-range tax are applied literally, and an unknown exchange id just
/// skips the limit check.
pub struct ChainCalculator;

impl ChainCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a single strategy.
    ///
    /// Produces exactly one [`CalculatedStep`] per step, where each step's
    /// output is the next step's input.
    pub fn evaluate(
        &self,
        chain: &StrategyChain,
        initial_amount: f64,
        global_tax_percent: f64,
        exchanges: &HashMap<String, Exchange>,
    ) -> ChainResult {
        let mut current_amount = initial_amount;
        let mut total_fees = 0.0;
        let mut total_hold: u64 = 0;
        let mut steps = Vec::with_capacity(chain.steps.len());

        for step in &chain.steps {
            let input_amount = current_amount;
            let fee = step.fee.amount(input_amount);
            let output_amount = Self::step_output(step, input_amount, fee);

            let limit_used = input_amount;
            let limit_warning = exchanges
                .get(&step.exchange_id)
                .is_some_and(|ex| ex.exceeds_daily_limit(limit_used));

            if limit_warning {
                warn!(
                    strategy = %chain.name,
                    step = %step.id,
                    exchange = %step.exchange_id,
                    amount = limit_used,
                    "step input exceeds exchange daily limit"
                );
            }
            if !output_amount.is_finite() {
                warn!(
                    strategy = %chain.name,
                    step = %step.id,
                    action = %step.action,
                    rate = step.rate,
                    "step produced a non-finite amount"
                );
            }

            total_hold += u64::from(step.hold_days);
            total_fees += fee;

            debug!(
                step = %step.id,
                action = %step.action,
                input = input_amount,
                fee,
                output = output_amount,
                cumulative_hold = total_hold,
                "evaluated step"
            );

            steps.push(CalculatedStep {
                step: step.clone(),
                input_amount,
                output_amount,
                fee_amount: fee,
                cumulative_hold: total_hold,
                limit_warning,
                limit_used,
            });

            current_amount = output_amount;
        }

        let final_gross = current_amount;
        let net_profit_before_tax = final_gross - initial_amount;
        let net_profit_after_tax = Self::apply_tax(net_profit_before_tax, global_tax_percent);

        let roi = if initial_amount > 0.0 {
            net_profit_after_tax / initial_amount * 100.0
        } else {
            0.0
        };
        let efficiency = if total_hold > 0 {
            net_profit_after_tax / total_hold as f64
        } else {
            net_profit_after_tax
        };

        debug!(
            strategy = %chain.name,
            steps = steps.len(),
            final_gross,
            net_profit_after_tax,
            roi,
            "evaluated chain"
        );

        ChainResult {
            strategy_id: chain.id.clone(),
            strategy_name: chain.name.clone(),
            steps,
            total_fees,
            total_hold,
            final_gross,
            net_profit_before_tax,
            net_profit_after_tax,
            roi,
            efficiency,
        }
    }

    /// Evaluate every strategy in the session, in session order.
    pub fn evaluate_all(&self, session: &Session) -> Vec<ChainResult> {
        let exchanges = session.exchange_map();
        let capital = session.settings.initial_capital.amount;
        let tax = session.settings.global_tax;

        session
            .strategies
            .iter()
            .map(|chain| self.evaluate(chain, capital, tax, &exchanges))
            .collect()
    }

    /// Amount leaving a step.
    ///
    /// Transfer and Withdraw ignore `rate`: they only deduct the fee and
    /// never convert between assets.
    fn step_output(step: &ChainStep, input_amount: f64, fee: f64) -> f64 {
        match step.action {
            StepAction::Buy => (input_amount - fee) / step.rate,
            StepAction::Sell => input_amount * step.rate - fee,
            StepAction::Transfer | StepAction::Withdraw => input_amount - fee,
        }
    }

    /// Tax applies to strictly positive profit only. Losses pass through untouched.
    fn apply_tax(profit: f64, tax_percent: f64) -> f64 {
        if profit > 0.0 {
            profit * (1.0 - tax_percent / 100.0)
        } else {
            profit
        }
    }
}

impl Default for ChainCalculator {
    fn default() -> Self {
        Self::new()
    }
}
