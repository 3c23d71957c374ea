use chrono::NaiveDate;
use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::session::Session;

/// Prefix of exported session file names.
pub const FILE_PREFIX: &str = "arbitrack-session";

/// Extension of exported session files.
pub const FILE_EXTENSION: &str = "json";

/// Suggested download name for a session saved on `date`,
/// e.g. `arbitrack-session-2025-01-15.json`.
pub fn session_file_name(date: NaiveDate) -> String {
    format!("{FILE_PREFIX}-{}.{FILE_EXTENSION}", date.format("%Y-%m-%d"))
}

/// Check invariants serde cannot express: ids must be unique among assets,
/// among exchanges, among strategies, and among the steps of each strategy.
///
/// Dangling references (a step's `exchangeId` or asset symbols) are allowed.
pub fn validate_session(session: &Session) -> Result<(), CoreError> {
    ensure_unique("asset", session.assets.iter().map(|a| a.id.as_str()))?;
    ensure_unique("exchange", session.exchanges.iter().map(|e| e.id.as_str()))?;
    ensure_unique("strategy", session.strategies.iter().map(|s| s.id.as_str()))?;

    for strategy in &session.strategies {
        ensure_unique(
            &format!("step in strategy '{}'", strategy.name),
            strategy.steps.iter().map(|s| s.id.as_str()),
        )?;
    }

    Ok(())
}

/// Check that every number the session stores is finite. JSON has no
/// representation for NaN or infinity, so such a session would be written
/// with `null` and then fail to load.
pub fn ensure_finite(session: &Session) -> Result<(), CoreError> {
    check_finite("globalTax", session.settings.global_tax)?;
    check_finite("initialCapital.amount", session.settings.initial_capital.amount)?;

    for exchange in &session.exchanges {
        check_finite(&format!("dailyLimit of exchange '{}'", exchange.id), exchange.daily_limit)?;
        check_finite(&format!("monthlyLimit of exchange '{}'", exchange.id), exchange.monthly_limit)?;
    }

    for strategy in &session.strategies {
        for step in &strategy.steps {
            check_finite(&format!("rate of step '{}'", step.id), step.rate)?;
            check_finite(&format!("feeValue of step '{}'", step.id), step.fee.value())?;
        }
    }

    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Serialization(format!("{field} is not a finite number ({value})")))
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::InvalidSession(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}
