use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trading venue or bank with static transaction caps.
///
/// Limits are caps, not running balances. The calculator only compares a
/// single step's input amount against `daily_limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    /// Unique identifier, referenced by `ChainStep::exchange_id`
    pub id: String,

    /// Display name (e.g., "Binance", "Sberbank")
    pub name: String,

    /// Per-transaction daily cap, in `currency`
    pub daily_limit: f64,

    /// Monthly cap, in `currency` (informational, not checked)
    pub monthly_limit: f64,

    /// Currency label for the limits (e.g., "RUB", "AZN")
    pub currency: String,
}

/// Form data for registering a new exchange. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExchange {
    pub name: String,
    pub daily_limit: f64,
    pub monthly_limit: f64,
    pub currency: String,
}

impl Default for NewExchange {
    fn default() -> Self {
        Self {
            name: String::new(),
            daily_limit: 100_000.0,
            monthly_limit: 1_000_000.0,
            currency: "RUB".to_string(),
        }
    }
}

impl NewExchange {
    /// Form defaults with the given name filled in.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_exchange(self) -> Exchange {
        Exchange {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            daily_limit: self.daily_limit,
            monthly_limit: self.monthly_limit,
            currency: self.currency,
        }
    }
}

impl Exchange {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        daily_limit: f64,
        monthly_limit: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            daily_limit,
            monthly_limit,
            currency: currency.into(),
        }
    }

    /// Whether `amount` exceeds this exchange's daily cap (strictly greater).
    pub fn exceeds_daily_limit(&self, amount: f64) -> bool {
        amount > self.daily_limit
    }
}
