use serde::{Deserialize, Serialize};

/// Starting capital every strategy is evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialCapital {
    pub amount: f64,

    /// Symbol of the asset the capital is held in (e.g., "RUB")
    pub asset: String,
}

/// Global parameters shared by all strategies, stored inside the session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Tax percentage applied to positive profit. Not clamped to [0, 100].
    pub global_tax: f64,

    pub initial_capital: InitialCapital,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            global_tax: 13.0,
            initial_capital: InitialCapital {
                amount: 100_000.0,
                asset: "RUB".to_string(),
            },
        }
    }
}
