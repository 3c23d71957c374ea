use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::asset::Asset;
use super::exchange::Exchange;
use super::settings::Settings;
use super::strategy::StrategyChain;

/// The whole application state. This is what gets saved to and loaded
/// from a `.json` session file.
///
/// Contains: the asset and exchange catalogs, global settings (tax, initial
/// capital), and every strategy chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "globalAssets")]
    pub assets: Vec<Asset>,

    #[serde(rename = "globalExchanges")]
    pub exchanges: Vec<Exchange>,

    /// Flattened into the document root as `globalTax` / `initialCapital`
    #[serde(flatten)]
    pub settings: Settings,

    pub strategies: Vec<StrategyChain>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            assets: vec![
                Asset::with_id("1", "USDT"),
                Asset::with_id("2", "BTC"),
                Asset::with_id("3", "RUB"),
                Asset::with_id("4", "AZN"),
                Asset::with_id("5", "USD"),
            ],
            exchanges: vec![
                Exchange::new("e1", "Binance", 1_000_000.0, 5_000_000.0, "RUB"),
                Exchange::new("e2", "Bybit", 500_000.0, 2_000_000.0, "RUB"),
                Exchange::new("e3", "Sberbank", 100_000.0, 500_000.0, "RUB"),
            ],
            settings: Settings::default(),
            strategies: vec![
                StrategyChain {
                    id: "s1".into(),
                    name: "Alpha Chain".into(),
                    steps: Vec::new(),
                },
                StrategyChain {
                    id: "s2".into(),
                    name: "Beta Chain".into(),
                    steps: Vec::new(),
                },
            ],
        }
    }
}

impl Session {
    /// An empty session: no catalogs, no strategies, default settings.
    pub fn empty() -> Self {
        Self {
            assets: Vec::new(),
            exchanges: Vec::new(),
            settings: Settings::default(),
            strategies: Vec::new(),
        }
    }

    /// Build the id → exchange lookup the calculator consumes.
    pub fn exchange_map(&self) -> HashMap<String, Exchange> {
        self.exchanges
            .iter()
            .map(|e| (e.id.clone(), e.clone()))
            .collect()
    }

    pub fn strategy(&self, id: &str) -> Option<&StrategyChain> {
        self.strategies.iter().find(|s| s.id == id)
    }

    pub(crate) fn strategy_mut(&mut self, id: &str) -> Option<&mut StrategyChain> {
        self.strategies.iter_mut().find(|s| s.id == id)
    }
}
