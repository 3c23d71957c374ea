use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::step::ChainStep;

/// A named, ordered sequence of steps. The output of step *i* feeds step *i+1*.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyChain {
    pub id: String,
    pub name: String,
    pub steps: Vec<ChainStep>,
}

impl StrategyChain {
    /// Create an empty strategy with a fresh UUID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn with_steps(name: impl Into<String>, steps: Vec<ChainStep>) -> Self {
        Self {
            steps,
            ..Self::new(name)
        }
    }

    /// Sum of all holding delays, in days.
    pub fn total_hold_days(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.hold_days)).sum()
    }
}
