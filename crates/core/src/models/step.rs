use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a single step in a chain does with the amount it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepAction {
    /// Acquire the destination asset at `rate` source units per destination unit
    Buy,
    /// Dispose of the source asset at `rate` destination units per source unit
    Sell,
    /// Move funds between venues. `rate` is ignored.
    Transfer,
    /// Take funds off a venue. `rate` is ignored.
    Withdraw,
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepAction::Buy => write!(f, "Buy"),
            StepAction::Sell => write!(f, "Sell"),
            StepAction::Transfer => write!(f, "Transfer"),
            StepAction::Withdraw => write!(f, "Withdraw"),
        }
    }
}

/// Wire tag for [`FeeSpec`] (`"PERCENT"` / `"FIXED"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    Percent,
    Fixed,
}

/// How a step's fee is charged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeeSpec {
    /// Percentage of the step's input amount (0.1 means 0.1%)
    Percent(f64),
    /// Flat amount in the step's input unit, independent of size
    Fixed(f64),
}

impl FeeSpec {
    /// Fee charged on `input`. A fixed fee may exceed the input.
    pub fn amount(&self, input: f64) -> f64 {
        match *self {
            FeeSpec::Percent(pct) => input * pct / 100.0,
            FeeSpec::Fixed(value) => value,
        }
    }

    pub fn fee_type(&self) -> FeeType {
        match self {
            FeeSpec::Percent(_) => FeeType::Percent,
            FeeSpec::Fixed(_) => FeeType::Fixed,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            FeeSpec::Percent(v) | FeeSpec::Fixed(v) => v,
        }
    }

    fn from_parts(fee_type: FeeType, value: f64) -> Self {
        match fee_type {
            FeeType::Percent => FeeSpec::Percent(value),
            FeeType::Fixed => FeeSpec::Fixed(value),
        }
    }
}

/// One atomic operation in a strategy chain.
///
/// Serialized in the flat session layout (`feeType` + `feeValue` side by side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StepRecord", into = "StepRecord")]
pub struct ChainStep {
    /// Unique identifier
    pub id: String,

    /// Exchange this step runs on. May not resolve to a known exchange.
    pub exchange_id: String,

    pub action: StepAction,

    /// Source asset symbol
    pub from_asset: String,

    /// Destination asset symbol
    pub to_asset: String,

    /// Conversion rate. Only used by `Buy` and `Sell`.
    pub rate: f64,

    pub fee: FeeSpec,

    /// Holding delay in whole days before the output is available
    pub hold_days: u32,
}

impl ChainStep {
    /// Build a step with a fresh UUID.
    pub fn new(
        exchange_id: impl Into<String>,
        action: StepAction,
        from_asset: impl Into<String>,
        to_asset: impl Into<String>,
        rate: f64,
        fee: FeeSpec,
        hold_days: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            exchange_id: exchange_id.into(),
            action,
            from_asset: from_asset.into(),
            to_asset: to_asset.into(),
            rate,
            fee,
            hold_days,
        }
    }
}

/// Flat JSON shape of a step as it appears in saved sessions.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepRecord {
    id: String,
    exchange_id: String,
    action: StepAction,
    from_asset: String,
    to_asset: String,
    rate: f64,
    fee_type: FeeType,
    fee_value: f64,
    hold_days: u32,
}

impl From<StepRecord> for ChainStep {
    fn from(r: StepRecord) -> Self {
        Self {
            id: r.id,
            exchange_id: r.exchange_id,
            action: r.action,
            from_asset: r.from_asset,
            to_asset: r.to_asset,
            rate: r.rate,
            fee: FeeSpec::from_parts(r.fee_type, r.fee_value),
            hold_days: r.hold_days,
        }
    }
}

impl From<ChainStep> for StepRecord {
    fn from(s: ChainStep) -> Self {
        Self {
            id: s.id,
            exchange_id: s.exchange_id,
            action: s.action,
            from_asset: s.from_asset,
            to_asset: s.to_asset,
            rate: s.rate,
            fee_type: s.fee.fee_type(),
            fee_value: s.fee.value(),
            hold_days: s.hold_days,
        }
    }
}
