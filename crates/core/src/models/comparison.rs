use serde::Serialize;

use super::result::ChainResult;

/// A metric strategies are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Roi,
    NetProfit,
    TotalHold,
    Efficiency,
}

impl Metric {
    /// `false` only for hold time, where shorter is better.
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, Metric::TotalHold)
    }

    pub fn value(&self, result: &ChainResult) -> f64 {
        match self {
            Metric::Roi => result.roi,
            Metric::NetProfit => result.net_profit_after_tax,
            Metric::TotalHold => result.total_hold as f64,
            Metric::Efficiency => result.efficiency,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Roi => "Top ROI",
            Metric::NetProfit => "Net Profit",
            Metric::TotalHold => "Fastest",
            Metric::Efficiency => "Efficiency",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Best and second-best strategy for one metric.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricLeaders<'a> {
    pub metric: Metric,
    pub best: &'a ChainResult,
    pub runner_up: Option<&'a ChainResult>,
}

/// Cross-strategy comparison consumed by the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison<'a> {
    /// Highest-ROI strategy, highlighted in the chart
    pub best_roi: &'a ChainResult,

    pub roi: MetricLeaders<'a>,
    pub net_profit: MetricLeaders<'a>,
    pub total_hold: MetricLeaders<'a>,
    pub efficiency: MetricLeaders<'a>,

    /// Any step of any strategy exceeds its daily limit
    pub has_any_limit_warning: bool,
}

impl<'a> Comparison<'a> {
    pub fn leaders(&self, metric: Metric) -> &MetricLeaders<'a> {
        match metric {
            Metric::Roi => &self.roi,
            Metric::NetProfit => &self.net_profit,
            Metric::TotalHold => &self.total_hold,
            Metric::Efficiency => &self.efficiency,
        }
    }
}

/// One bar of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub name: String,

    /// ROI rounded to 2 decimals
    pub roi: f64,

    /// After-tax profit rounded to a whole number
    pub profit: f64,

    /// Row belongs to the best-ROI strategy
    pub highlighted: bool,
}
