use std::cmp::Ordering;

use crate::models::comparison::{ChartRow, Comparison, Metric, MetricLeaders};
use crate::models::result::ChainResult;

/// Ranks evaluated strategies against each other.
///
/// All orderings are stable: on a tie the strategy listed first wins.
/// A NaN metric always ranks last.
pub struct RankingService;

impl RankingService {
    pub fn new() -> Self {
        Self
    }

    /// Results ordered best-first by `metric`.
    pub fn rank<'a>(&self, results: &'a [ChainResult], metric: Metric) -> Vec<&'a ChainResult> {
        let mut ranked: Vec<&ChainResult> = results.iter().collect();
        ranked.sort_by(|a, b| {
            Self::best_first(metric.value(a), metric.value(b), metric.higher_is_better())
        });
        ranked
    }

    /// Best and runner-up for one metric. `None` when there are no results.
    pub fn leaders<'a>(
        &self,
        results: &'a [ChainResult],
        metric: Metric,
    ) -> Option<MetricLeaders<'a>> {
        let ranked = self.rank(results, metric);
        let best = *ranked.first()?;
        Some(MetricLeaders {
            metric,
            best,
            runner_up: ranked.get(1).copied(),
        })
    }

    /// Full dashboard comparison. `None` when there are no results.
    pub fn compare<'a>(&self, results: &'a [ChainResult]) -> Option<Comparison<'a>> {
        let roi = self.leaders(results, Metric::Roi)?;
        let net_profit = self.leaders(results, Metric::NetProfit)?;
        let total_hold = self.leaders(results, Metric::TotalHold)?;
        let efficiency = self.leaders(results, Metric::Efficiency)?;

        Some(Comparison {
            best_roi: roi.best,
            roi,
            net_profit,
            total_hold,
            efficiency,
            has_any_limit_warning: self.has_any_limit_warning(results),
        })
    }

    pub fn has_any_limit_warning(&self, results: &[ChainResult]) -> bool {
        results.iter().any(ChainResult::has_limit_warning)
    }

    /// Chart data: one row per strategy in input order.
    ///
    /// Exactly one row is highlighted: the same strategy as
    /// `Comparison::best_roi`, so on a tie only the first one listed.
    pub fn chart_rows(&self, results: &[ChainResult]) -> Vec<ChartRow> {
        let best_roi = self.leaders(results, Metric::Roi).map(|l| l.best);

        results
            .iter()
            .map(|r| ChartRow {
                name: r.strategy_name.clone(),
                roi: (r.roi * 100.0).round() / 100.0,
                // half-up, matching the dashboard's rounding of negative values
                profit: (r.net_profit_after_tax + 0.5).floor(),
                highlighted: best_roi.is_some_and(|best| std::ptr::eq(best, r)),
            })
            .collect()
    }

    /// Best-first ordering with NaN after every number. Total, so sorting
    /// never sees an inconsistent comparator.
    fn best_first(a: f64, b: f64, higher_is_better: bool) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if higher_is_better => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

impl Default for RankingService {
    fn default() -> Self {
        Self::new()
    }
}
