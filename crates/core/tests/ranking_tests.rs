// ═══════════════════════════════════════════════════════════════════
// Ranking Tests — per-metric leaders, stability, limit aggregation,
// chart rows
// ═══════════════════════════════════════════════════════════════════

use arbitrack_core::models::comparison::Metric;
use arbitrack_core::models::result::{CalculatedStep, ChainResult};
use arbitrack_core::models::step::{ChainStep, FeeSpec, StepAction};
use arbitrack_core::services::ranking_service::RankingService;

fn result(id: &str, roi: f64, profit: f64, hold: u64, efficiency: f64) -> ChainResult {
    ChainResult {
        strategy_id: id.to_string(),
        strategy_name: format!("Chain {id}"),
        steps: Vec::new(),
        total_fees: 0.0,
        total_hold: hold,
        final_gross: 0.0,
        net_profit_before_tax: profit,
        net_profit_after_tax: profit,
        roi,
        efficiency,
    }
}

fn with_warning(mut r: ChainResult, warning: bool) -> ChainResult {
    let step = ChainStep::new("e1", StepAction::Transfer, "RUB", "RUB", 1.0, FeeSpec::Fixed(0.0), 0);
    r.steps.push(CalculatedStep {
        step,
        input_amount: 0.0,
        output_amount: 0.0,
        fee_amount: 0.0,
        cumulative_hold: 0,
        limit_warning: warning,
        limit_used: 0.0,
    });
    r
}

fn sample() -> Vec<ChainResult> {
    vec![
        result("a", 5.0, 5_000.0, 3, 1_666.0),
        result("b", 12.0, 12_000.0, 4, 3_000.0),
        result("c", -2.0, -2_000.0, 0, -2_000.0),
        result("d", 8.0, 8_000.0, 1, 8_000.0),
    ]
}

// ═══════════════════════════════════════════════════════════════════
//  Metric
// ═══════════════════════════════════════════════════════════════════

mod metric {
    use super::*;

    #[test]
    fn only_total_hold_prefers_lower() {
        assert!(Metric::Roi.higher_is_better());
        assert!(Metric::NetProfit.higher_is_better());
        assert!(Metric::Efficiency.higher_is_better());
        assert!(!Metric::TotalHold.higher_is_better());
    }

    #[test]
    fn value_reads_matching_field() {
        let r = result("x", 1.0, 2.0, 3, 4.0);
        assert_eq!(Metric::Roi.value(&r), 1.0);
        assert_eq!(Metric::NetProfit.value(&r), 2.0);
        assert_eq!(Metric::TotalHold.value(&r), 3.0);
        assert_eq!(Metric::Efficiency.value(&r), 4.0);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Metric::Roi.to_string(), "Top ROI");
        assert_eq!(Metric::TotalHold.to_string(), "Fastest");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Leaders
// ═══════════════════════════════════════════════════════════════════

mod leaders {
    use super::*;

    #[test]
    fn empty_results_have_no_leaders() {
        assert!(RankingService::new().leaders(&[], Metric::Roi).is_none());
        assert!(RankingService::new().compare(&[]).is_none());
    }

    #[test]
    fn single_result_has_no_runner_up() {
        let results = vec![result("a", 1.0, 1.0, 1, 1.0)];
        let l = RankingService::new().leaders(&results, Metric::Roi).unwrap();
        assert_eq!(l.best.strategy_id, "a");
        assert!(l.runner_up.is_none());
    }

    #[test]
    fn roi_descending() {
        let results = sample();
        let l = RankingService::new().leaders(&results, Metric::Roi).unwrap();
        assert_eq!(l.best.strategy_id, "b");
        assert_eq!(l.runner_up.unwrap().strategy_id, "d");
    }

    #[test]
    fn net_profit_descending() {
        let results = sample();
        let l = RankingService::new().leaders(&results, Metric::NetProfit).unwrap();
        assert_eq!(l.best.strategy_id, "b");
        assert_eq!(l.runner_up.unwrap().strategy_id, "d");
    }

    #[test]
    fn total_hold_ascending() {
        let results = sample();
        let l = RankingService::new().leaders(&results, Metric::TotalHold).unwrap();
        assert_eq!(l.best.strategy_id, "c");
        assert_eq!(l.runner_up.unwrap().strategy_id, "d");
    }

    #[test]
    fn efficiency_descending() {
        let results = sample();
        let l = RankingService::new().leaders(&results, Metric::Efficiency).unwrap();
        assert_eq!(l.best.strategy_id, "d");
        assert_eq!(l.runner_up.unwrap().strategy_id, "b");
    }

    #[test]
    fn rank_does_not_reorder_input() {
        let results = sample();
        let _ = RankingService::new().rank(&results, Metric::Roi);
        let ids: Vec<&str> = results.iter().map(|r| r.strategy_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Stability
// ═══════════════════════════════════════════════════════════════════

mod stability {
    use super::*;

    #[test]
    fn tied_roi_prefers_earlier_strategy() {
        let results = vec![
            result("first", 10.0, 1.0, 1, 1.0),
            result("second", 10.0, 1.0, 1, 1.0),
        ];
        let cmp = RankingService::new().compare(&results).unwrap();
        assert_eq!(cmp.best_roi.strategy_id, "first");
        assert_eq!(cmp.roi.runner_up.unwrap().strategy_id, "second");
    }

    #[test]
    fn tied_hold_prefers_earlier_strategy() {
        let results = vec![
            result("x", 1.0, 1.0, 5, 1.0),
            result("y", 2.0, 2.0, 0, 2.0),
            result("z", 3.0, 3.0, 0, 3.0),
        ];
        let l = RankingService::new().leaders(&results, Metric::TotalHold).unwrap();
        assert_eq!(l.best.strategy_id, "y");
        assert_eq!(l.runner_up.unwrap().strategy_id, "z");
    }

    #[test]
    fn nan_ranks_last() {
        let results = vec![
            result("nan", f64::NAN, 0.0, 0, 0.0),
            result("low", -1.0, 0.0, 0, 0.0),
            result("high", 1.0, 0.0, 0, 0.0),
        ];
        let ranked = RankingService::new().rank(&results, Metric::Roi);
        let ids: Vec<&str> = ranked.iter().map(|r| r.strategy_id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low", "nan"]);
    }

    #[test]
    fn nan_efficiency_ranks_below_negative() {
        let results = vec![
            result("nan", 0.0, 0.0, 0, f64::NAN),
            result("ok", 0.0, 0.0, 0, -5.0),
        ];
        let l = RankingService::new().leaders(&results, Metric::Efficiency).unwrap();
        assert_eq!(l.best.strategy_id, "ok");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Comparison
// ═══════════════════════════════════════════════════════════════════

mod comparison {
    use super::*;

    #[test]
    fn collects_all_metrics() {
        let results = sample();
        let cmp = RankingService::new().compare(&results).unwrap();
        assert_eq!(cmp.best_roi.strategy_id, "b");
        assert_eq!(cmp.leaders(Metric::Roi).best.strategy_id, "b");
        assert_eq!(cmp.leaders(Metric::NetProfit).best.strategy_id, "b");
        assert_eq!(cmp.leaders(Metric::TotalHold).best.strategy_id, "c");
        assert_eq!(cmp.leaders(Metric::Efficiency).best.strategy_id, "d");
        for metric in [Metric::Roi, Metric::NetProfit, Metric::TotalHold, Metric::Efficiency] {
            assert_eq!(cmp.leaders(metric).metric, metric);
        }
    }

    #[test]
    fn no_warnings_anywhere() {
        let results = vec![
            with_warning(result("a", 1.0, 1.0, 0, 1.0), false),
            result("b", 1.0, 1.0, 0, 1.0),
        ];
        let cmp = RankingService::new().compare(&results).unwrap();
        assert!(!cmp.has_any_limit_warning);
    }

    #[test]
    fn any_warning_in_any_strategy() {
        let results = vec![
            with_warning(result("a", 1.0, 1.0, 0, 1.0), false),
            with_warning(with_warning(result("b", 1.0, 1.0, 0, 1.0), false), true),
        ];
        let cmp = RankingService::new().compare(&results).unwrap();
        assert!(cmp.has_any_limit_warning);
        assert!(RankingService::new().has_any_limit_warning(&results));
    }

    #[test]
    fn serializes_for_rendering() {
        let results = sample();
        let cmp = RankingService::new().compare(&results).unwrap();
        let json = serde_json::to_value(&cmp).unwrap();
        assert_eq!(json["bestRoi"]["strategyId"], "b");
        assert_eq!(json["totalHold"]["best"]["strategyId"], "c");
        assert_eq!(json["hasAnyLimitWarning"], false);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart rows
// ═══════════════════════════════════════════════════════════════════

mod chart_rows {
    use super::*;

    #[test]
    fn one_row_per_result_in_input_order() {
        let rows = RankingService::new().chart_rows(&sample());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Chain a", "Chain b", "Chain c", "Chain d"]);
    }

    #[test]
    fn rounds_roi_and_profit() {
        let rows = RankingService::new().chart_rows(&[result("a", 12.3456, 1_234.6, 0, 0.0)]);
        assert!((rows[0].roi - 12.35).abs() < 1e-9);
        assert_eq!(rows[0].profit, 1_235.0);
    }

    #[test]
    fn negative_half_profit_rounds_up() {
        let rows = RankingService::new().chart_rows(&[result("a", 0.0, -2.5, 0, 0.0)]);
        assert_eq!(rows[0].profit, -2.0);
    }

    #[test]
    fn highlights_best_roi_row() {
        let results = vec![
            result("a", 3.0, 0.0, 0, 0.0),
            result("b", 7.0, 0.0, 0, 0.0),
            result("c", 5.0, 0.0, 0, 0.0),
        ];
        let rows = RankingService::new().chart_rows(&results);
        let flags: Vec<bool> = rows.iter().map(|r| r.highlighted).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn tied_roi_highlights_only_the_comparison_winner() {
        let results = vec![
            result("a", 3.0, 0.0, 0, 0.0),
            result("b", 7.0, 0.0, 0, 0.0),
            result("c", 7.0, 0.0, 0, 0.0),
        ];
        let svc = RankingService::new();
        let rows = svc.chart_rows(&results);
        let flags: Vec<bool> = rows.iter().map(|r| r.highlighted).collect();
        assert_eq!(flags, vec![false, true, false]);

        let cmp = svc.compare(&results).unwrap();
        let highlighted = rows.iter().position(|r| r.highlighted).unwrap();
        assert_eq!(results[highlighted].strategy_id, cmp.best_roi.strategy_id);
    }

    #[test]
    fn empty_results_have_no_rows() {
        assert!(RankingService::new().chart_rows(&[]).is_empty());
    }
}
