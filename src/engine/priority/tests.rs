use super::{compute_priority, cost_term, PriorityScorer, DEFAULT_SUITABILITY};
use crate::domain::{Route, SuitabilityRecord};
use crate::repository::SuitabilityTable;
use approx::assert_relative_eq;

// ==========================================
// 测试辅助函数
// ==========================================

fn route(source: &str, cost: f64, qty: f64) -> Route {
    Route::new(source, "Hyderabad", "Oats", cost, qty)
}

fn suitability(pairs: &[(&str, f64)]) -> SuitabilityTable {
    SuitabilityTable::new(
        pairs
            .iter()
            .map(|(d, s)| SuitabilityRecord::new(d, "Oats", *s))
            .collect(),
    )
}

// ==========================================
// 公式
// ==========================================

#[test]
fn test_cost_term_zero_max() {
    assert_eq!(cost_term(0.0, 0.0), 1.0);
    assert_eq!(cost_term(50.0, 100.0), 0.5);
    assert_eq!(cost_term(100.0, 100.0), 0.0);
}

#[test]
fn test_compute_priority() {
    // 0.8*0.6 + (1-100/200)*0.4 = 0.68
    assert_relative_eq!(compute_priority(0.8, 100.0, 200.0), 0.68, epsilon = 1e-12);
    // 最贵线路只剩适宜度项
    assert_relative_eq!(compute_priority(0.9, 200.0, 200.0), 0.54, epsilon = 1e-12);
}

// ==========================================
// 评分 + 排序
// ==========================================

#[test]
fn test_rank_two_routes() {
    let a = route("A", 100.0, 60.0);
    let b = route("B", 200.0, 100.0);
    let table = suitability(&[("A", 0.8), ("B", 0.9)]);

    let ranked = PriorityScorer::new().score_and_rank(&[&a, &b], "Oats", &table);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].route.source_district, "A");
    assert_relative_eq!(ranked[0].priority_score, 0.68, epsilon = 1e-12);
    assert_eq!(ranked[1].route.source_district, "B");
    assert_relative_eq!(ranked[1].priority_score, 0.54, epsilon = 1e-12);
}

#[test]
fn test_missing_suitability_defaults() {
    let a = route("Unknown", 100.0, 10.0);
    let table = suitability(&[("Other", 0.9)]);

    let ranked = PriorityScorer::new().score_and_rank(&[&a], "Oats", &table);

    assert_eq!(ranked[0].suitability_score, DEFAULT_SUITABILITY);
    // 单线路: cost == max, 成本项为 0
    assert_relative_eq!(ranked[0].priority_score, 0.3, epsilon = 1e-12);
}

#[test]
fn test_ties_keep_table_order() {
    let a = route("First", 100.0, 10.0);
    let b = route("Second", 100.0, 10.0);
    let c = route("Third", 100.0, 10.0);
    let table = SuitabilityTable::default();

    let ranked = PriorityScorer::new().score_and_rank(&[&a, &b, &c], "Oats", &table);
    let order: Vec<&str> = ranked
        .iter()
        .map(|s| s.route.source_district.as_str())
        .collect();

    assert_eq!(order, vec!["First", "Second", "Third"]);
}

#[test]
fn test_zero_cost_set() {
    let a = route("A", 0.0, 10.0);
    let b = route("B", 0.0, 10.0);
    let table = suitability(&[("A", 0.2), ("B", 0.6)]);

    let ranked = PriorityScorer::new().score_and_rank(&[&a, &b], "Oats", &table);

    assert_eq!(ranked[0].route.source_district, "B");
    assert_relative_eq!(ranked[0].priority_score, 0.6 * 0.6 + 0.4, epsilon = 1e-12);
    assert_relative_eq!(ranked[1].priority_score, 0.2 * 0.6 + 0.4, epsilon = 1e-12);
}

#[test]
fn test_join_uses_resolved_crop() {
    let a = route("A", 100.0, 10.0);
    let table = SuitabilityTable::new(vec![SuitabilityRecord::new("A", "Soy", 0.95)]);

    // 作物不同, 不命中
    let ranked = PriorityScorer::new().score_and_rank(&[&a], "Oats", &table);
    assert_eq!(ranked[0].suitability_score, DEFAULT_SUITABILITY);
}
