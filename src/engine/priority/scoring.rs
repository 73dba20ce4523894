/// 适宜度权重
pub const SUITABILITY_WEIGHT: f64 = 0.6;
/// 成本权重
pub const COST_WEIGHT: f64 = 0.4;
/// 适宜度表缺失时的中性分
pub const DEFAULT_SUITABILITY: f64 = 0.5;

/// 成本项: 1 - cost / max_cost
///
/// max_cost 非正 (候选集全部零成本) 时, 所有线路视为同等最便宜, 返回 1.0
pub fn cost_term(transport_cost: f64, max_cost: f64) -> f64 {
    if max_cost > 0.0 {
        1.0 - transport_cost / max_cost
    } else {
        1.0
    }
}

pub fn compute_priority(suitability: f64, transport_cost: f64, max_cost: f64) -> f64 {
    suitability * SUITABILITY_WEIGHT + cost_term(transport_cost, max_cost) * COST_WEIGHT
}
