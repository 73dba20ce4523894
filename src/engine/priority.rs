// ==========================================
// VOIS 供需智能服务 - 产地优先级评分引擎
// ==========================================
// 职责: 候选线路 + 适宜度左连接 -> 优先级评分 -> 稳定降序排序
// 输入: 已按 (目的城市, 作物) 过滤的线路 (原表顺序)
// 输出: ScoredRoute 列表 (优先级从高到低, 同分保持原表顺序)
// ==========================================
// 公式: priority = suitability * 0.6 + (1 - cost / max_cost) * 0.4
// max_cost 按本次请求的候选集重新计算
// ==========================================

mod scoring;

#[cfg(test)]
mod tests;

pub use scoring::{
    compute_priority, cost_term, COST_WEIGHT, DEFAULT_SUITABILITY, SUITABILITY_WEIGHT,
};

use crate::domain::Route;
use crate::repository::SuitabilityTable;
use std::cmp::Ordering;
use tracing::debug;

// ==========================================
// ScoredRoute - 评分后的候选线路
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRoute<'a> {
    pub route: &'a Route,
    pub suitability_score: f64, // 缺失时为 DEFAULT_SUITABILITY
    pub priority_score: f64,
}

// ==========================================
// PriorityScorer - 优先级评分引擎
// ==========================================
pub struct PriorityScorer {
    // 无状态引擎, 不需要注入依赖
}

impl PriorityScorer {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 适宜度左连接 + 评分 + 稳定降序排序
    ///
    /// # 参数
    /// - `routes`: 候选线路 (原表顺序)
    /// - `crop`: 解析后的作物名 (连接键之一)
    /// - `suitability`: 适宜度表
    pub fn score_and_rank<'a>(
        &self,
        routes: &[&'a Route],
        crop: &str,
        suitability: &SuitabilityTable,
    ) -> Vec<ScoredRoute<'a>> {
        let max_cost = routes
            .iter()
            .map(|r| r.transport_cost)
            .fold(0.0_f64, f64::max);

        let mut scored: Vec<ScoredRoute<'a>> = routes
            .iter()
            .map(|&route| {
                let suitability_score = self.join_suitability(route, crop, suitability);
                ScoredRoute {
                    route,
                    suitability_score,
                    priority_score: compute_priority(
                        suitability_score,
                        route.transport_cost,
                        max_cost,
                    ),
                }
            })
            .collect();

        // sort_by 为稳定排序, 同分保持原表顺序
        scored.sort_by(|a, b| self.compare(a, b));

        debug!(
            crop = crop,
            candidates = scored.len(),
            max_cost = max_cost,
            "候选产地评分完成"
        );
        scored
    }

    /// 左连接 (district, crop); 缺失回退 DEFAULT_SUITABILITY
    fn join_suitability(&self, route: &Route, crop: &str, suitability: &SuitabilityTable) -> f64 {
        suitability
            .score(&route.source_district, crop)
            .unwrap_or(DEFAULT_SUITABILITY)
    }

    /// 优先级降序
    fn compare(&self, a: &ScoredRoute<'_>, b: &ScoredRoute<'_>) -> Ordering {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new()
    }
}
