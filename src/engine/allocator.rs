// ==========================================
// VOIS 供需智能服务 - 供给量约束的贪心分配引擎
// ==========================================
// 红线: 供给上限优先于需求量, 不足部分静默留存
// ==========================================
// 职责: 按优先级顺序逐个产地取量, 直至需求满足或候选耗尽
// 输入: 已排序的 ScoredRoute 列表 + 需求量
// 输出: AllocationResult (含 remaining_quantity)
// ==========================================

use crate::domain::{AllocationResult, SourceAllocation};
use crate::engine::priority::ScoredRoute;
use tracing::{debug, instrument};

/// 每使用一个产地计入的减损百分比
pub const WASTE_REDUCTION_PER_SOURCE: f64 = 10.0;
/// 减损百分比上限
pub const WASTE_REDUCTION_CAP: f64 = 50.0;

// ==========================================
// SupplyAllocator - 贪心分配引擎
// ==========================================
pub struct SupplyAllocator {
    // 无状态引擎, 不需要注入依赖
}

impl SupplyAllocator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 贪心分配
    ///
    /// 规则:
    /// 1) remaining = required, 按 ranked 顺序遍历
    /// 2) remaining <= 0 时停止
    /// 3) available = min(supply_quantity, remaining)
    /// 4) cost = transport_cost * available / 1000
    ///
    /// 零供给线路会产生 0 分配的条目, 仍计入已用产地数
    #[instrument(skip(self, ranked), fields(candidates = ranked.len()))]
    pub fn allocate(&self, ranked: &[ScoredRoute<'_>], required_quantity: f64) -> AllocationResult {
        let mut remaining = required_quantity;
        let mut total_cost = 0.0;
        let mut optimal_sources = Vec::new();

        for scored in ranked {
            if remaining <= 0.0 {
                break;
            }

            let route = scored.route;
            let available = route.supply_quantity.min(remaining);
            let cost = route.transport_cost * (available / 1000.0);

            optimal_sources.push(SourceAllocation {
                source_district: route.source_district.clone(),
                allocated_quantity: available,
                allocation_percentage: available / required_quantity * 100.0,
                transport_cost: route.transport_cost,
                total_cost: cost,
                suitability_score: scored.suitability_score,
                priority_score: scored.priority_score,
            });

            remaining -= available;
            total_cost += cost;
        }

        let waste_reduction_percentage = self.waste_reduction(optimal_sources.len());

        debug!(
            sources_used = optimal_sources.len(),
            total_cost = total_cost,
            remaining = remaining,
            "贪心分配完成"
        );

        AllocationResult {
            optimal_sources,
            total_cost,
            waste_reduction_percentage,
            remaining_quantity: remaining.max(0.0),
        }
    }

    /// 减损启发式: min(50, 已用产地数 * 10)
    pub fn waste_reduction(&self, sources_used: usize) -> f64 {
        (sources_used as f64 * WASTE_REDUCTION_PER_SOURCE).min(WASTE_REDUCTION_CAP)
    }
}

impl Default for SupplyAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;
    use approx::assert_relative_eq;

    fn scored(route: &Route, priority: f64) -> ScoredRoute<'_> {
        ScoredRoute {
            route,
            suitability_score: 0.5,
            priority_score: priority,
        }
    }

    #[test]
    fn test_allocate_stops_when_satisfied() {
        let a = Route::new("A", "Delhi", "Soy", 100.0, 60.0);
        let b = Route::new("B", "Delhi", "Soy", 200.0, 100.0);
        let c = Route::new("C", "Delhi", "Soy", 300.0, 100.0);
        let ranked = vec![scored(&a, 0.9), scored(&b, 0.8), scored(&c, 0.7)];

        let result = SupplyAllocator::new().allocate(&ranked, 100.0);

        assert_eq!(result.optimal_sources.len(), 2);
        assert_eq!(result.optimal_sources[0].allocated_quantity, 60.0);
        assert_eq!(result.optimal_sources[1].allocated_quantity, 40.0);
        assert_relative_eq!(result.total_cost, 6.0 + 8.0, epsilon = 1e-9);
        assert_eq!(result.waste_reduction_percentage, 20.0);
        assert!(result.is_fully_satisfied());
    }

    #[test]
    fn test_allocate_under_supply_is_silent() {
        let a = Route::new("A", "Delhi", "Soy", 100.0, 30.0);
        let ranked = vec![scored(&a, 0.9)];

        let result = SupplyAllocator::new().allocate(&ranked, 100.0);

        assert_eq!(result.optimal_sources.len(), 1);
        assert_relative_eq!(result.optimal_sources[0].allocation_percentage, 30.0);
        assert_relative_eq!(result.remaining_quantity, 70.0);
        assert!(!result.is_fully_satisfied());
    }

    #[test]
    fn test_zero_supply_route_still_counts() {
        let a = Route::new("A", "Delhi", "Soy", 100.0, 0.0);
        let b = Route::new("B", "Delhi", "Soy", 100.0, 50.0);
        let ranked = vec![scored(&a, 0.9), scored(&b, 0.8)];

        let result = SupplyAllocator::new().allocate(&ranked, 50.0);

        assert_eq!(result.optimal_sources.len(), 2);
        assert_eq!(result.optimal_sources[0].allocated_quantity, 0.0);
        assert_eq!(result.waste_reduction_percentage, 20.0);
    }

    #[test]
    fn test_waste_reduction_cap() {
        let allocator = SupplyAllocator::new();
        assert_eq!(allocator.waste_reduction(0), 0.0);
        assert_eq!(allocator.waste_reduction(3), 30.0);
        assert_eq!(allocator.waste_reduction(5), 50.0);
        assert_eq!(allocator.waste_reduction(9), 50.0);
    }
}
