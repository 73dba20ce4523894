// ==========================================
// VOIS 供需智能服务 - 供应链优化编排器
// ==========================================
// 用途: 协调分配主流程
// 作物解析 -> 线路过滤 -> 适宜度连接 + 优先级评分 -> 贪心分配
// ==========================================

use crate::config::CropMapping;
use crate::domain::{AllocationRequest, AllocationResult};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::{CropResolver, PriorityScorer, SupplyAllocator};
use crate::repository::ReferenceData;
use tracing::{info, instrument, warn};

// ==========================================
// SupplyChainOptimizer - 供应链优化编排器
// ==========================================
pub struct SupplyChainOptimizer {
    resolver: CropResolver,
    scorer: PriorityScorer,
    allocator: SupplyAllocator,
}

impl SupplyChainOptimizer {
    pub fn new(mapping: CropMapping) -> Self {
        Self {
            resolver: CropResolver::new(mapping),
            scorer: PriorityScorer::new(),
            allocator: SupplyAllocator::new(),
        }
    }

    /// 执行一次供应分配
    ///
    /// # 参数
    /// - request: 分配请求 (目的城市, 产品, 需求量)
    /// - data: 参考数据 (线路表 + 适宜度表)
    ///
    /// # 返回
    /// - Ok(AllocationResult): 优先级降序的分配列表
    /// - Err(NoRouteFound): (目的城市, 作物) 无候选线路
    #[instrument(skip(self, data), fields(
        destination_city = %request.destination_city,
        product = %request.product,
        required_quantity = request.required_quantity
    ))]
    pub fn optimize(
        &self,
        request: &AllocationRequest,
        data: &ReferenceData,
    ) -> EngineResult<AllocationResult> {
        // ===== 1. 作物解析 =====
        let crop = self.resolver.resolve(&request.product);

        // ===== 2. 线路过滤 =====
        let routes = data.routes.find_routes(&request.destination_city, &crop);
        if routes.is_empty() {
            warn!(crop = %crop, "无可用供应线路");
            return Err(EngineError::NoRouteFound {
                destination_city: request.destination_city.clone(),
                crop,
            });
        }

        // ===== 3. 评分排序 =====
        let ranked = self
            .scorer
            .score_and_rank(&routes, &crop, &data.suitability);

        // ===== 4. 贪心分配 =====
        let result = self.allocator.allocate(&ranked, request.required_quantity);

        info!(
            crop = %crop,
            candidates = ranked.len(),
            sources_used = result.optimal_sources.len(),
            total_cost = result.total_cost,
            remaining = result.remaining_quantity,
            "供应分配完成"
        );
        Ok(result)
    }
}

impl Default for SupplyChainOptimizer {
    fn default() -> Self {
        Self::new(CropMapping::default())
    }
}
