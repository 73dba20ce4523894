// ==========================================
// VOIS 供需智能服务 - 供应分配领域模型
// ==========================================
// 生命周期: 单次请求内有效, 不跨请求持久化
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// AllocationRequest - 分配请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub destination_city: String, // 目的城市
    pub product: String,          // 消费端产品名 (如 "Oat Milk")
    pub required_quantity: f64,   // 需求量 (> 0)
}

impl AllocationRequest {
    pub fn new(destination_city: &str, product: &str, required_quantity: f64) -> Self {
        Self {
            destination_city: destination_city.to_string(),
            product: product.to_string(),
            required_quantity,
        }
    }
}

// ==========================================
// SourceAllocation - 单个产地的分配结果
// ==========================================
// 列表顺序即优先级降序, 与地理/字母序无关
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAllocation {
    pub source_district: String,
    pub allocated_quantity: f64,     // 本产地分得数量
    pub allocation_percentage: f64,  // 占原始需求量百分比 [0, 100]
    pub transport_cost: f64,         // 线路运输成本 (每 1000 单位)
    pub total_cost: f64,             // transport_cost * allocated_quantity / 1000
    pub suitability_score: f64,      // 参与评分的适宜度 (缺失时为 0.5)
    pub priority_score: f64,         // 综合优先级
}

// ==========================================
// AllocationResult - 分配方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub optimal_sources: Vec<SourceAllocation>,
    pub total_cost: f64,
    pub waste_reduction_percentage: f64, // [0, 50], 启发式占位指标

    /// 未满足的需求量; 供给不足时静默返回, 不计入对外响应
    #[serde(skip)]
    pub remaining_quantity: f64,
}

impl AllocationResult {
    /// 已分配总量
    pub fn allocated_quantity(&self) -> f64 {
        self.optimal_sources
            .iter()
            .map(|s| s.allocated_quantity)
            .sum()
    }

    /// 需求是否被完全满足
    pub fn is_fully_satisfied(&self) -> bool {
        self.remaining_quantity <= 0.0
    }
}
