// ==========================================
// VOIS 供需智能服务 - 领域模型层
// ==========================================
// 职责: 定义参考数据实体、分配请求/结果、智能报告类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod allocation;
pub mod intelligence;
pub mod precision;
pub mod route;

// 重导出核心类型
pub use allocation::{AllocationRequest, AllocationResult, SourceAllocation};
pub use intelligence::{
    CombinedIntelligence, DemandFeatures, DemandForecast, ProductionRecommendation,
    SuitabilityAnalysis, SuitabilityBand, SuitabilityFeatures,
};
pub use precision::round_to;
pub use route::{Route, SuitabilityRecord};
