// ==========================================
// VOIS 供需智能服务 - 引擎层
// ==========================================
// 职责: 实现分配与评分规则, 不做 I/O
// 红线: Engine 只读参考数据, 不持有跨请求状态
// ==========================================

pub mod allocator;
pub mod crop_resolver;
pub mod error;
pub mod intelligence;
pub mod orchestrator;
pub mod priority;

// 重导出核心引擎
pub use allocator::SupplyAllocator;
pub use crop_resolver::CropResolver;
pub use error::{EngineError, EngineResult};
pub use intelligence::IntelligenceEngine;
pub use orchestrator::SupplyChainOptimizer;
pub use priority::{PriorityScorer, ScoredRoute};
