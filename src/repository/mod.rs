// ==========================================
// VOIS 供需智能服务 - 参考数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 进程内只读参考表 (物流线路 / 区县适宜度)
// 约束: 加载后不可变, 查询保持原表顺序
// ==========================================

pub mod reference_data;
pub mod route_repo;
pub mod suitability_repo;

// 重导出核心仓储
pub use reference_data::ReferenceData;
pub use route_repo::RouteTable;
pub use suitability_repo::SuitabilityTable;
