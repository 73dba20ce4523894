// ==========================================
// VOIS 供需智能服务 - 核心库
// ==========================================
// 定位: 植物基供需决策支持 (供应链分配 + 需求/适宜度智能)
// 技术栈: Rust + axum + tokio
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 进程内只读参考表
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 预测器层 - 模型能力抽象
pub mod predictor;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AllocationRequest, AllocationResult, CombinedIntelligence, DemandFeatures, DemandForecast,
    ProductionRecommendation, Route, SourceAllocation, SuitabilityAnalysis, SuitabilityFeatures,
    SuitabilityRecord,
};

// 引擎
pub use engine::{
    CropResolver, EngineError, IntelligenceEngine, PriorityScorer, SupplyAllocator,
    SupplyChainOptimizer,
};

// 预测器
pub use predictor::{DemandPredictor, Predictor, PredictorError, SuitabilityPredictor};

// API
pub use api::{ApiError, SupplyChainApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "VOIS 植物基供需智能服务";
