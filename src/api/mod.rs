// ==========================================
// VOIS 供需智能服务 - API 层
// ==========================================
// 职责: 提供与传输无关的业务 API, 供 HTTP 路由调用
// ==========================================

pub mod dto;
pub mod error;
pub mod supply_chain_api;
pub mod validator;

// 重导出核心类型
pub use dto::{
    CombinedIntelligenceRequest, CombinedIntelligenceResponse, ForecastDemandRequest,
    OptimizeSupplyChainRequest, OptimizeSupplyChainResponse, PredictSuitabilityRequest,
    SourceAllocationResponse,
};
pub use error::{ApiError, ApiResult};
pub use supply_chain_api::SupplyChainApi;
