// ==========================================
// VOIS 供需智能服务 - 引擎错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 目的城市 + 作物 无可用线路
    #[error("No supply routes found")]
    NoRouteFound {
        destination_city: String,
        crop: String,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
