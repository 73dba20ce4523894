// ==========================================
// VOIS 供需智能服务 - API 层错误类型
// ==========================================
// 职责: 定义对外错误分类, 将引擎/预测器错误转换为对外消息
// 约定: Display 文本即响应体 {"error": <message>}
// ==========================================

use crate::engine::EngineError;
use crate::predictor::PredictorError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误 (400)
    // ==========================================
    #[error("{0}")]
    ValidationError(String),

    // ==========================================
    // 资源错误 (404)
    // ==========================================
    #[error("{0}")]
    NotFound(String),

    // ==========================================
    // 服务端错误 (500)
    // ==========================================
    /// 模型制品未加载
    #[error("{0} model not loaded")]
    ModelUnavailable(String),

    /// 参考表未加载
    #[error("Data not loaded")]
    DataUnavailable,

    /// 编码/预测失败
    #[error("{0}")]
    PredictorFailure(String),
}

impl ApiError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::ModelUnavailable(_)
            | ApiError::DataUnavailable
            | ApiError::PredictorFailure(_) => 500,
        }
    }

    /// 缺少必填字段
    pub fn missing_field(field: &str) -> Self {
        ApiError::ValidationError(format!("Missing required field: {}", field))
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoRouteFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<PredictorError> for ApiError {
    fn from(err: PredictorError) -> Self {
        ApiError::PredictorFailure(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
