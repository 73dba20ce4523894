// ==========================================
// VOIS 供需智能服务 - 预测器错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    // ===== 制品加载 =====
    #[error("failed to load model artifact {path}: {message}")]
    ArtifactLoad { path: String, message: String },

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    // ===== 编码 =====
    #[error("{encoder} contains previously unseen label: '{value}'")]
    UnseenCategory { encoder: String, value: String },

    // ===== 预测 =====
    #[error("feature count mismatch: expected {expected}, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("feature {index} is not a finite number")]
    NonFiniteFeature { index: usize },
}

/// Result 类型别名
pub type PredictorResult<T> = Result<T, PredictorError>;
