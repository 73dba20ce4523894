// ==========================================
// VOIS 供需智能服务 - 预测器层
// ==========================================
// 职责: 模型能力抽象 (encode + predict), 与具体模型库解耦
// 模型: 启动时从 JSON 制品加载一次, 之后为无状态只读函数
// ==========================================

pub mod artifact;
pub mod demand;
pub mod error;
pub mod label_encoder;
pub mod model;
pub mod suitability;

// 重导出
pub use artifact::ModelArtifact;
pub use demand::DemandPredictor;
pub use error::{PredictorError, PredictorResult};
pub use label_encoder::LabelEncoder;
pub use model::{RegressionModel, RegressionTree, TreeNode};
pub use suitability::SuitabilityPredictor;

use crate::domain::{DemandFeatures, SuitabilityFeatures};
use std::sync::Arc;

// ==========================================
// Predictor Trait
// ==========================================
// 用途: 引擎与 API 只依赖此接口, 不依赖具体模型对象形态
// 实现者: SuitabilityPredictor / DemandPredictor
pub trait Predictor: Send + Sync {
    /// 原始输入 (含类别型字段)
    type Input;

    /// 原始输入 -> 数值特征向量 (类别字段经标签编码)
    fn encode(&self, raw: &Self::Input) -> PredictorResult<Vec<f64>>;

    /// 特征向量 -> 原始模型输出 (未截断)
    fn predict(&self, features: &[f64]) -> PredictorResult<f64>;

    /// encode + predict
    fn score(&self, raw: &Self::Input) -> PredictorResult<f64> {
        let features = self.encode(raw)?;
        self.predict(&features)
    }
}

/// 适宜度预测器句柄
pub type SharedSuitabilityPredictor = Arc<dyn Predictor<Input = SuitabilityFeatures>>;

/// 需求预测器句柄
pub type SharedDemandPredictor = Arc<dyn Predictor<Input = DemandFeatures>>;
