// ==========================================
// VOIS 供需智能服务 - 植物基需求预测器
// ==========================================
// 特征顺序:
// price, genz_ratio, google_trends_score, region, product, month, quarter
// 输出: 原始消费量预测, 调用方截断到 >= 0
// ==========================================

use crate::domain::DemandFeatures;
use crate::predictor::artifact::ModelArtifact;
use crate::predictor::error::PredictorResult;
use crate::predictor::label_encoder::LabelEncoder;
use crate::predictor::Predictor;
use std::path::Path;

pub const DEMAND_FEATURES: &[&str] = &[
    "price",
    "genz_ratio",
    "google_trends_score",
    "region",
    "product",
    "month",
    "quarter",
];

#[derive(Debug, Clone)]
pub struct DemandPredictor {
    artifact: ModelArtifact,
    region_encoder: LabelEncoder,
    product_encoder: LabelEncoder,
}

impl DemandPredictor {
    pub fn from_artifact(artifact: ModelArtifact) -> PredictorResult<Self> {
        artifact.require_feature_order(DEMAND_FEATURES)?;
        Ok(Self {
            region_encoder: artifact.encoder("region")?,
            product_encoder: artifact.encoder("product")?,
            artifact,
        })
    }

    pub fn load(path: &Path) -> PredictorResult<Self> {
        Self::from_artifact(ModelArtifact::load(path)?)
    }
}

impl Predictor for DemandPredictor {
    type Input = DemandFeatures;

    fn encode(&self, raw: &DemandFeatures) -> PredictorResult<Vec<f64>> {
        Ok(vec![
            raw.price,
            raw.genz_ratio,
            raw.google_trends_score,
            self.region_encoder.transform(&raw.region)?,
            self.product_encoder.transform(&raw.product)?,
            f64::from(raw.month),
            f64::from(raw.quarter),
        ])
    }

    fn predict(&self, features: &[f64]) -> PredictorResult<f64> {
        self.artifact.predict(features)
    }
}
