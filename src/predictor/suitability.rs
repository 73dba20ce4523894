// ==========================================
// VOIS 供需智能服务 - 作物适宜度预测器
// ==========================================
// 特征顺序:
// soil_ph, soil_type, rainfall, temperature, irrigation,
// distance_to_city, crop, district
// 输出: 原始回归值, 调用方截断到 [0, 1]
// ==========================================

use crate::domain::SuitabilityFeatures;
use crate::predictor::artifact::ModelArtifact;
use crate::predictor::error::PredictorResult;
use crate::predictor::label_encoder::LabelEncoder;
use crate::predictor::Predictor;
use std::path::Path;

pub const SUITABILITY_FEATURES: &[&str] = &[
    "soil_ph",
    "soil_type",
    "rainfall",
    "temperature",
    "irrigation",
    "distance_to_city",
    "crop",
    "district",
];

#[derive(Debug, Clone)]
pub struct SuitabilityPredictor {
    artifact: ModelArtifact,
    soil_encoder: LabelEncoder,
    crop_encoder: LabelEncoder,
    district_encoder: LabelEncoder,
}

impl SuitabilityPredictor {
    pub fn from_artifact(artifact: ModelArtifact) -> PredictorResult<Self> {
        artifact.require_feature_order(SUITABILITY_FEATURES)?;
        Ok(Self {
            soil_encoder: artifact.encoder("soil_type")?,
            crop_encoder: artifact.encoder("crop")?,
            district_encoder: artifact.encoder("district")?,
            artifact,
        })
    }

    pub fn load(path: &Path) -> PredictorResult<Self> {
        Self::from_artifact(ModelArtifact::load(path)?)
    }
}

impl Predictor for SuitabilityPredictor {
    type Input = SuitabilityFeatures;

    fn encode(&self, raw: &SuitabilityFeatures) -> PredictorResult<Vec<f64>> {
        Ok(vec![
            raw.soil_ph,
            self.soil_encoder.transform(&raw.soil_type)?,
            raw.rainfall,
            raw.temperature,
            f64::from(raw.irrigation),
            raw.distance_to_city,
            self.crop_encoder.transform(&raw.crop)?,
            self.district_encoder.transform(&raw.district)?,
        ])
    }

    fn predict(&self, features: &[f64]) -> PredictorResult<f64> {
        self.artifact.predict(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::PredictorError;

    fn artifact_json() -> String {
        r#"{
            "name": "crop_suitability",
            "feature_names": ["soil_ph", "soil_type", "rainfall", "temperature",
                              "irrigation", "distance_to_city", "crop", "district"],
            "encoders": {
                "soil_type": ["Clay", "Loamy"],
                "crop": ["Oats", "Soy"],
                "district": ["Anantapur", "Medak"]
            },
            "model": {"kind": "linear",
                      "coefficients": [0.0, 0.1, 0.0, 0.0, 0.2, 0.0, 0.0, 0.3],
                      "intercept": 0.1}
        }"#
        .to_string()
    }

    fn features(district: &str) -> SuitabilityFeatures {
        SuitabilityFeatures {
            district: district.to_string(),
            crop: "Soy".to_string(),
            soil_ph: 6.8,
            soil_type: "Loamy".to_string(),
            rainfall: 700.0,
            temperature: 24.0,
            irrigation: 1,
            distance_to_city: 40.0,
        }
    }

    #[test]
    fn test_encode_and_score() {
        let artifact = ModelArtifact::from_json_str(&artifact_json()).unwrap();
        let predictor = SuitabilityPredictor::from_artifact(artifact).unwrap();

        let encoded = predictor.encode(&features("Medak")).unwrap();
        assert_eq!(encoded, vec![6.8, 1.0, 700.0, 24.0, 1.0, 40.0, 1.0, 1.0]);

        // 0.1 + 0.1*1 + 0.2*1 + 0.3*1
        let score = predictor.score(&features("Medak")).unwrap();
        assert!((score - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_district() {
        let artifact = ModelArtifact::from_json_str(&artifact_json()).unwrap();
        let predictor = SuitabilityPredictor::from_artifact(artifact).unwrap();
        assert!(matches!(
            predictor.score(&features("Warangal")),
            Err(PredictorError::UnseenCategory { .. })
        ));
    }
}
