// ==========================================
// VOIS 供需智能服务 - 模型制品
// ==========================================
// 格式: JSON
// {
//   "name": "...",
//   "feature_names": [...],
//   "encoders": { "<字段>": ["类别0", "类别1", ...] },
//   "model": { "kind": "linear" | "forest", ... }
// }
// ==========================================

use crate::predictor::error::{PredictorError, PredictorResult};
use crate::predictor::label_encoder::LabelEncoder;
use crate::predictor::model::RegressionModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub encoders: BTreeMap<String, Vec<String>>,
    pub model: RegressionModel,
}

impl ModelArtifact {
    /// 从文件加载并校验
    pub fn load(path: &Path) -> PredictorResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PredictorError::ArtifactLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw).map_err(|e| match e {
            PredictorError::InvalidArtifact(message) => PredictorError::ArtifactLoad {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_json_str(raw: &str) -> PredictorResult<Self> {
        let artifact: ModelArtifact = serde_json::from_str(raw)
            .map_err(|e| PredictorError::InvalidArtifact(e.to_string()))?;
        artifact.model.validate(artifact.feature_names.len())?;
        Ok(artifact)
    }

    /// 校验特征顺序与预测器约定一致
    pub fn require_feature_order(&self, expected: &[&str]) -> PredictorResult<()> {
        let actual: Vec<&str> = self.feature_names.iter().map(|s| s.as_str()).collect();
        if actual != expected {
            return Err(PredictorError::InvalidArtifact(format!(
                "artifact '{}' feature order {:?} does not match expected {:?}",
                self.name, actual, expected
            )));
        }
        Ok(())
    }

    /// 取出指定字段的标签编码器
    pub fn encoder(&self, field: &str) -> PredictorResult<LabelEncoder> {
        let classes = self.encoders.get(field).ok_or_else(|| {
            PredictorError::InvalidArtifact(format!(
                "artifact '{}' has no encoder for '{}'",
                self.name, field
            ))
        })?;
        LabelEncoder::new(field, classes.clone())
    }

    /// 预测 (带特征长度与数值合法性检查)
    pub fn predict(&self, features: &[f64]) -> PredictorResult<f64> {
        if features.len() != self.feature_names.len() {
            return Err(PredictorError::FeatureCountMismatch {
                expected: self.feature_names.len(),
                actual: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|x| !x.is_finite()) {
            return Err(PredictorError::NonFiniteFeature { index });
        }
        Ok(self.model.predict(features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LINEAR_JSON: &str = r#"{
        "name": "toy",
        "feature_names": ["a", "b"],
        "encoders": {"b": ["x", "y"]},
        "model": {"kind": "linear", "coefficients": [1.0, 10.0], "intercept": 0.0}
    }"#;

    #[test]
    fn test_from_json_and_predict() {
        let artifact = ModelArtifact::from_json_str(LINEAR_JSON).unwrap();
        let encoder = artifact.encoder("b").unwrap();
        let b = encoder.transform("y").unwrap();
        assert_eq!(artifact.predict(&[2.0, b]).unwrap(), 12.0);
    }

    #[test]
    fn test_predict_checks_feature_count() {
        let artifact = ModelArtifact::from_json_str(LINEAR_JSON).unwrap();
        assert_eq!(
            artifact.predict(&[1.0]),
            Err(PredictorError::FeatureCountMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            artifact.predict(&[1.0, f64::NAN]),
            Err(PredictorError::NonFiniteFeature { index: 1 })
        );
    }

    #[test]
    fn test_missing_encoder() {
        let artifact = ModelArtifact::from_json_str(LINEAR_JSON).unwrap();
        assert!(artifact.encoder("a").is_err());
        assert!(artifact.require_feature_order(&["b", "a"]).is_err());
        assert!(artifact.require_feature_order(&["a", "b"]).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", LINEAR_JSON).unwrap();
        let artifact = ModelArtifact::load(file.path()).unwrap();
        assert_eq!(artifact.name, "toy");

        let missing = ModelArtifact::load(Path::new("/nonexistent/model.json"));
        assert!(matches!(missing, Err(PredictorError::ArtifactLoad { .. })));
    }
}
