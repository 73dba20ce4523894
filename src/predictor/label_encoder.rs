// ==========================================
// VOIS 供需智能服务 - 标签编码器
// ==========================================
// 类别 -> 整数编码; 编码 = 类别在 classes 中的下标
// 训练时未出现的类别一律拒绝
// ==========================================

use crate::predictor::error::{PredictorError, PredictorResult};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    name: String,
    codes: HashMap<String, usize>,
}

impl LabelEncoder {
    /// 由类别列表构造; 类别重复视为制品损坏
    pub fn new(name: &str, classes: Vec<String>) -> PredictorResult<Self> {
        let mut codes = HashMap::with_capacity(classes.len());
        for (code, class) in classes.iter().enumerate() {
            if codes.insert(class.clone(), code).is_some() {
                return Err(PredictorError::InvalidArtifact(format!(
                    "encoder '{}' has duplicate class '{}'",
                    name, class
                )));
            }
        }
        Ok(Self {
            name: name.to_string(),
            codes,
        })
    }

    pub fn transform(&self, value: &str) -> PredictorResult<f64> {
        self.codes
            .get(value)
            .map(|&code| code as f64)
            .ok_or_else(|| PredictorError::UnseenCategory {
                encoder: self.name.clone(),
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_transform() {
        let encoder = LabelEncoder::new("soil_type", classes(&["Clay", "Loamy", "Sandy"])).unwrap();
        assert_eq!(encoder.transform("Clay").unwrap(), 0.0);
        assert_eq!(encoder.transform("Sandy").unwrap(), 2.0);
    }

    #[test]
    fn test_unseen_label() {
        let encoder = LabelEncoder::new("district", classes(&["Medak"])).unwrap();
        let err = encoder.transform("Atlantis").unwrap_err();
        assert_eq!(
            err,
            PredictorError::UnseenCategory {
                encoder: "district".to_string(),
                value: "Atlantis".to_string(),
            }
        );
        assert!(err.to_string().contains("previously unseen"));
    }

    #[test]
    fn test_duplicate_classes_rejected() {
        let result = LabelEncoder::new("crop", classes(&["Oats", "Soy", "Oats"]));
        assert!(matches!(result, Err(PredictorError::InvalidArtifact(_))));
    }
}
