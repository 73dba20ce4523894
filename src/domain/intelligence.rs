// ==========================================
// VOIS 供需智能服务 - 模型输入与智能报告
// ==========================================
// 职责: 需求预测 / 适宜度预测的原始特征与输出报告
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 模型原始输入
// ==========================================

/// 需求预测原始特征
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandFeatures {
    pub region: String,
    pub product: String,
    pub price: f64,
    pub genz_ratio: f64,          // [0, 1]
    pub google_trends_score: f64, // [0, 100]
    pub month: u32,               // 1-12
    pub quarter: u32,             // 1-4
}

impl DemandFeatures {
    /// 由月份推导季度
    pub fn quarter_of(month: u32) -> u32 {
        (month.clamp(1, 12) - 1) / 3 + 1
    }

    /// Z 世代采纳指数 = genz_ratio * google_trends_score / 100
    pub fn genz_adoption_index(&self) -> f64 {
        self.genz_ratio * self.google_trends_score / 100.0
    }

    /// 价格弹性得分 (简化): max(0, 1 - (price - 100) / 500)
    pub fn price_elasticity_score(&self) -> f64 {
        (1.0 - (self.price - 100.0) / 500.0).max(0.0)
    }
}

/// 适宜度预测原始特征
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityFeatures {
    pub district: String,
    pub crop: String,
    pub soil_ph: f64,
    pub soil_type: String,
    pub rainfall: f64,         // mm
    pub temperature: f64,      // 摄氏度
    pub irrigation: u8,        // 0 = 雨养, 1 = 灌溉
    pub distance_to_city: f64, // km
}

// ==========================================
// SuitabilityBand - 适宜度等级
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuitabilityBand {
    High,     // >= 0.8
    Moderate, // >= 0.6
    Marginal, // >= 0.4
    Unsuitable,
}

impl SuitabilityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            SuitabilityBand::High
        } else if score >= 0.6 {
            SuitabilityBand::Moderate
        } else if score >= 0.4 {
            SuitabilityBand::Marginal
        } else {
            SuitabilityBand::Unsuitable
        }
    }

    /// 对外展示的建议文案
    pub fn recommendation(&self) -> &'static str {
        match self {
            SuitabilityBand::High => "Highly suitable - Excellent conditions for this crop",
            SuitabilityBand::Moderate => {
                "Moderately suitable - Good conditions with minor adjustments"
            }
            SuitabilityBand::Marginal => {
                "Marginally suitable - Requires significant improvements"
            }
            SuitabilityBand::Unsuitable => {
                "Not suitable - Consider alternative crops or locations"
            }
        }
    }
}

// ==========================================
// 单模型输出
// ==========================================

/// 需求预测报告; 预测失败时 consumption 为 0 并附带 error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandForecast {
    pub predicted_consumption: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genz_adoption_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_elasticity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 适宜度分析报告; 预测失败时 score 为 0.5 并附带 error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityAnalysis {
    pub suitability_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ==========================================
// ProductionRecommendation - 综合生产建议
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionRecommendation {
    #[serde(rename = "Proceed with production")]
    Proceed,
    #[serde(rename = "Review conditions")]
    Review,
}

impl fmt::Display for ProductionRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductionRecommendation::Proceed => write!(f, "Proceed with production"),
            ProductionRecommendation::Review => write!(f, "Review conditions"),
        }
    }
}

/// 综合智能报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedIntelligence {
    pub demand_forecast: DemandForecast,
    pub suitability_analysis: SuitabilityAnalysis,
    pub priority_score: f64,
    pub recommendation: ProductionRecommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_of() {
        assert_eq!(DemandFeatures::quarter_of(1), 1);
        assert_eq!(DemandFeatures::quarter_of(3), 1);
        assert_eq!(DemandFeatures::quarter_of(4), 2);
        assert_eq!(DemandFeatures::quarter_of(12), 4);
    }

    #[test]
    fn test_suitability_band_boundaries() {
        assert_eq!(SuitabilityBand::from_score(0.8), SuitabilityBand::High);
        assert_eq!(SuitabilityBand::from_score(0.79), SuitabilityBand::Moderate);
        assert_eq!(SuitabilityBand::from_score(0.6), SuitabilityBand::Moderate);
        assert_eq!(SuitabilityBand::from_score(0.4), SuitabilityBand::Marginal);
        assert_eq!(SuitabilityBand::from_score(0.39), SuitabilityBand::Unsuitable);
    }

    #[test]
    fn test_recommendation_serializes_as_text() {
        let json = serde_json::to_string(&ProductionRecommendation::Proceed).unwrap();
        assert_eq!(json, "\"Proceed with production\"");
        assert_eq!(
            ProductionRecommendation::Review.to_string(),
            "Review conditions"
        );
    }

    #[test]
    fn test_price_elasticity_floor() {
        let features = DemandFeatures {
            region: "Hyderabad".to_string(),
            product: "Tofu".to_string(),
            price: 800.0,
            genz_ratio: 0.5,
            google_trends_score: 80.0,
            month: 6,
            quarter: 2,
        };
        assert_eq!(features.price_elasticity_score(), 0.0);
        assert!((features.genz_adoption_index() - 0.4).abs() < 1e-12);
    }
}
