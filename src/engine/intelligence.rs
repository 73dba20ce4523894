// ==========================================
// VOIS 供需智能服务 - 需求/适宜度智能引擎
// ==========================================
// 职责:
// - 单模型分析: 需求预测 / 适宜度分析
// - 跨模型融合: 消费量归一化 + 适宜度 -> 综合优先级 + 生产建议
// 降级: 任一预测器缺失或失败只影响其自身子报告
//   消费量 -> 0, 适宜度 -> 0.5, 并附带错误信息
// 融合输入: 消费量取 2 位, 适宜度取 3 位, 与对外展示的子结果一致
// ==========================================

use crate::domain::precision::{round_to, QUANTITY_DECIMALS, SCORE_DECIMALS};
use crate::domain::{
    CombinedIntelligence, DemandFeatures, DemandForecast, ProductionRecommendation,
    SuitabilityAnalysis, SuitabilityBand, SuitabilityFeatures,
};
use crate::predictor::{Predictor, PredictorResult};
use tracing::{instrument, warn};

/// 消费量归一化分母
pub const CONSUMPTION_SCALE: f64 = 2000.0;
/// 综合优先级高于此值时建议生产 (严格大于)
pub const PROCEED_THRESHOLD: f64 = 0.6;
/// 适宜度预测失败时的中性分
pub const FALLBACK_SUITABILITY: f64 = 0.5;

pub const DEMAND_MODEL_NAME: &str = "Vegan demand";
pub const SUITABILITY_MODEL_NAME: &str = "Suitability";

pub type DemandModel<'a> = &'a dyn Predictor<Input = DemandFeatures>;
pub type SuitabilityModel<'a> = &'a dyn Predictor<Input = SuitabilityFeatures>;

// ==========================================
// IntelligenceEngine
// ==========================================
pub struct IntelligenceEngine {
    // 无状态引擎, 不需要注入依赖
}

impl IntelligenceEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 单模型分析
    // ==========================================

    /// 需求预测: 消费量截断到 >= 0, 附带 Z 世代采纳指数与价格弹性
    pub fn forecast_demand(
        &self,
        predictor: DemandModel<'_>,
        features: &DemandFeatures,
    ) -> PredictorResult<DemandForecast> {
        let consumption = predictor.score(features)?.max(0.0);
        Ok(DemandForecast {
            predicted_consumption: consumption,
            genz_adoption_index: Some(features.genz_adoption_index()),
            price_elasticity_score: Some(features.price_elasticity_score()),
            error: None,
        })
    }

    /// 适宜度分析: 截断到 [0, 1] 并给出等级文案
    pub fn analyze_suitability(
        &self,
        predictor: SuitabilityModel<'_>,
        features: &SuitabilityFeatures,
    ) -> PredictorResult<SuitabilityAnalysis> {
        let score = predictor.score(features)?.clamp(0.0, 1.0);
        Ok(SuitabilityAnalysis {
            suitability_score: score,
            recommendation: Some(SuitabilityBand::from_score(score).recommendation().to_string()),
            error: None,
        })
    }

    // ==========================================
    // 跨模型融合
    // ==========================================

    /// 综合智能报告
    ///
    /// 两个子报告相互独立; 预测器为 None 视为未加载
    #[instrument(skip_all, fields(
        region = %demand_features.region,
        product = %demand_features.product,
        district = %suitability_features.district,
        crop = %suitability_features.crop
    ))]
    pub fn combine(
        &self,
        demand: Option<DemandModel<'_>>,
        suitability: Option<SuitabilityModel<'_>>,
        demand_features: &DemandFeatures,
        suitability_features: &SuitabilityFeatures,
    ) -> CombinedIntelligence {
        let demand_forecast = match demand {
            Some(predictor) => self
                .forecast_demand(predictor, demand_features)
                .unwrap_or_else(|e| {
                    warn!(error = %e, "需求预测失败, 消费量降级为 0");
                    Self::degraded_forecast(e.to_string())
                }),
            None => Self::degraded_forecast(format!("{} model not loaded", DEMAND_MODEL_NAME)),
        };

        let suitability_analysis = match suitability {
            Some(predictor) => self
                .analyze_suitability(predictor, suitability_features)
                .unwrap_or_else(|e| {
                    warn!(error = %e, "适宜度预测失败, 降级为中性分");
                    Self::degraded_analysis(e.to_string())
                }),
            None => Self::degraded_analysis(format!(
                "{} model not loaded",
                SUITABILITY_MODEL_NAME
            )),
        };

        let (priority_score, recommendation) = self.blend(
            round_to(demand_forecast.predicted_consumption, QUANTITY_DECIMALS),
            round_to(suitability_analysis.suitability_score, SCORE_DECIMALS),
        );

        CombinedIntelligence {
            demand_forecast,
            suitability_analysis,
            priority_score,
            recommendation,
        }
    }

    /// priority = suitability * 0.5 + min(consumption / 2000, 1) * 0.5
    pub fn blend(&self, consumption: f64, suitability: f64) -> (f64, ProductionRecommendation) {
        let consumption_normalized = if consumption > 0.0 {
            (consumption / CONSUMPTION_SCALE).min(1.0)
        } else {
            0.0
        };
        let priority = suitability * 0.5 + consumption_normalized * 0.5;

        let recommendation = if priority > PROCEED_THRESHOLD {
            ProductionRecommendation::Proceed
        } else {
            ProductionRecommendation::Review
        };
        (priority, recommendation)
    }

    fn degraded_forecast(error: String) -> DemandForecast {
        DemandForecast {
            predicted_consumption: 0.0,
            genz_adoption_index: None,
            price_elasticity_score: None,
            error: Some(error),
        }
    }

    fn degraded_analysis(error: String) -> SuitabilityAnalysis {
        SuitabilityAnalysis {
            suitability_score: FALLBACK_SUITABILITY,
            recommendation: None,
            error: Some(error),
        }
    }
}

impl Default for IntelligenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::PredictorError;
    use approx::assert_relative_eq;

    struct FixedDemand(f64);

    impl Predictor for FixedDemand {
        type Input = DemandFeatures;

        fn encode(&self, _raw: &DemandFeatures) -> PredictorResult<Vec<f64>> {
            Ok(vec![])
        }

        fn predict(&self, _features: &[f64]) -> PredictorResult<f64> {
            Ok(self.0)
        }
    }

    struct FixedSuitability(f64);

    impl Predictor for FixedSuitability {
        type Input = SuitabilityFeatures;

        fn encode(&self, _raw: &SuitabilityFeatures) -> PredictorResult<Vec<f64>> {
            Ok(vec![])
        }

        fn predict(&self, _features: &[f64]) -> PredictorResult<f64> {
            Ok(self.0)
        }
    }

    struct RejectingSuitability;

    impl Predictor for RejectingSuitability {
        type Input = SuitabilityFeatures;

        fn encode(&self, raw: &SuitabilityFeatures) -> PredictorResult<Vec<f64>> {
            Err(PredictorError::UnseenCategory {
                encoder: "district".to_string(),
                value: raw.district.clone(),
            })
        }

        fn predict(&self, _features: &[f64]) -> PredictorResult<f64> {
            Ok(1.0)
        }
    }

    fn demand_features() -> DemandFeatures {
        DemandFeatures {
            region: "Delhi".to_string(),
            product: "Tofu".to_string(),
            price: 200.0,
            genz_ratio: 0.5,
            google_trends_score: 70.0,
            month: 5,
            quarter: 2,
        }
    }

    fn suitability_features() -> SuitabilityFeatures {
        SuitabilityFeatures {
            district: "Atlantis".to_string(),
            crop: "Soy".to_string(),
            soil_ph: 7.0,
            soil_type: "Loamy".to_string(),
            rainfall: 600.0,
            temperature: 25.0,
            irrigation: 1,
            distance_to_city: 50.0,
        }
    }

    #[test]
    fn test_blend_threshold_is_strict() {
        let engine = IntelligenceEngine::new();
        // 0.7*0.5 + 0.5*0.5 = 0.6, 不超过阈值
        let (priority, rec) = engine.blend(1000.0, 0.7);
        assert_relative_eq!(priority, 0.6, epsilon = 1e-12);
        assert_eq!(rec, ProductionRecommendation::Review);

        let (priority, rec) = engine.blend(5000.0, 0.9);
        assert_relative_eq!(priority, 0.95, epsilon = 1e-12);
        assert_eq!(rec, ProductionRecommendation::Proceed);
    }

    #[test]
    fn test_blend_non_positive_consumption() {
        let (priority, _) = IntelligenceEngine::new().blend(-20.0, 0.4);
        assert_relative_eq!(priority, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_forecast_clamps_negative() {
        let forecast = IntelligenceEngine::new()
            .forecast_demand(&FixedDemand(-15.0), &demand_features())
            .unwrap();
        assert_eq!(forecast.predicted_consumption, 0.0);
        assert_relative_eq!(forecast.genz_adoption_index.unwrap(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(forecast.price_elasticity_score.unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_combine_degrades_independently() {
        let demand = FixedDemand(1500.0);
        let demand_model: DemandModel<'_> = &demand;
        let suitability_model: SuitabilityModel<'_> = &RejectingSuitability;
        let report = IntelligenceEngine::new().combine(
            Some(demand_model),
            Some(suitability_model),
            &demand_features(),
            &suitability_features(),
        );

        assert_eq!(report.demand_forecast.predicted_consumption, 1500.0);
        assert!(report.demand_forecast.error.is_none());
        assert_eq!(report.suitability_analysis.suitability_score, 0.5);
        assert!(report
            .suitability_analysis
            .error
            .as_deref()
            .unwrap()
            .contains("Atlantis"));
        // 0.5*0.5 + 0.75*0.5
        assert_relative_eq!(report.priority_score, 0.625, epsilon = 1e-12);
        assert_eq!(report.recommendation, ProductionRecommendation::Proceed);
    }

    #[test]
    fn test_combine_blends_rounded_sub_results() {
        // 0.7004 展示为 0.700, 融合同样使用 0.700 -> 0.6, 不超过阈值
        let demand = FixedDemand(1000.0);
        let suitability = FixedSuitability(0.7004);
        let demand_model: DemandModel<'_> = &demand;
        let suitability_model: SuitabilityModel<'_> = &suitability;
        let report = IntelligenceEngine::new().combine(
            Some(demand_model),
            Some(suitability_model),
            &demand_features(),
            &suitability_features(),
        );

        assert_eq!(report.suitability_analysis.suitability_score, 0.7004);
        assert_relative_eq!(report.priority_score, 0.6, epsilon = 1e-12);
        assert_eq!(report.recommendation, ProductionRecommendation::Review);

        // 0.7006 取整为 0.701 -> 0.6005, 建议生产
        let suitability = FixedSuitability(0.7006);
        let suitability_model: SuitabilityModel<'_> = &suitability;
        let report = IntelligenceEngine::new().combine(
            Some(demand_model),
            Some(suitability_model),
            &demand_features(),
            &suitability_features(),
        );
        assert_relative_eq!(report.priority_score, 0.6005, epsilon = 1e-12);
        assert_eq!(report.recommendation, ProductionRecommendation::Proceed);
    }

    #[test]
    fn test_combine_without_models() {
        let report = IntelligenceEngine::new().combine(
            None,
            None,
            &demand_features(),
            &suitability_features(),
        );
        assert_eq!(report.demand_forecast.predicted_consumption, 0.0);
        assert_eq!(
            report.demand_forecast.error.as_deref(),
            Some("Vegan demand model not loaded")
        );
        assert_relative_eq!(report.priority_score, 0.25, epsilon = 1e-12);
        assert_eq!(report.recommendation, ProductionRecommendation::Review);
    }
}
