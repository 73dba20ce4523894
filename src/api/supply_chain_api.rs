// ==========================================
// VOIS 供需智能服务 - 供需智能 API
// ==========================================
// 职责: 请求校验 -> 引擎/预测器调用 -> 响应取整
// 依赖: 启动时加载的参考数据与模型 (均可能缺失)
// ==========================================

use std::sync::Arc;

use chrono::Datelike;
use tracing::{debug, warn};

use crate::api::dto::{
    round_analysis, round_forecast, CombinedIntelligenceRequest, CombinedIntelligenceResponse,
    ForecastDemandRequest, OptimizeSupplyChainRequest, OptimizeSupplyChainResponse,
    PredictSuitabilityRequest,
};
use crate::api::error::{ApiError, ApiResult};
use crate::config::CropMapping;
use crate::domain::{DemandForecast, SuitabilityAnalysis};
use crate::engine::intelligence::{DEMAND_MODEL_NAME, SUITABILITY_MODEL_NAME};
use crate::engine::{IntelligenceEngine, SupplyChainOptimizer};
use crate::predictor::{SharedDemandPredictor, SharedSuitabilityPredictor};
use crate::repository::ReferenceData;

// ==========================================
// SupplyChainApi
// ==========================================
pub struct SupplyChainApi {
    reference_data: Option<Arc<ReferenceData>>,
    suitability_predictor: Option<SharedSuitabilityPredictor>,
    demand_predictor: Option<SharedDemandPredictor>,
    optimizer: SupplyChainOptimizer,
    intelligence: IntelligenceEngine,
}

impl SupplyChainApi {
    /// 创建新的 SupplyChainApi 实例
    ///
    /// # 参数
    /// - reference_data: 线路表 + 适宜度表 (None 表示未加载)
    /// - suitability_predictor: 适宜度预测器 (None 表示未加载)
    /// - demand_predictor: 需求预测器 (None 表示未加载)
    /// - crop_mapping: 产品 -> 作物映射
    pub fn new(
        reference_data: Option<Arc<ReferenceData>>,
        suitability_predictor: Option<SharedSuitabilityPredictor>,
        demand_predictor: Option<SharedDemandPredictor>,
        crop_mapping: CropMapping,
    ) -> Self {
        Self {
            reference_data,
            suitability_predictor,
            demand_predictor,
            optimizer: SupplyChainOptimizer::new(crop_mapping),
            intelligence: IntelligenceEngine::new(),
        }
    }

    pub fn is_data_loaded(&self) -> bool {
        self.reference_data.is_some()
    }

    pub fn is_suitability_model_loaded(&self) -> bool {
        self.suitability_predictor.is_some()
    }

    pub fn is_demand_model_loaded(&self) -> bool {
        self.demand_predictor.is_some()
    }

    // ==========================================
    // 供应链优化
    // ==========================================

    pub fn optimize_supply_chain(
        &self,
        request: OptimizeSupplyChainRequest,
    ) -> ApiResult<OptimizeSupplyChainResponse> {
        let data = self
            .reference_data
            .as_deref()
            .ok_or(ApiError::DataUnavailable)?;
        let allocation_request = request.into_allocation_request()?;

        let result = self.optimizer.optimize(&allocation_request, data)?;
        if !result.is_fully_satisfied() {
            debug!(
                remaining = result.remaining_quantity,
                "供给不足, 需求未完全满足"
            );
        }
        Ok(OptimizeSupplyChainResponse::from(&result))
    }

    // ==========================================
    // 单模型分析
    // ==========================================

    pub fn predict_suitability(
        &self,
        request: PredictSuitabilityRequest,
    ) -> ApiResult<SuitabilityAnalysis> {
        let predictor = self
            .suitability_predictor
            .as_deref()
            .ok_or_else(|| ApiError::ModelUnavailable(SUITABILITY_MODEL_NAME.to_string()))?;
        let features = request.into_features()?;

        let analysis = self
            .intelligence
            .analyze_suitability(predictor, &features)
            .map_err(|e| {
                warn!(district = %features.district, crop = %features.crop, error = %e, "适宜度预测失败");
                ApiError::from(e)
            })?;
        Ok(round_analysis(analysis))
    }

    pub fn forecast_vegan_demand(
        &self,
        request: ForecastDemandRequest,
    ) -> ApiResult<DemandForecast> {
        let predictor = self
            .demand_predictor
            .as_deref()
            .ok_or_else(|| ApiError::ModelUnavailable(DEMAND_MODEL_NAME.to_string()))?;
        let features = request.into_features()?;

        let forecast = self
            .intelligence
            .forecast_demand(predictor, &features)
            .map_err(|e| {
                warn!(region = %features.region, product = %features.product, error = %e, "需求预测失败");
                ApiError::from(e)
            })?;
        Ok(round_forecast(forecast))
    }

    // ==========================================
    // 综合智能
    // ==========================================

    /// 综合智能报告; 模型缺失或失败时降级而不报错
    pub fn combined_intelligence(
        &self,
        request: CombinedIntelligenceRequest,
    ) -> ApiResult<CombinedIntelligenceResponse> {
        self.combined_intelligence_for_month(request, chrono::Local::now().month())
    }

    /// 指定"当前月份"的综合智能报告
    pub fn combined_intelligence_for_month(
        &self,
        request: CombinedIntelligenceRequest,
        current_month: u32,
    ) -> ApiResult<CombinedIntelligenceResponse> {
        let (demand_features, suitability_features) = request.into_features(current_month)?;

        let report = self.intelligence.combine(
            self.demand_predictor.as_deref(),
            self.suitability_predictor.as_deref(),
            &demand_features,
            &suitability_features,
        );
        Ok(CombinedIntelligenceResponse::from(report))
    }
}
