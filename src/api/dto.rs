// ==========================================
// VOIS 供需智能服务 - 请求/响应 DTO
// ==========================================
// 请求: 所有字段 Option, 由 validator 统一报告缺失字段
// 响应: 引擎输出不取整, 在此按对外精度取整
//   百分比/成本 2 位, 适宜度 3 位, 减损 1 位, 优先级 3 位
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::{check_flag, check_month, require, require_quantity, require_str};
use crate::domain::{
    AllocationRequest, AllocationResult, CombinedIntelligence, DemandFeatures, DemandForecast,
    ProductionRecommendation, SourceAllocation, SuitabilityAnalysis, SuitabilityFeatures,
};
use serde::{Deserialize, Serialize};

// ==========================================
// 综合智能请求的可选字段默认值
// ==========================================
pub mod defaults {
    pub const PRICE: f64 = 200.0;
    pub const GENZ_RATIO: f64 = 0.5;
    pub const GOOGLE_TRENDS_SCORE: f64 = 70.0;
    pub const SOIL_TYPE: &str = "Loamy";
    pub const SOIL_PH: f64 = 7.0;
    pub const RAINFALL: f64 = 600.0;
    pub const TEMPERATURE: f64 = 25.0;
    pub const IRRIGATION: u8 = 1;
    pub const DISTANCE_TO_CITY: f64 = 50.0;
}

pub use crate::domain::round_to;

// ==========================================
// POST /optimize_supply_chain
// ==========================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizeSupplyChainRequest {
    pub destination_city: Option<String>,
    pub product: Option<String>,
    pub required_quantity: Option<f64>,
}

impl OptimizeSupplyChainRequest {
    pub fn into_allocation_request(self) -> ApiResult<AllocationRequest> {
        let destination_city = require_str("destination_city", &self.destination_city)?;
        let product = require_str("product", &self.product)?;
        let required_quantity = require_quantity("required_quantity", &self.required_quantity)?;
        Ok(AllocationRequest::new(
            destination_city,
            product,
            required_quantity,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAllocationResponse {
    pub source_district: String,
    pub allocation_percentage: f64,
    pub allocated_quantity: f64,
    pub transport_cost: f64,
    pub total_cost: f64,
    pub suitability_score: f64,
}

impl From<&SourceAllocation> for SourceAllocationResponse {
    fn from(source: &SourceAllocation) -> Self {
        Self {
            source_district: source.source_district.clone(),
            allocation_percentage: round_to(source.allocation_percentage, 2),
            allocated_quantity: round_to(source.allocated_quantity, 2),
            transport_cost: round_to(source.transport_cost, 2),
            total_cost: round_to(source.total_cost, 2),
            suitability_score: round_to(source.suitability_score, 3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeSupplyChainResponse {
    pub optimal_sources: Vec<SourceAllocationResponse>,
    pub total_cost: f64,
    pub waste_reduction_percentage: f64,
}

impl From<&AllocationResult> for OptimizeSupplyChainResponse {
    fn from(result: &AllocationResult) -> Self {
        Self {
            optimal_sources: result.optimal_sources.iter().map(Into::into).collect(),
            total_cost: round_to(result.total_cost, 2),
            waste_reduction_percentage: round_to(result.waste_reduction_percentage, 1),
        }
    }
}

// ==========================================
// POST /predict_suitability
// ==========================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictSuitabilityRequest {
    pub district: Option<String>,
    pub crop: Option<String>,
    pub soil_ph: Option<f64>,
    pub soil_type: Option<String>,
    pub rainfall: Option<f64>,
    pub temperature: Option<f64>,
    pub irrigation: Option<u8>,
    pub distance_to_city: Option<f64>,
}

impl PredictSuitabilityRequest {
    pub fn into_features(self) -> ApiResult<SuitabilityFeatures> {
        Ok(SuitabilityFeatures {
            district: require_str("district", &self.district)?.to_string(),
            crop: require_str("crop", &self.crop)?.to_string(),
            soil_ph: *require("soil_ph", &self.soil_ph)?,
            soil_type: require_str("soil_type", &self.soil_type)?.to_string(),
            rainfall: *require("rainfall", &self.rainfall)?,
            temperature: *require("temperature", &self.temperature)?,
            irrigation: check_flag("irrigation", *require("irrigation", &self.irrigation)?)?,
            distance_to_city: *require("distance_to_city", &self.distance_to_city)?,
        })
    }
}

/// 适宜度报告取整 (3 位)
pub fn round_analysis(mut analysis: SuitabilityAnalysis) -> SuitabilityAnalysis {
    analysis.suitability_score = round_to(analysis.suitability_score, 3);
    analysis
}

// ==========================================
// POST /forecast_vegan_demand
// ==========================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastDemandRequest {
    pub region: Option<String>,
    pub product: Option<String>,
    pub price: Option<f64>,
    pub genz_ratio: Option<f64>,
    pub google_trends_score: Option<f64>,
    pub month: Option<u32>,
    /// 缺省时由 month 推导
    pub quarter: Option<u32>,
}

impl ForecastDemandRequest {
    pub fn into_features(self) -> ApiResult<DemandFeatures> {
        let region = require_str("region", &self.region)?.to_string();
        let product = require_str("product", &self.product)?.to_string();
        let price = *require("price", &self.price)?;
        let genz_ratio = *require("genz_ratio", &self.genz_ratio)?;
        let google_trends_score = *require("google_trends_score", &self.google_trends_score)?;
        let month = check_month("month", *require("month", &self.month)?)?;
        let quarter = self
            .quarter
            .unwrap_or_else(|| DemandFeatures::quarter_of(month));

        Ok(DemandFeatures {
            region,
            product,
            price,
            genz_ratio,
            google_trends_score,
            month,
            quarter,
        })
    }
}

/// 需求报告取整: 消费量 2 位, 指数 3 位
pub fn round_forecast(mut forecast: DemandForecast) -> DemandForecast {
    forecast.predicted_consumption = round_to(forecast.predicted_consumption, 2);
    forecast.genz_adoption_index = forecast.genz_adoption_index.map(|v| round_to(v, 3));
    forecast.price_elasticity_score = forecast.price_elasticity_score.map(|v| round_to(v, 3));
    forecast
}

// ==========================================
// POST /combined_intelligence
// ==========================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinedIntelligenceRequest {
    // 必填
    pub region: Option<String>,
    pub product: Option<String>,
    pub district: Option<String>,
    pub crop: Option<String>,

    // 需求侧可选
    pub price: Option<f64>,
    pub genz_ratio: Option<f64>,
    pub google_trends_score: Option<f64>,
    pub month: Option<u32>,

    // 适宜度侧可选
    pub soil_type: Option<String>,
    pub soil_ph: Option<f64>,
    pub rainfall: Option<f64>,
    pub temperature: Option<f64>,
    pub irrigation: Option<u8>,
    pub distance_to_city: Option<f64>,
}

impl CombinedIntelligenceRequest {
    /// 补齐默认值; month 缺省时取 current_month
    pub fn into_features(
        self,
        current_month: u32,
    ) -> ApiResult<(DemandFeatures, SuitabilityFeatures)> {
        let region = require_str("region", &self.region)?.to_string();
        let product = require_str("product", &self.product)?.to_string();
        let district = require_str("district", &self.district)?.to_string();
        let crop = require_str("crop", &self.crop)?.to_string();

        let month = check_month("month", self.month.unwrap_or(current_month))?;
        let irrigation = check_flag(
            "irrigation",
            self.irrigation.unwrap_or(defaults::IRRIGATION),
        )?;

        let demand = DemandFeatures {
            region,
            product,
            price: self.price.unwrap_or(defaults::PRICE),
            genz_ratio: self.genz_ratio.unwrap_or(defaults::GENZ_RATIO),
            google_trends_score: self
                .google_trends_score
                .unwrap_or(defaults::GOOGLE_TRENDS_SCORE),
            month,
            quarter: DemandFeatures::quarter_of(month),
        };

        let suitability = SuitabilityFeatures {
            district,
            crop,
            soil_ph: self.soil_ph.unwrap_or(defaults::SOIL_PH),
            soil_type: self
                .soil_type
                .unwrap_or_else(|| defaults::SOIL_TYPE.to_string()),
            rainfall: self.rainfall.unwrap_or(defaults::RAINFALL),
            temperature: self.temperature.unwrap_or(defaults::TEMPERATURE),
            irrigation,
            distance_to_city: self.distance_to_city.unwrap_or(defaults::DISTANCE_TO_CITY),
        };

        Ok((demand, suitability))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedIntelligenceResponse {
    pub demand_forecast: DemandForecast,
    pub suitability_analysis: SuitabilityAnalysis,
    pub priority_score: f64,
    pub recommendation: ProductionRecommendation,
}

impl From<CombinedIntelligence> for CombinedIntelligenceResponse {
    fn from(report: CombinedIntelligence) -> Self {
        Self {
            demand_forecast: round_forecast(report.demand_forecast),
            suitability_analysis: round_analysis(report.suitability_analysis),
            priority_score: round_to(report.priority_score, 3),
            recommendation: report.recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_defaults() {
        let request = CombinedIntelligenceRequest {
            region: Some("Delhi".to_string()),
            product: Some("Tofu".to_string()),
            district: Some("Medak".to_string()),
            crop: Some("Soy".to_string()),
            ..Default::default()
        };

        let (demand, suitability) = request.into_features(11).unwrap();
        assert_eq!(demand.price, 200.0);
        assert_eq!(demand.genz_ratio, 0.5);
        assert_eq!(demand.google_trends_score, 70.0);
        assert_eq!(demand.month, 11);
        assert_eq!(demand.quarter, 4);
        assert_eq!(suitability.soil_type, "Loamy");
        assert_eq!(suitability.soil_ph, 7.0);
        assert_eq!(suitability.rainfall, 600.0);
        assert_eq!(suitability.temperature, 25.0);
        assert_eq!(suitability.irrigation, 1);
        assert_eq!(suitability.distance_to_city, 50.0);
    }

    #[test]
    fn test_combined_missing_required() {
        let request = CombinedIntelligenceRequest {
            region: Some("Delhi".to_string()),
            product: Some("Tofu".to_string()),
            crop: Some("Soy".to_string()),
            ..Default::default()
        };
        let err = request.into_features(1).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: district");
    }

    #[test]
    fn test_forecast_quarter_derived() {
        let request = ForecastDemandRequest {
            region: Some("Mumbai".to_string()),
            product: Some("Oat Milk".to_string()),
            price: Some(180.0),
            genz_ratio: Some(0.4),
            google_trends_score: Some(55.0),
            month: Some(8),
            quarter: None,
        };
        assert_eq!(request.into_features().unwrap().quarter, 3);
    }

    #[test]
    fn test_optimize_request_reports_first_missing() {
        let request = OptimizeSupplyChainRequest {
            destination_city: Some("Delhi".to_string()),
            product: None,
            required_quantity: None,
        };
        let err = request.into_allocation_request().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: product");
    }

    #[test]
    fn test_allocation_response_rounding() {
        let result = AllocationResult {
            optimal_sources: vec![SourceAllocation {
                source_district: "Warangal".to_string(),
                allocated_quantity: 33.333_333,
                allocation_percentage: 33.333_333,
                transport_cost: 412.456,
                total_cost: 13.748_53,
                suitability_score: 0.777_77,
                priority_score: 0.5,
            }],
            total_cost: 13.748_53,
            waste_reduction_percentage: 10.0,
            remaining_quantity: 66.67,
        };

        let response = OptimizeSupplyChainResponse::from(&result);
        let source = &response.optimal_sources[0];
        assert_eq!(source.allocation_percentage, 33.33);
        assert_eq!(source.transport_cost, 412.46);
        assert_eq!(source.total_cost, 13.75);
        assert_eq!(source.suitability_score, 0.778);
        assert_eq!(response.total_cost, 13.75);
    }
}
