// ==========================================
// VOIS 供需智能服务 - HTTP 路由
// ==========================================
// 职责: axum 路由 + 请求体提取 + 错误响应映射
// 业务逻辑全部委托给 SupplyChainApi
// ==========================================

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::api::{
    ApiError, ApiResult, CombinedIntelligenceRequest, CombinedIntelligenceResponse,
    ForecastDemandRequest, OptimizeSupplyChainRequest, OptimizeSupplyChainResponse,
    PredictSuitabilityRequest,
};
use crate::app::state::AppState;
use crate::domain::{DemandForecast, SuitabilityAnalysis};

/// 健康检查响应文本
pub const HEALTH_TEXT: &str = "VOIS (V-Pulse) API is Online";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/optimize_supply_chain", post(optimize_supply_chain))
        .route("/combined_intelligence", post(combined_intelligence))
        .route("/predict_suitability", post(predict_suitability))
        .route("/forecast_vegan_demand", post(forecast_vegan_demand))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==========================================
// 错误响应
// ==========================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "请求处理失败");
        }

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// 请求体解析失败统一按校验错误处理
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::ValidationError(rejection.body_text()))
}

// ==========================================
// Handlers
// ==========================================

async fn health_check() -> &'static str {
    HEALTH_TEXT
}

async fn optimize_supply_chain(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeSupplyChainRequest>, JsonRejection>,
) -> ApiResult<Json<OptimizeSupplyChainResponse>> {
    let request = parse_body(payload)?;
    state
        .supply_chain_api
        .optimize_supply_chain(request)
        .map(Json)
}

async fn combined_intelligence(
    State(state): State<AppState>,
    payload: Result<Json<CombinedIntelligenceRequest>, JsonRejection>,
) -> ApiResult<Json<CombinedIntelligenceResponse>> {
    let request = parse_body(payload)?;
    state
        .supply_chain_api
        .combined_intelligence(request)
        .map(Json)
}

async fn predict_suitability(
    State(state): State<AppState>,
    payload: Result<Json<PredictSuitabilityRequest>, JsonRejection>,
) -> ApiResult<Json<SuitabilityAnalysis>> {
    let request = parse_body(payload)?;
    state.supply_chain_api.predict_suitability(request).map(Json)
}

async fn forecast_vegan_demand(
    State(state): State<AppState>,
    payload: Result<Json<ForecastDemandRequest>, JsonRejection>,
) -> ApiResult<Json<DemandForecast>> {
    let request = parse_body(payload)?;
    state
        .supply_chain_api
        .forecast_vegan_demand(request)
        .map(Json)
}
