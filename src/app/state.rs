// ==========================================
// VOIS 供需智能服务 - 应用状态
// ==========================================
// 职责: 启动时一次性加载参考表与模型, 构建只读共享上下文
// 约束: 加载失败只记 warn, 对应能力标记为未加载, 服务照常启动
// ==========================================

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::SupplyChainApi;
use crate::config::{AppConfig, CropMapping};
use crate::importer::TableLoader;
use crate::predictor::{
    DemandPredictor, SharedDemandPredictor, SharedSuitabilityPredictor, SuitabilityPredictor,
};
use crate::repository::ReferenceData;

/// 应用状态
///
/// 请求之间共享, 构建后不可变, 无锁
#[derive(Clone)]
pub struct AppState {
    pub supply_chain_api: Arc<SupplyChainApi>,
}

impl AppState {
    /// 由已加载的组件直接构建 (测试与嵌入场景)
    pub fn new(supply_chain_api: SupplyChainApi) -> Self {
        Self {
            supply_chain_api: Arc::new(supply_chain_api),
        }
    }

    /// 按配置加载参考表与模型制品
    pub fn load(config: &AppConfig) -> Self {
        info!("==================================================");
        info!("正在加载参考数据与模型...");

        let reference_data = Self::load_reference_data(config);
        let suitability = Self::load_suitability_predictor(config);
        let demand = Self::load_demand_predictor(config);

        let api = SupplyChainApi::new(reference_data, suitability, demand, CropMapping::default());
        info!(
            data_loaded = api.is_data_loaded(),
            suitability_model_loaded = api.is_suitability_model_loaded(),
            demand_model_loaded = api.is_demand_model_loaded(),
            "AppState初始化完成"
        );
        info!("==================================================");

        Self::new(api)
    }

    /// 两张表都加载成功才视为数据可用
    fn load_reference_data(config: &AppConfig) -> Option<Arc<ReferenceData>> {
        let loader = TableLoader::new();

        let routes_path = config.routes_path();
        let routes = match loader.load_routes(&routes_path) {
            Ok(routes) => routes,
            Err(e) => {
                warn!(path = %routes_path.display(), error = %e, "物流线路表加载失败");
                return None;
            }
        };

        let suitability_path = config.suitability_path();
        let suitability = match loader.load_suitability(&suitability_path) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %suitability_path.display(), error = %e, "适宜度表加载失败");
                return None;
            }
        };

        Some(Arc::new(ReferenceData::new(routes, suitability)))
    }

    fn load_suitability_predictor(config: &AppConfig) -> Option<SharedSuitabilityPredictor> {
        let path = config.suitability_model_path();
        match SuitabilityPredictor::load(&path) {
            Ok(predictor) => {
                info!(path = %path.display(), "适宜度模型已加载");
                let shared: SharedSuitabilityPredictor = Arc::new(predictor);
                Some(shared)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "适宜度模型加载失败");
                None
            }
        }
    }

    fn load_demand_predictor(config: &AppConfig) -> Option<SharedDemandPredictor> {
        let path = config.demand_model_path();
        match DemandPredictor::load(&path) {
            Ok(predictor) => {
                info!(path = %path.display(), "需求模型已加载");
                let shared: SharedDemandPredictor = Arc::new(predictor);
                Some(shared)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "需求模型加载失败");
                None
            }
        }
    }
}
