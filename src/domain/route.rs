// ==========================================
// VOIS 供需智能服务 - 参考数据领域模型
// ==========================================
// 数据来源: logistics_supply / crop_suitability 两张表
// 生命周期: 进程启动时加载一次,之后只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Route - 物流线路
// ==========================================
// 一条带价格、带容量上限的供货线路: 产地 -> 目的城市, 单一作物
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    // ===== 连接键 =====
    pub source_district: String,  // 产地 (区县)
    pub destination_city: String, // 目的城市
    pub crop: String,             // 作物

    // ===== 成本与容量 =====
    pub transport_cost: f64,  // 运输成本 (每 1000 单位)
    pub supply_quantity: f64, // 可供应量 (单位, >= 0)

    // ===== 附加列 (引擎不使用) =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>, // 距离 (km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_capacity: Option<f64>, // 加工能力 (吨/月)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_cost: Option<f64>, // 仓储成本 (每吨每月)
}

impl Route {
    /// 仅含引擎所需字段的构造函数
    pub fn new(
        source_district: &str,
        destination_city: &str,
        crop: &str,
        transport_cost: f64,
        supply_quantity: f64,
    ) -> Self {
        Self {
            source_district: source_district.to_string(),
            destination_city: destination_city.to_string(),
            crop: crop.to_string(),
            transport_cost,
            supply_quantity,
            distance: None,
            processing_capacity: None,
            storage_cost: None,
        }
    }
}

// ==========================================
// SuitabilityRecord - 区县作物适宜度
// ==========================================
// 同一 (district, crop) 可能出现多条, 上游不去重; 查询时取表序第一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityRecord {
    pub district: String,
    pub crop: String,
    pub suitability_score: f64, // [0, 1]

    // ===== 环境条件 (原表列, 引擎不使用) =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_ph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_per_acre: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_city: Option<f64>,
}

impl SuitabilityRecord {
    pub fn new(district: &str, crop: &str, suitability_score: f64) -> Self {
        Self {
            district: district.to_string(),
            crop: crop.to_string(),
            suitability_score,
            soil_ph: None,
            soil_type: None,
            rainfall: None,
            temperature: None,
            irrigation: None,
            yield_per_acre: None,
            distance_to_city: None,
        }
    }
}
