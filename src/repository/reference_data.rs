// ==========================================
// VOIS 供需智能服务 - 参考数据集合
// ==========================================
// 两张参考表的只读组合, 由 AppState 持有并在请求间共享
// ==========================================

use crate::repository::{RouteTable, SuitabilityTable};

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub routes: RouteTable,
    pub suitability: SuitabilityTable,
}

impl ReferenceData {
    pub fn new(routes: RouteTable, suitability: SuitabilityTable) -> Self {
        Self {
            routes,
            suitability,
        }
    }
}
