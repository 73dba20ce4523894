// ==========================================
// VOIS 供需智能服务 - 物流线路表
// ==========================================

use crate::domain::Route;
use std::collections::HashMap;

// ==========================================
// RouteTable - 物流线路只读表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    // (destination_city, crop) -> 行下标 (升序, 即原表顺序)
    index: HashMap<(String, String), Vec<usize>>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        let mut index: HashMap<(String, String), Vec<usize>> = HashMap::new();
        for (idx, route) in routes.iter().enumerate() {
            index
                .entry((route.destination_city.clone(), route.crop.clone()))
                .or_default()
                .push(idx);
        }
        Self { routes, index }
    }

    /// 查询 (目的城市, 作物) 的全部线路, 保持原表顺序
    ///
    /// 精确匹配, 区分大小写; 无匹配时返回空列表
    pub fn find_routes(&self, destination_city: &str, crop: &str) -> Vec<&Route> {
        self.index
            .get(&(destination_city.to_string(), crop.to_string()))
            .map(|rows| rows.iter().map(|&i| &self.routes[i]).collect())
            .unwrap_or_default()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
