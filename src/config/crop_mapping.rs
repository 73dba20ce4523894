// ==========================================
// VOIS 供需智能服务 - 产品/作物映射
// ==========================================
// 静态配置: 消费端产品名 -> 原料作物
// 未收录的产品由 CropResolver 走首词回退
// ==========================================

use std::collections::HashMap;

/// 内置映射表
const BUILTIN_MAPPINGS: &[(&str, &str)] = &[
    ("Oat Milk", "Oats"),
    ("Soy Products", "Soy"),
    ("Chickpea Flour", "Chickpea"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropMapping {
    entries: HashMap<String, String>,
}

impl CropMapping {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 精确查找 (区分大小写)
    pub fn get(&self, product: &str) -> Option<&str> {
        self.entries.get(product).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CropMapping {
    fn default() -> Self {
        Self::from_pairs(BUILTIN_MAPPINGS.iter().copied())
    }
}
