// ==========================================
// VOIS 供需智能服务 - 区县适宜度表
// ==========================================
// 同一 (district, crop) 多条记录时, 表序第一条生效
// ==========================================

use crate::domain::SuitabilityRecord;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct SuitabilityTable {
    records: Vec<SuitabilityRecord>,
    // (district, crop) -> 首条记录下标
    first_match: HashMap<(String, String), usize>,
}

impl SuitabilityTable {
    pub fn new(records: Vec<SuitabilityRecord>) -> Self {
        let mut first_match = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            first_match
                .entry((record.district.clone(), record.crop.clone()))
                .or_insert(idx);
        }
        Self {
            records,
            first_match,
        }
    }

    /// 查询 (区县, 作物) 的适宜度记录
    pub fn lookup(&self, district: &str, crop: &str) -> Option<&SuitabilityRecord> {
        self.first_match
            .get(&(district.to_string(), crop.to_string()))
            .map(|&i| &self.records[i])
    }

    /// 查询适宜度得分
    pub fn score(&self, district: &str, crop: &str) -> Option<f64> {
        self.lookup(district, crop).map(|r| r.suitability_score)
    }

    pub fn records(&self) -> &[SuitabilityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
