// ==========================================
// VOIS 供需智能服务 - 字段映射器实现
// ==========================================
// 职责: 原始行 -> 领域实体 (Route / SuitabilityRecord) 的类型转换与范围校验
// ==========================================

use crate::domain::{Route, SuitabilityRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRecord;

/// 列名常量
pub mod columns {
    pub const SOURCE_DISTRICT: &str = "source_district";
    pub const DESTINATION_CITY: &str = "destination_city";
    pub const CROP: &str = "crop";
    pub const TRANSPORT_COST: &str = "transport_cost";
    pub const SUPPLY_QUANTITY: &str = "supply_quantity";
    pub const DISTANCE: &str = "distance";
    pub const PROCESSING_CAPACITY: &str = "processing_capacity";
    pub const STORAGE_COST: &str = "storage_cost";

    pub const DISTRICT: &str = "district";
    pub const SUITABILITY_SCORE: &str = "suitability_score";
    pub const SOIL_PH: &str = "soil_ph";
    pub const SOIL_TYPE: &str = "soil_type";
    pub const RAINFALL: &str = "rainfall";
    pub const TEMPERATURE: &str = "temperature";
    pub const IRRIGATION: &str = "irrigation";
    pub const YIELD_PER_ACRE: &str = "yield_per_acre";
    pub const DISTANCE_TO_CITY: &str = "distance_to_city";

    /// 物流线路表必需列
    pub const ROUTE_REQUIRED: &[&str] = &[
        SOURCE_DISTRICT,
        DESTINATION_CITY,
        CROP,
        TRANSPORT_COST,
        SUPPLY_QUANTITY,
    ];

    /// 适宜度表必需列
    pub const SUITABILITY_REQUIRED: &[&str] = &[DISTRICT, CROP, SUITABILITY_SCORE];
}

pub struct FieldMapper;

impl FieldMapper {
    // ==========================================
    // 表结构校验
    // ==========================================

    /// 以首行的列集合检查必需列, 一次报告全部缺失列
    pub fn check_columns(&self, first_row: &RawRecord, required: &[&str]) -> ImportResult<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|column| !first_row.fields.contains_key(**column))
            .map(|column| column.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns { columns: missing })
        }
    }

    // ==========================================
    // 实体映射
    // ==========================================

    /// 物流线路行映射
    pub fn map_to_route(&self, row: &RawRecord) -> ImportResult<Route> {
        let transport_cost = self.require_f64(row, columns::TRANSPORT_COST)?;
        let supply_quantity = self.require_f64(row, columns::SUPPLY_QUANTITY)?;
        self.check_range(row, columns::TRANSPORT_COST, transport_cost, 0.0, f64::MAX)?;
        self.check_range(row, columns::SUPPLY_QUANTITY, supply_quantity, 0.0, f64::MAX)?;

        Ok(Route {
            source_district: self.require_string(row, columns::SOURCE_DISTRICT)?,
            destination_city: self.require_string(row, columns::DESTINATION_CITY)?,
            crop: self.require_string(row, columns::CROP)?,
            transport_cost,
            supply_quantity,
            distance: self.parse_f64(row, columns::DISTANCE)?,
            processing_capacity: self.parse_f64(row, columns::PROCESSING_CAPACITY)?,
            storage_cost: self.parse_f64(row, columns::STORAGE_COST)?,
        })
    }

    /// 适宜度行映射
    pub fn map_to_suitability(&self, row: &RawRecord) -> ImportResult<SuitabilityRecord> {
        let suitability_score = self.require_f64(row, columns::SUITABILITY_SCORE)?;
        self.check_range(row, columns::SUITABILITY_SCORE, suitability_score, 0.0, 1.0)?;

        Ok(SuitabilityRecord {
            district: self.require_string(row, columns::DISTRICT)?,
            crop: self.require_string(row, columns::CROP)?,
            suitability_score,
            soil_ph: self.parse_f64(row, columns::SOIL_PH)?,
            soil_type: self.get_string(row, columns::SOIL_TYPE),
            rainfall: self.parse_f64(row, columns::RAINFALL)?,
            temperature: self.parse_f64(row, columns::TEMPERATURE)?,
            irrigation: self.parse_u8(row, columns::IRRIGATION)?,
            yield_per_acre: self.parse_f64(row, columns::YIELD_PER_ACRE)?,
            distance_to_city: self.parse_f64(row, columns::DISTANCE_TO_CITY)?,
        })
    }

    // ==========================================
    // 字段提取
    // ==========================================

    /// 提取字符串字段（空串视为缺失）
    fn get_string(&self, row: &RawRecord, key: &str) -> Option<String> {
        row.get(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }

    fn require_string(&self, row: &RawRecord, key: &str) -> ImportResult<String> {
        self.get_string(row, key)
            .ok_or_else(|| ImportError::FieldMappingError {
                row: row.row_number,
                message: format!("必填字段缺失: {}", key),
            })
    }

    /// 解析浮点数 (可选)
    fn parse_f64(&self, row: &RawRecord, key: &str) -> ImportResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => match value.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(ImportError::TypeConversionError {
                    row: row.row_number,
                    field: key.to_string(),
                    message: format!("无法解析为浮点数: {}", value),
                }),
            },
        }
    }

    fn require_f64(&self, row: &RawRecord, key: &str) -> ImportResult<f64> {
        self.parse_f64(row, key)?
            .ok_or_else(|| ImportError::FieldMappingError {
                row: row.row_number,
                message: format!("必填字段缺失: {}", key),
            })
    }

    /// 解析 0/1 标志 (兼容 "1.0" 这类 Excel 数值单元格)
    fn parse_u8(&self, row: &RawRecord, key: &str) -> ImportResult<Option<u8>> {
        match self.parse_f64(row, key)? {
            None => Ok(None),
            Some(v) if v == 0.0 || v == 1.0 => Ok(Some(v as u8)),
            Some(v) => Err(ImportError::ValueRangeError {
                row: row.row_number,
                field: key.to_string(),
                value: v,
                min: 0.0,
                max: 1.0,
            }),
        }
    }

    fn check_range(
        &self,
        row: &RawRecord,
        key: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> ImportResult<()> {
        if value < min || value > max {
            return Err(ImportError::ValueRangeError {
                row: row.row_number,
                field: key.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}
