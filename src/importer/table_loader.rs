// ==========================================
// VOIS 供需智能服务 - 参考表加载器
// ==========================================
// 职责: 文件 -> RouteTable / SuitabilityTable
// 约束: 任一行失败即整表失败 (不做部分加载)
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{columns, FieldMapper};
use crate::importer::file_parser::{RawRecord, UniversalFileParser};
use crate::repository::{RouteTable, SuitabilityTable};
use std::path::Path;
use tracing::instrument;

pub struct TableLoader {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl TableLoader {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
        }
    }

    /// 加载物流线路表
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load_routes(&self, path: &Path) -> ImportResult<RouteTable> {
        let records = self.parser.parse(path)?;
        self.check_columns(&records, columns::ROUTE_REQUIRED)?;
        let routes = records
            .iter()
            .map(|row| self.mapper.map_to_route(row))
            .collect::<ImportResult<Vec<_>>>()?;

        tracing::info!("物流线路表加载完成: {} 行", routes.len());
        Ok(RouteTable::new(routes))
    }

    /// 加载适宜度表
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load_suitability(&self, path: &Path) -> ImportResult<SuitabilityTable> {
        let records = self.parser.parse(path)?;
        self.check_columns(&records, columns::SUITABILITY_REQUIRED)?;
        let rows = records
            .iter()
            .map(|row| self.mapper.map_to_suitability(row))
            .collect::<ImportResult<Vec<_>>>()?;

        tracing::info!("适宜度表加载完成: {} 行", rows.len());
        Ok(SuitabilityTable::new(rows))
    }

    /// 空表 (仅表头) 视为合法
    fn check_columns(&self, records: &[RawRecord], required: &[&str]) -> ImportResult<()> {
        match records.first() {
            Some(first) => self.mapper.check_columns(first, required),
            None => Ok(()),
        }
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}
