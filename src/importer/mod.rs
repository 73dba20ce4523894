// ==========================================
// VOIS 供需智能服务 - 导入层
// ==========================================
// 职责: 参考表文件解析 (CSV / Excel) -> 类型化行记录
// 管道: 文件解析 -> 字段映射与类型转换 -> 取值范围校验
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod table_loader;

// 重导出
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRecord, UniversalFileParser};
pub use table_loader::TableLoader;
