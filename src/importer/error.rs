// ==========================================
// VOIS 供需智能服务 - 导入模块错误类型
// ==========================================
// 行号从 1 开始计数, 不含表头
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("不支持的表格格式: {0} (支持 csv / xlsx / xls)")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    // ===== 表结构 =====
    #[error("缺少必需列: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    // ===== 行级错误 =====
    #[error("第 {row} 行字段映射失败: {message}")]
    FieldMappingError { row: usize, message: String },

    #[error("第 {row} 行字段 {field} 类型转换失败: {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("第 {row} 行字段 {field} 取值 {value} 超出范围 [{min}, {max}]")]
    ValueRangeError {
        row: usize,
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
