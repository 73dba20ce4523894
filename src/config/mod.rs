// ==========================================
// VOIS 供需智能服务 - 配置层
// ==========================================
// 职责: 进程级配置 (环境变量) 与静态产品-作物映射
// 生命周期: 启动时读取一次, 之后只读
// ==========================================

pub mod app_config;
pub mod crop_mapping;

// 重导出核心配置
pub use app_config::{config_keys, AppConfig};
pub use crop_mapping::CropMapping;
