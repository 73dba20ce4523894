// ==========================================
// VOIS 供需智能服务 - 应用层
// ==========================================
// 职责: 共享上下文 + HTTP 集成
// ==========================================

pub mod routes;
pub mod state;

// 重导出
pub use routes::{create_router, HEALTH_TEXT};
pub use state::AppState;
