// ==========================================
// VOIS 供需智能服务 - HTTP 服务入口
// ==========================================
// 环境变量见 config::config_keys
// ==========================================

use anyhow::Context;
use vois_supply::app::{create_router, AppState};
use vois_supply::config::AppConfig;
use vois_supply::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", vois_supply::APP_NAME);
    tracing::info!("系统版本: {}", vois_supply::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        models_dir = %config.models_dir.display(),
        "配置已加载"
    );

    let state = AppState::load(&config);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定地址 {}", addr))?;

    tracing::info!("服务已启动: http://{}", addr);
    axum::serve(listener, app).await.context("HTTP 服务异常退出")?;

    Ok(())
}
