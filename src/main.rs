mod api;
mod application;
mod domain;
mod infrastructure;
mod ports;

use api::AppState;
use application::{RefundWorkflowService, SessionRegistry};
use infrastructure::{CatalogTranslator, HttpOrderActionsAdapter, StorefrontConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Refund Console...");

    // 店铺后台配置
    let config = StorefrontConfig::from_env()?;
    info!("Storefront admin API: {}", config.base_url);
    info!("Refund gateway: {}", config.refund_gateway_url);
    info!("Refund session idle TTL: {:?}", config.session_idle_ttl);

    let order_actions = Arc::new(HttpOrderActionsAdapter::new(config.clone()));
    let translator = Arc::new(CatalogTranslator::new(config.locale));

    let workflow = Arc::new(RefundWorkflowService::new(
        order_actions,
        translator,
        config.refund_gateway_url.clone(),
    ));

    let app_state = AppState {
        workflow,
        sessions: Arc::new(SessionRegistry::with_idle_ttl(config.session_idle_ttl)),
    };

    let app = api::create_router(app_state);

    // 启动服务器
    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    info!("Server listening on {}", addr);
    info!("Available endpoints:");
    info!("  GET    /health - Health check");
    info!("  POST   /api/admin/refund-sessions - Mount refund controls for an order");
    info!("  GET    /api/admin/refund-sessions/:session_id - Render refund controls");
    info!("  DELETE /api/admin/refund-sessions/:session_id - Unmount refund controls");
    info!("  POST   /api/admin/refund-sessions/:session_id/verify - Verify provider refund status");
    info!("  POST   /api/admin/refund-sessions/:session_id/refund - Open provider refund form");
    info!("  POST   /api/admin/refund-sessions/:session_id/proxy-refund - Proxy refund");
    info!("  POST   /api/admin/refund-sessions/:session_id/mark-refunded - Confirm refund completion");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
