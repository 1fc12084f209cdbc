use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: load configuration, then serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env()?;
    run_with_config(cfg).await
}

/// Connect the pool, build the router and serve with graceful shutdown.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    let state = ServerState::new(db);

    let app: Router = routes::build_router(state, build_cors());

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "superhero api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(%addr, "superhero api stopped accepting connections");
    Ok(())
}

async fn shutdown_signal() {
    // 等待 Ctrl+C；监听失败时永不返回，避免误停机
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    } else {
        std::future::pending::<()>().await;
    }
}
