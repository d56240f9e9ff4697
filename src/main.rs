use std::net::SocketAddr;
use std::path::Path;

use dotenvy::dotenv;
use tracing::{info, warn};

use luckysite::bootstrap::app_context::AppContext;
use luckysite::bootstrap::config::Config;
use luckysite::presentation::http::build_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "luckysite=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting luckysite server");

    if cfg.access_password.is_some() {
        info!("password protection enabled");
    } else {
        info!("password protection disabled (set ACCESS_PASSWORD to enable)");
        if cfg.is_production {
            warn!("running in production without a password gate");
        }
    }

    for dir in [&cfg.lucky_dir, &cfg.static_dir] {
        if !Path::new(dir).is_dir() {
            warn!(%dir, "content directory missing; requests under it will 404");
        }
    }

    let ctx = AppContext::new(cfg.clone());
    let app = build_app(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    info!(%addr, "HTTP server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
