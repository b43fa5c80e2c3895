pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use api::{routes, AppState};
pub use config::{AppConfig, CliConfig};
pub use core::forecast::ForecastService;
pub use utils::error::{Result, WeatherError};

use std::net::SocketAddr;
use tokio::net::TcpListener;

/// 啟動 HTTP 服務，直到收到停止訊號
pub async fn run_server(config: AppConfig) -> Result<()> {
    if !config.has_api_key() {
        tracing::warn!("⚠️ CWA_API_KEY is not set, weather requests will fail with 500");
    }

    let app = routes(AppState::from_config(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🚀 Server running at http://localhost:{}", config.port);
    tracing::info!("📍 Environment: {}", config.environment);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
