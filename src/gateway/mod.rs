//! Gateway 应用层
//!
//! HTTP 服务器和请求处理

pub mod extract;
mod handlers;
mod middleware;
mod state;

pub use handlers::{chat, respond};
pub use state::AppState;

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::providers::AzureOpenAIProvider;

pub async fn serve(config: Config) -> Result<()> {
    tracing::info!(
        endpoint = %config.azure.endpoint,
        deployment = %config.azure.deployment,
        api_version = %config.azure.api_version,
        "Azure OpenAI configured"
    );

    let provider = AzureOpenAIProvider::new(config.azure.clone())?;
    let state = AppState::new(Arc::new(provider));
    let app = build_router(state);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid listen address")?;
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// 构建路由，`/chat` 和 `/respond` 同时接受 GET 和 POST
pub fn build_router(state: AppState) -> Router {
    // 不限制请求体大小：带 `q` 时请求体内容无关，不能因为体积返回 413
    let relay_routes = Router::new()
        .route(
            "/chat",
            get(handlers::handle_chat).post(handlers::handle_chat),
        )
        .route(
            "/respond",
            get(handlers::handle_respond).post(handlers::handle_respond),
        )
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .merge(relay_routes)
        .route("/health", get(handlers::handle_health))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_logger))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    tokio::select! {
        _ = ctrl_c => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
