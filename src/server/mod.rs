//! HTTP server.
//!
//! Routes:
//! - `POST /api/tools/{tool}` - the four tools, plus alias slugs
//! - `GET /health` - liveness
//! - `GET /` - service index
//! - `GET /status` - JSON counters
//! - `GET /metrics` - Prometheus-compatible counters
//!
//! Everything else gets a JSON 404 listing the available endpoints, and a
//! panicking handler yields a generic JSON 500.

mod client;
mod handlers;
mod middleware;
mod types;

use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::{Config, MAX_REQUEST_BODY_SIZE};
use crate::error_handling::InitializationError;
use crate::initialization::init_client;
use crate::tools::TOOLS_PATH_PREFIX;

pub use client::{last_forwarded_for, ClientIdentity, UNKNOWN_CLIENT};
pub use handlers::available_endpoints;
pub use types::{AppState, HealthResponse, RootResponse, StatusResponse};

/// Builds the router with all routes and layers.
///
/// A known path hit with the wrong method gets the same JSON 404 as an
/// unknown path.
pub fn router(state: AppState) -> Router {
    let not_found = handlers::not_found_handler;
    Router::new()
        .route("/health", get(handlers::health_handler).fallback(not_found))
        .route("/", get(handlers::root_handler).fallback(not_found))
        .route("/status", get(handlers::status_handler).fallback(not_found))
        .route("/metrics", get(handlers::metrics_handler).fallback(not_found))
        .route(
            &format!("{TOOLS_PATH_PREFIX}{{tool}}"),
            post(handlers::tool_handler).fallback(not_found),
        )
        .fallback(handlers::not_found_handler)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}

/// Serves `state` on an already-bound listener until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = router(state).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

/// Builds shared resources from `config`, binds, and serves.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let client = init_client(&config)?;
    let state = AppState::from_config(&config, client);

    let addr = SocketAddr::new(config.bind, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| InitializationError::BindError { addr, source })?;

    info!("SEO tool API listening on http://{addr}/");
    info!("  - Health: http://{addr}/health");
    info!("  - Tools:  http://{addr}{TOOLS_PATH_PREFIX}");
    if let Some(limit) = config.daily_limit {
        info!("Daily limit override: {limit} requests per tool");
    }

    serve(listener, state).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {e}");
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
                log::warn!("Failed to listen for SIGTERM: {e}");
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
    info!("Shutdown signal received, draining connections");
}
