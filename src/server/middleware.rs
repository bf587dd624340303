//! Request logging.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};

use super::client::UNKNOWN_CLIENT;

/// Logs `METHOD path - peer` with the status and latency of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = start.elapsed().as_millis();
    if status.is_server_error() {
        warn!("{method} {path} - {peer} -> {status} in {elapsed}ms");
    } else {
        info!("{method} {path} - {peer} -> {status} in {elapsed}ms");
    }
    response
}
