//! Server state and response bodies.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::config::Config;
use crate::rate_limiter::DailyQuota;
use crate::tools::ToolGateway;

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ToolGateway>,
    pub start_time: Arc<Instant>,
    /// Identify clients by the first `X-Forwarded-For` entry.
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(gateway: ToolGateway, trust_forwarded_for: bool) -> Self {
        Self {
            gateway: Arc::new(gateway),
            start_time: Arc::new(Instant::now()),
            trust_forwarded_for,
        }
    }

    /// State with the default lead store and data services.
    pub fn from_config(config: &Config, client: reqwest::Client) -> Self {
        let gateway = ToolGateway::new(client, DailyQuota::new(config.daily_limit));
        Self::new(gateway, config.trust_forwarded_for)
    }
}

/// JSON response for `/health`
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}

/// JSON response for `/`
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub tools: Vec<String>,
}

/// JSON response for `/status`
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_seconds: f64,
    pub tools: BTreeMap<&'static str, ToolCounts>,
    pub total_requests: usize,
    pub total_rate_limited: usize,
    pub total_leads: usize,
    pub tracked_quota_keys: usize,
    pub errors: CategoryCounts,
    pub warnings: CategoryCounts,
    pub info: CategoryCounts,
}

#[derive(Serialize)]
pub struct ToolCounts {
    pub daily_limit: u32,
    pub requests: usize,
    pub rate_limited: usize,
    pub leads: usize,
}

#[derive(Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    #[serde(flatten)]
    pub by_type: BTreeMap<&'static str, usize>,
}
