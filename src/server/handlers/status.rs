//! JSON status handler.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use strum::IntoEnumIterator;

use crate::config::{SERVICE_NAME, SERVICE_VERSION};
use crate::server::types::{AppState, CategoryCounts, StatusResponse, ToolCounts};
use crate::tools::ToolKind;

/// `GET /status`: uptime, per-tool counters and processing statistics.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let gateway = &state.gateway;
    let stats = gateway.stats();

    let mut tools = BTreeMap::new();
    for tool in ToolKind::iter() {
        let leads = gateway.leads().count(Some(tool)).await.unwrap_or_else(|e| {
            log::warn!("Failed to count leads for {tool}: {e:#}");
            0
        });
        tools.insert(
            tool.as_str(),
            ToolCounts {
                daily_limit: gateway.quota().limit_for(tool),
                requests: gateway.request_count(tool),
                rate_limited: gateway.rate_limited_count(tool),
                leads,
            },
        );
    }

    Json(StatusResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        total_requests: tools.values().map(|t| t.requests).sum(),
        total_rate_limited: tools.values().map(|t| t.rate_limited).sum(),
        total_leads: tools.values().map(|t| t.leads).sum(),
        tracked_quota_keys: gateway.quota().tracked_keys(),
        tools,
        errors: CategoryCounts {
            total: stats.total_errors(),
            by_type: stats.error_snapshot(),
        },
        warnings: CategoryCounts {
            total: stats.total_warnings(),
            by_type: stats.warning_snapshot(),
        },
        info: CategoryCounts {
            total: stats.total_info(),
            by_type: stats.info_snapshot(),
        },
    })
}
