//! Prometheus metrics handler.

use std::fmt::Write as _;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use strum::IntoEnumIterator;

use crate::server::types::AppState;
use crate::tools::ToolKind;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let gateway = &state.gateway;
    let stats = gateway.stats();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "# HELP seo_toolbox_uptime_seconds Seconds since the server started\n\
         # TYPE seo_toolbox_uptime_seconds gauge\n\
         seo_toolbox_uptime_seconds {}",
        state.start_time.elapsed().as_secs_f64()
    );

    let _ = writeln!(
        out,
        "\n# HELP seo_toolbox_tool_requests_total Tool requests received\n\
         # TYPE seo_toolbox_tool_requests_total counter"
    );
    for tool in ToolKind::iter() {
        let _ = writeln!(
            out,
            "seo_toolbox_tool_requests_total{{tool=\"{tool}\"}} {}",
            gateway.request_count(tool)
        );
    }

    let _ = writeln!(
        out,
        "\n# HELP seo_toolbox_rate_limited_total Tool requests rejected by the daily quota\n\
         # TYPE seo_toolbox_rate_limited_total counter"
    );
    for tool in ToolKind::iter() {
        let _ = writeln!(
            out,
            "seo_toolbox_rate_limited_total{{tool=\"{tool}\"}} {}",
            gateway.rate_limited_count(tool)
        );
    }

    let _ = writeln!(
        out,
        "\n# HELP seo_toolbox_errors_total Fetch failures and unexpected faults\n\
         # TYPE seo_toolbox_errors_total counter\n\
         seo_toolbox_errors_total {}\n\
         \n# HELP seo_toolbox_warnings_total Pages missing a title or meta description\n\
         # TYPE seo_toolbox_warnings_total counter\n\
         seo_toolbox_warnings_total {}\n\
         \n# HELP seo_toolbox_info_total Lead, quota and validation events\n\
         # TYPE seo_toolbox_info_total counter\n\
         seo_toolbox_info_total {}",
        stats.total_errors(),
        stats.total_warnings(),
        stats.total_info()
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        out,
    )
        .into_response()
}
