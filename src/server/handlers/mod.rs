//! HTTP handlers.

mod fallback;
mod info;
mod metrics;
mod status;
mod tools;

pub use fallback::{available_endpoints, handle_panic, not_found_handler};
pub use info::{health_handler, root_handler};
pub use metrics::metrics_handler;
pub use status::status_handler;
pub use tools::tool_handler;
