//! Configuration constants.
//!
//! This module defines the constants used throughout the service, including
//! timeouts, quota windows, size limits, and the identity reported by `/health`.

use std::time::Duration;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "conclusive-seo-backend";
/// Service version reported by the health and root endpoints
pub const SERVICE_VERSION: &str = "1.0.0";
/// Human-readable API name shown on the root endpoint
pub const API_TITLE: &str = "Conclusive Digital SEO Tool API";

/// Default listening port (overridable with `--port` or `PORT`)
pub const DEFAULT_PORT: u16 = 5000;
/// Default bind address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Page fetch timeout in seconds.
///
/// Applies to the whole request (connect, headers and body). The fetcher never
/// retries, so this is also the upper bound on time spent per analysed page.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent with every page fetch.
///
/// Identifies the tool honestly so site owners can recognise the traffic.
pub const DEFAULT_USER_AGENT: &str = "ConclusiveSEO/1.0 (+https://conclusive.digital)";

/// Length of the rolling free-tier quota window (24 hours)
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Number of tracked quota keys above which idle keys are swept on the next request
pub const RATE_LIMIT_SWEEP_THRESHOLD: usize = 10_000;

/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum fetched page body size in bytes (2MB).
///
/// Bytes past the cap are not read; the page is analysed from what was kept.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum accepted request body size (10MB)
pub const MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024;
