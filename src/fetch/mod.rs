//! Single-shot page fetching.
//!
//! `fetch_page` issues exactly one GET for an already-validated URL and
//! never fails: network errors degrade to a zeroed [`FetchResult`] so the
//! analysis pipeline can proceed uniformly. There are no retries.
//!
//! The body is streamed and cut at [`MAX_RESPONSE_BODY_SIZE`]; the rest of
//! the response is never read.
//!
//! The timeout and User-Agent live on the shared `reqwest::Client`
//! (see `initialization::init_client`).

mod types;

use std::time::Instant;

use log::{debug, warn};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{ErrorType, ProcessingStats, WarningType};

pub use types::FetchResult;

/// Fetches `url` once and reports status, latency, size and body.
///
/// Non-2xx responses are still responses: their status and body are
/// returned as-is. Timeouts, DNS and connection failures, and body read
/// failures produce a degraded result (`raw_html: None`,
/// `content_length: 0`, `status_code` 0 unless the error carries one) and
/// are counted in `stats`.
pub async fn fetch_page(client: &reqwest::Client, url: &str, stats: &ProcessingStats) -> FetchResult {
    fetch_page_capped(client, url, stats, MAX_RESPONSE_BODY_SIZE).await
}

pub(crate) async fn fetch_page_capped(
    client: &reqwest::Client,
    url: &str,
    stats: &ProcessingStats,
    max_body: usize,
) -> FetchResult {
    let start = Instant::now();
    debug!("Fetching {url}");

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return degrade(url, &e, start, stats),
    };

    let status_code = response.status().as_u16();
    match read_body_capped(response, max_body).await {
        Ok((body, truncated)) => {
            if truncated {
                stats.increment_warning(WarningType::BodyTruncated);
                warn!("Body of {url} exceeds {max_body} bytes; analysing the first {max_body}");
            }
            let result = FetchResult {
                status_code,
                response_time_ms: elapsed_ms(start),
                content_length: body.len(),
                truncated,
                raw_html: Some(String::from_utf8_lossy(&body).into_owned()),
            };
            debug!(
                "Fetched {url}: status {} in {}ms ({} bytes)",
                result.status_code, result.response_time_ms, result.content_length
            );
            result
        }
        Err(e) => {
            let mut result = degrade(url, &e, start, stats);
            result.status_code = status_code;
            result
        }
    }
}

/// Reads at most `max_body` bytes. The flag is set when more were available.
async fn read_body_capped(
    mut response: reqwest::Response,
    max_body: usize,
) -> Result<(Vec<u8>, bool), reqwest::Error> {
    let mut buf = Vec::with_capacity(max_body.min(16 * 1024));
    while let Some(chunk) = response.chunk().await? {
        let room = max_body - buf.len();
        if chunk.len() > room {
            buf.extend_from_slice(&chunk[..room]);
            return Ok((buf, true));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok((buf, false))
}

fn degrade(url: &str, error: &reqwest::Error, start: Instant, stats: &ProcessingStats) -> FetchResult {
    let error_type = categorize_fetch_error(error);
    stats.increment_error(error_type);
    let result = FetchResult::degraded(
        error.status().map(|s| s.as_u16()).unwrap_or(0),
        elapsed_ms(start),
    );
    warn!(
        "Fetch of {url} degraded after {}ms ({error_type}): {error}",
        result.response_time_ms
    );
    result
}

/// Categorizes a `reqwest::Error` from a page fetch into an `ErrorType`.
pub fn categorize_fetch_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::FetchTimeoutError
    } else if error.is_connect() {
        ErrorType::FetchConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::FetchBodyError
    } else if error.is_request() || error.is_builder() || error.is_redirect() {
        ErrorType::FetchRequestError
    } else {
        ErrorType::FetchOtherError
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
