use serde::Serialize;

/// Outcome of a single page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchResult {
    /// HTTP status of the response; 0 when no response was received.
    pub status_code: u16,
    /// Wall-clock time from request start to end of body read (or failure).
    pub response_time_ms: u64,
    /// Length of the response body in bytes, up to the read cap.
    pub content_length: usize,
    /// The body was longer than the read cap and was cut there.
    pub truncated: bool,
    /// Body text; `None` when the fetch degraded.
    #[serde(skip)]
    pub raw_html: Option<String>,
}

impl FetchResult {
    pub(crate) fn degraded(status_code: u16, response_time_ms: u64) -> Self {
        Self {
            status_code,
            response_time_ms,
            content_length: 0,
            truncated: false,
            raw_html: None,
        }
    }

    /// True when no body was obtained.
    pub fn is_degraded(&self) -> bool {
        self.raw_html.is_none()
    }

    /// Body text, or the empty string for a degraded fetch.
    pub fn html(&self) -> &str {
        self.raw_html.as_deref().unwrap_or("")
    }
}
