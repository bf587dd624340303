//! Caller identity used as the quota key.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::HeaderMap;

use super::types::AppState;

/// Shared bucket for callers whose address is unknown.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// The caller's identity: peer IP, or the last `X-Forwarded-For` entry when
/// the server trusts that header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity(pub String);

impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if state.trust_forwarded_for {
            if let Some(forwarded) = last_forwarded_for(&parts.headers) {
                return Ok(ClientIdentity(forwarded));
            }
        }

        let peer = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|ConnectInfo(addr)| addr.ip().to_string());
        Ok(ClientIdentity(
            peer.unwrap_or_else(|| UNKNOWN_CLIENT.to_string()),
        ))
    }
}

/// Last non-empty entry of `X-Forwarded-For`.
///
/// A proxy appends the address it saw, so earlier entries are whatever the
/// caller sent and cannot key a quota.
pub fn last_forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .rsplit(',')
        .map(str::trim)
        .find(|entry| !entry.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_last_forwarded_for() {
        let mut headers = HeaderMap::new();
        assert_eq!(last_forwarded_for(&headers), None);

        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7"));
        assert_eq!(last_forwarded_for(&headers).as_deref(), Some("203.0.113.7"));

        headers.insert("x-forwarded-for", HeaderValue::from_static(" , "));
        assert_eq!(last_forwarded_for(&headers), None);
    }

    #[test]
    fn test_spoofed_leading_entries_do_not_change_identity() {
        let mut headers = HeaderMap::new();
        for spoofed in ["1.1.1.1", "2.2.2.2, 3.3.3.3", "garbage"] {
            let value = format!("{spoofed}, 198.51.100.2");
            headers.insert(
                "x-forwarded-for",
                HeaderValue::from_str(&value).expect("valid header"),
            );
            assert_eq!(
                last_forwarded_for(&headers).as_deref(),
                Some("198.51.100.2")
            );
        }

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("198.51.100.2, 10.0.0.1, "),
        );
        assert_eq!(last_forwarded_for(&headers).as_deref(), Some("10.0.0.1"));
    }
}
