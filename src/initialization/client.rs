//! HTTP client initialization.

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Builds the shared client used by the page fetcher.
///
/// Every fetch inherits the configured timeout and User-Agent. Redirects
/// follow reqwest's default policy (up to 10 hops).
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built
/// (for example an invalid User-Agent header value).
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(config.fetch_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
