//! seo_toolbox library: the free SEO tools API
//!
//! Four lead-generation tools behind a JSON HTTP API, each wrapped in a
//! per-client daily quota and optional email capture:
//! - website analyzer (fetch a page, extract signals, score it)
//! - meta tag generator (current tags plus title/description candidates)
//! - keyword research and backlink checker (pluggable data services)
//!
//! # Example
//!
//! ```no_run
//! use seo_toolbox::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     port: 8080,
//!     daily_limit: Some(100),
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The page analysis pieces are usable on their own:
//!
//! ```
//! use seo_toolbox::parse::extract_signals;
//! use seo_toolbox::seo::score;
//!
//! let signals = extract_signals("<title>Example</title><h1>Hello</h1>");
//! assert_eq!(signals.title.as_deref(), Some("Example"));
//! assert_eq!(score(&signals), 25);
//! ```

pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod leads;
pub mod parse;
pub mod rate_limiter;
pub mod seo;
pub mod server;
pub mod services;
pub mod tools;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use server::{router, run_server, AppState};
pub use tools::{ToolGateway, ToolKind, ToolRequest};
