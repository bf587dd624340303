//! Application initialization and resource setup.
//!
//! Shared resources are built once at startup and handed to the server:
//! - HTTP client (timeout and User-Agent for page fetches)
//! - Logger (plain or JSON)

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
