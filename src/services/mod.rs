//! Keyword and backlink data collaborators.
//!
//! The gateway only sees the traits. The bundled implementations in
//! [`mock`] return randomised placeholder figures; a real data provider can
//! be swapped in through `AppState` without touching the handlers.

mod mock;

use async_trait::async_trait;
use serde::Serialize;

pub use mock::{MockBacklinkService, MockKeywordService};

/// Likely purpose behind a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    Informational,
    Commercial,
}

/// Figures for a single keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordData {
    /// Estimated monthly searches.
    pub volume: u32,
    /// Ranking difficulty, 0-99.
    pub difficulty: u8,
    pub intent: SearchIntent,
    pub related_keywords: Vec<String>,
}

/// Figures for a domain's inbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklinkData {
    pub total_links: u32,
    /// Authority score, 0-99.
    pub domain_authority: u8,
    pub top_domains: Vec<String>,
}

#[async_trait]
pub trait KeywordService: Send + Sync {
    /// `keyword` is already trimmed and non-empty.
    async fn analyze(&self, keyword: &str) -> anyhow::Result<KeywordData>;
}

#[async_trait]
pub trait BacklinkService: Send + Sync {
    /// `domain` is already validated.
    async fn check(&self, domain: &str) -> anyhow::Result<BacklinkData>;
}
