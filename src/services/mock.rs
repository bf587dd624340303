//! Placeholder collaborators returning random figures.

use async_trait::async_trait;
use rand::Rng;

use super::{BacklinkData, BacklinkService, KeywordData, KeywordService, SearchIntent};

const TOP_LINKING_DOMAINS: [&str; 4] = [
    "industry-blog.com",
    "news-site.com",
    "partner-site.org",
    "directory.net",
];

/// Random volume and difficulty, template related keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockKeywordService;

/// Random link count and authority, fixed top domains.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBacklinkService;

/// Queries of more than two words read as informational.
fn classify_intent(keyword: &str) -> SearchIntent {
    if keyword.split_whitespace().count() > 2 {
        SearchIntent::Informational
    } else {
        SearchIntent::Commercial
    }
}

fn related_keywords(keyword: &str) -> Vec<String> {
    vec![
        format!("best {keyword}"),
        format!("{keyword} guide"),
        format!("{keyword} tips"),
        format!("how to {keyword}"),
        format!("{keyword} tools"),
    ]
}

fn random_keyword_data(keyword: &str) -> KeywordData {
    let mut rng = rand::rng();
    KeywordData {
        volume: rng.random_range(100..10_100),
        difficulty: rng.random_range(0..100),
        intent: classify_intent(keyword),
        related_keywords: related_keywords(keyword),
    }
}

fn random_backlink_data() -> BacklinkData {
    let mut rng = rand::rng();
    BacklinkData {
        total_links: rng.random_range(100..5_100),
        domain_authority: rng.random_range(0..100),
        top_domains: TOP_LINKING_DOMAINS.iter().map(|d| d.to_string()).collect(),
    }
}

#[async_trait]
impl KeywordService for MockKeywordService {
    async fn analyze(&self, keyword: &str) -> anyhow::Result<KeywordData> {
        Ok(random_keyword_data(keyword))
    }
}

#[async_trait]
impl BacklinkService for MockBacklinkService {
    async fn check(&self, _domain: &str) -> anyhow::Result<BacklinkData> {
        Ok(random_backlink_data())
    }
}
