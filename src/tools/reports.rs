//! Per-tool `results` payloads.

use serde::Serialize;

use crate::fetch::FetchResult;
use crate::parse::{HeadingCounts, PageSignals};
use crate::seo::{self, MetaSuggestion};
use crate::services::{BacklinkData, KeywordData, SearchIntent};

#[derive(Debug, Serialize)]
pub struct WebsiteAnalysis {
    pub status_code: u16,
    /// Milliseconds.
    pub response_time: u64,
    /// Bytes.
    pub page_size: usize,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub headings: HeadingCounts,
    pub seo_score: u8,
    pub insights: WebsiteInsights,
}

#[derive(Debug, Serialize)]
pub struct WebsiteInsights {
    pub quick_fixes: Vec<&'static str>,
    pub summary: String,
}

impl WebsiteAnalysis {
    pub fn new(fetch: &FetchResult, signals: PageSignals) -> Self {
        let summary = if fetch.is_degraded() {
            format!(
                "We could not load this page (gave up after {}ms), so no on-page signals were found.",
                fetch.response_time_ms
            )
        } else {
            format!(
                "Your website has {} H1 tags and loads in {}ms. Consider optimizing for better performance.",
                signals.headings.h1, fetch.response_time_ms
            )
        };
        Self {
            status_code: fetch.status_code,
            response_time: fetch.response_time_ms,
            page_size: fetch.content_length,
            seo_score: seo::score(&signals),
            insights: WebsiteInsights {
                quick_fixes: seo::quick_fixes(&signals),
                summary,
            },
            title: signals.title,
            meta_description: signals.meta_description,
            headings: signals.headings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetaReport {
    pub current_tags: CurrentTags,
    pub suggestions: Vec<MetaSuggestion>,
    pub seo_score: u8,
    pub improvements: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CurrentTags {
    pub title: Option<String>,
    pub description: Option<String>,
    pub title_length: usize,
    pub description_length: usize,
}

const KEYWORD_IN_TITLE_HINT: &str = "Include target keyword in title";

impl MetaReport {
    pub fn new(signals: PageSignals, keyword: Option<&str>) -> Self {
        let mut improvements = seo::quick_fixes(&signals);
        if let Some(kw) = keyword {
            let title_has_keyword = signals
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&kw.to_lowercase()));
            if !title_has_keyword {
                improvements.push(KEYWORD_IN_TITLE_HINT);
            }
        }

        Self {
            suggestions: seo::suggest_meta(&signals, keyword),
            seo_score: seo::score(&signals),
            improvements,
            current_tags: CurrentTags {
                title_length: char_len(signals.title.as_deref()),
                description_length: char_len(signals.meta_description.as_deref()),
                title: signals.title,
                description: signals.meta_description,
            },
        }
    }
}

fn char_len(text: Option<&str>) -> usize {
    text.map_or(0, |t| t.chars().count())
}

#[derive(Debug, Serialize)]
pub struct KeywordReport {
    pub main_keyword: MainKeyword,
    pub related_keywords: Vec<String>,
    pub insights: KeywordInsights,
}

#[derive(Debug, Serialize)]
pub struct MainKeyword {
    pub keyword: String,
    pub estimated_volume: u32,
    pub difficulty: u8,
    pub search_intent: SearchIntent,
}

#[derive(Debug, Serialize)]
pub struct KeywordInsights {
    pub content_opportunities: Vec<String>,
    pub competition_level: &'static str,
    pub recommendation: String,
}

pub fn competition_level(difficulty: u8) -> &'static str {
    match difficulty {
        71.. => "High",
        41..=70 => "Medium",
        _ => "Low",
    }
}

impl KeywordReport {
    pub fn new(keyword: &str, data: KeywordData) -> Self {
        Self {
            main_keyword: MainKeyword {
                keyword: keyword.to_string(),
                estimated_volume: data.volume,
                difficulty: data.difficulty,
                search_intent: data.intent,
            },
            related_keywords: data.related_keywords,
            insights: KeywordInsights {
                content_opportunities: vec![
                    format!("Create comprehensive guide about {keyword}"),
                    format!("Write comparison article: \"Best {keyword}\""),
                    format!("Develop FAQ page for {keyword} questions"),
                ],
                competition_level: competition_level(data.difficulty),
                recommendation: format!(
                    "Focus on long-tail variations of \"{keyword}\" for easier ranking"
                ),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BacklinkReport {
    pub domain: String,
    pub estimated_backlinks: u32,
    pub domain_authority: u8,
    pub top_linking_domains: Vec<String>,
    pub insights: BacklinkInsights,
}

#[derive(Debug, Serialize)]
pub struct BacklinkInsights {
    pub link_quality: &'static str,
    pub opportunities: [&'static str; 3],
    pub toxic_risk: &'static str,
}

impl BacklinkReport {
    pub fn new(domain: &str, data: BacklinkData) -> Self {
        Self {
            domain: domain.to_string(),
            estimated_backlinks: data.total_links,
            domain_authority: data.domain_authority,
            top_linking_domains: data.top_domains,
            insights: BacklinkInsights {
                link_quality: if data.domain_authority > 50 {
                    "Good"
                } else {
                    "Needs Improvement"
                },
                opportunities: [
                    "Guest posting on industry blogs",
                    "Creating linkable assets (infographics, tools)",
                    "Building relationships with industry influencers",
                ],
                toxic_risk: "Low - No suspicious patterns detected",
            },
        }
    }
}
