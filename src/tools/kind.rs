//! The tool catalog: names, quotas and static free-tier metadata.

use serde::Serialize;
use serde_json::{json, Value};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Route prefix shared by every tool.
pub const TOOLS_PATH_PREFIX: &str = "/api/tools/";

/// One of the free tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    WebsiteAnalyzer,
    MetaGenerator,
    KeywordResearch,
    BacklinkChecker,
}

impl ToolKind {
    /// Canonical slug, as used in routes, quota keys and lead records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::WebsiteAnalyzer => "website-analyzer",
            ToolKind::MetaGenerator => "meta-generator",
            ToolKind::KeywordResearch => "keyword-research",
            ToolKind::BacklinkChecker => "backlink-checker",
        }
    }

    /// Alternate slugs routed to the same tool.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ToolKind::WebsiteAnalyzer => &["website-crawler"],
            ToolKind::MetaGenerator => &["meta-tag-generator"],
            ToolKind::KeywordResearch | ToolKind::BacklinkChecker => &[],
        }
    }

    /// Resolves a canonical slug or alias.
    pub fn from_slug(slug: &str) -> Option<Self> {
        ToolKind::iter().find(|tool| tool.as_str() == slug || tool.aliases().contains(&slug))
    }

    /// Canonical route path.
    pub fn path(&self) -> String {
        format!("{TOOLS_PATH_PREFIX}{}", self.as_str())
    }

    /// Canonical and alias route paths.
    pub fn all_paths(&self) -> Vec<String> {
        std::iter::once(self.as_str())
            .chain(self.aliases().iter().copied())
            .map(|slug| format!("{TOOLS_PATH_PREFIX}{slug}"))
            .collect()
    }

    /// Free-tier requests per client per rolling day.
    pub fn daily_limit(&self) -> u32 {
        match self {
            ToolKind::WebsiteAnalyzer => 3,
            ToolKind::MetaGenerator => 5,
            ToolKind::KeywordResearch => 10,
            ToolKind::BacklinkChecker => 5,
        }
    }

    /// `(error, message)` pair of the generic 500 body.
    pub fn failure_messages(&self) -> (&'static str, &'static str) {
        match self {
            ToolKind::WebsiteAnalyzer => (
                "Analysis failed",
                "Unable to analyze website. Please try again.",
            ),
            ToolKind::MetaGenerator => (
                "Meta tag generation failed",
                "Unable to generate meta tags. Please try again.",
            ),
            ToolKind::KeywordResearch => (
                "Keyword research failed",
                "Unable to research keyword. Please try again.",
            ),
            ToolKind::BacklinkChecker => (
                "Backlink analysis failed",
                "Unable to analyze backlinks. Please try again.",
            ),
        }
    }

    /// Fixed description of what the free tier leaves out.
    pub fn limitations(&self) -> Value {
        match self {
            ToolKind::WebsiteAnalyzer => json!({
                "analysis_type": "Basic (free)",
                "upgrade_for": "Deep crawling, JavaScript rendering, full site analysis",
            }),
            ToolKind::MetaGenerator => json!({
                "analysis_type": "Single page (free)",
                "upgrade_for": "Bulk generation, A/B testing variations, custom templates",
            }),
            ToolKind::KeywordResearch => json!({
                "data_source": "Estimated (free)",
                "upgrade_for": "Real search volume data, SERP analysis, export options",
            }),
            ToolKind::BacklinkChecker => json!({
                "analysis_type": "Sample (free)",
                "upgrade_for": "Complete backlink database, historical data, link monitoring",
            }),
        }
    }

    /// Fixed list of paid-tier selling points.
    pub fn upgrade_benefits(&self) -> &'static [&'static str] {
        match self {
            ToolKind::WebsiteAnalyzer => &[
                "Scan unlimited pages",
                "Advanced AI recommendations",
                "Technical SEO analysis",
                "Competitor comparison",
                "Historical tracking",
            ],
            ToolKind::MetaGenerator => &[
                "Bulk meta tag generation",
                "A/B testing variations",
                "Competitor analysis",
                "Automated optimization",
            ],
            ToolKind::KeywordResearch => &[
                "Unlimited keyword research",
                "Real search volume data",
                "Advanced SERP analysis",
                "Competitor keyword gaps",
            ],
            ToolKind::BacklinkChecker => &[
                "Complete backlink database",
                "Competitor backlink analysis",
                "Link monitoring and alerts",
                "Toxic link detection",
            ],
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
