//! Meta tag suggestions.

use serde::Serialize;

use crate::parse::PageSignals;

/// Which tag a suggestion is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Title,
    Description,
}

/// A candidate tag value with its character length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(rename = "suggestion")]
    pub text: String,
    /// Unicode scalar count of `text`.
    pub length: usize,
}

impl MetaSuggestion {
    fn new(kind: SuggestionKind, text: String) -> Self {
        let length = text.chars().count();
        Self { kind, text, length }
    }
}

/// Builds title and description candidates.
///
/// A non-blank `keyword` (trimmed) produces two title templates and a
/// keyword-aware description. Otherwise only a generic description is
/// returned. `_signals` is accepted so suggestions can later take the current
/// tags into account; the output depends on the keyword alone today.
pub fn suggest_meta(_signals: &PageSignals, keyword: Option<&str>) -> Vec<MetaSuggestion> {
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
    let mut suggestions = Vec::with_capacity(3);

    if let Some(kw) = keyword {
        suggestions.push(MetaSuggestion::new(
            SuggestionKind::Title,
            format!("{kw} | Complete Guide & Best Practices"),
        ));
        suggestions.push(MetaSuggestion::new(
            SuggestionKind::Title,
            format!("Best {kw} Solutions - Expert Tips & Tools"),
        ));
    }

    let topic = keyword.unwrap_or("this topic");
    suggestions.push(MetaSuggestion::new(
        SuggestionKind::Description,
        format!(
            "Discover expert insights about {topic}. Get actionable tips, best practices, and proven strategies to improve your results."
        ),
    ));
    suggestions
}
