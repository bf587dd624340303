//! Four-check SEO scoring.

use std::ops::RangeInclusive;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::parse::PageSignals;

/// Points awarded per passing check.
const CHECK_POINTS: u8 = 25;

/// Upper bound of [`score`].
pub const MAX_SCORE: u8 = 100;

const TITLE_LENGTH: RangeInclusive<usize> = 30..=60;
const META_DESCRIPTION_LENGTH: RangeInclusive<usize> = 120..=160;

/// The individual checks that make up the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoCheck {
    /// Title present and 30-60 characters long.
    TitleLength,
    /// Meta description present and 120-160 characters long.
    MetaDescriptionLength,
    /// Exactly one `h1`.
    SingleH1,
    /// At least one `h2`.
    HasH2,
}

impl SeoCheck {
    /// Whether `signals` pass this check.
    pub fn passes(self, signals: &PageSignals) -> bool {
        match self {
            SeoCheck::TitleLength => char_len_in(signals.title.as_deref(), &TITLE_LENGTH),
            SeoCheck::MetaDescriptionLength => {
                char_len_in(signals.meta_description.as_deref(), &META_DESCRIPTION_LENGTH)
            }
            SeoCheck::SingleH1 => signals.headings.h1 == 1,
            SeoCheck::HasH2 => signals.headings.h2 > 0,
        }
    }

    /// Fix hint shown when the check fails.
    pub fn hint(self) -> &'static str {
        match self {
            SeoCheck::TitleLength => "Write a page title between 30 and 60 characters",
            SeoCheck::MetaDescriptionLength => {
                "Optimize meta description length (120-160 characters)"
            }
            SeoCheck::SingleH1 => "Use exactly one H1 heading per page",
            SeoCheck::HasH2 => "Add H2 subheadings to structure your content",
        }
    }
}

fn char_len_in(text: Option<&str>, range: &RangeInclusive<usize>) -> bool {
    text.is_some_and(|t| range.contains(&t.chars().count()))
}

/// Runs every check, in a fixed order.
pub fn evaluate(signals: &PageSignals) -> Vec<(SeoCheck, bool)> {
    SeoCheck::iter()
        .map(|check| (check, check.passes(signals)))
        .collect()
}

/// Scores `signals`: 25 points per passing check, capped at [`MAX_SCORE`].
///
/// The result is always one of 0, 25, 50, 75 or 100.
pub fn score(signals: &PageSignals) -> u8 {
    let passed = SeoCheck::iter()
        .filter(|check| check.passes(signals))
        .count() as u8;
    passed.saturating_mul(CHECK_POINTS).min(MAX_SCORE)
}

/// Fix hints for every failing check, in check order.
pub fn quick_fixes(signals: &PageSignals) -> Vec<&'static str> {
    evaluate(signals)
        .into_iter()
        .filter(|(_, passed)| !passed)
        .map(|(check, _)| check.hint())
        .collect()
}
