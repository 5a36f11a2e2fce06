//! The ordered evidence cascade applied to every dimension.

use mca_core::{Dimension, EvidenceScore};
use serde::Serialize;

use crate::lexicon::{is_negated, CompiledLexicon};

/// Evidence tier, strongest first. The first tier whose pattern matches
/// decides the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Strong,
    Moderate,
    /// Explicit negation near a keyword. Scores 0 although a keyword matched.
    Negated,
    Keyword,
    Absent,
}

impl Tier {
    /// Tiers that carry a pattern, in cascade order.
    pub const SCORED: [Tier; 4] = [Tier::Strong, Tier::Moderate, Tier::Negated, Tier::Keyword];

    pub fn score(self) -> EvidenceScore {
        match self {
            Tier::Strong => EvidenceScore::STRONG,
            Tier::Moderate => EvidenceScore::MODERATE,
            Tier::Keyword => EvidenceScore::WEAK,
            Tier::Negated | Tier::Absent => EvidenceScore::NONE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Strong => "strong",
            Tier::Moderate => "moderate",
            Tier::Negated => "negated",
            Tier::Keyword => "keyword",
            Tier::Absent => "absent",
        }
    }
}

/// Run the cascade for one dimension and return the tier that fired.
pub fn evaluate(lexicon: &CompiledLexicon, text: &str) -> Tier {
    evaluate_with_match(lexicon, text).0
}

/// Like [`evaluate`], also returning the matched excerpt.
pub fn evaluate_with_match<'t>(lexicon: &CompiledLexicon, text: &'t str) -> (Tier, Option<&'t str>) {
    for tier in Tier::SCORED {
        if let Some(matched) = tier_match(lexicon, tier, text) {
            return (tier, Some(matched));
        }
    }
    (Tier::Absent, None)
}

/// Phrase patterns first; a frequency-graded match only counts when no
/// negation undercuts it.
fn tier_match<'t>(lexicon: &CompiledLexicon, tier: Tier, text: &'t str) -> Option<&'t str> {
    if let Some(m) = lexicon.tier(tier).and_then(|re| re.find(text)) {
        return Some(m.as_str());
    }
    lexicon
        .frequency(tier)?
        .find_iter(text)
        .find(|m| !is_negated(text, m.start(), m.end()))
        .map(|m| m.as_str())
}

/// Audit record of how one dimension was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionExplanation {
    pub dimension: Dimension,
    pub tier: Tier,
    pub score: EvidenceScore,
    /// The text the deciding pattern matched, if any.
    pub matched: Option<String>,
}
