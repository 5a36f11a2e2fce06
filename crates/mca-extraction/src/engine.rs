use mca_core::config::ExtractionConfig;
use mca_core::traits::IFeatureExtractor;
use mca_core::{extraction_span, Dimension, SubprocessScores};

use crate::cascade::{self, DimensionExplanation};
use crate::lexicon::{self, PatternFailure};
use crate::transcript;

/// Scores text on all twelve dimensions.
///
/// Stateless apart from configuration; compiled vocabularies are shared
/// process-wide, so the extractor is cheap to construct and safe to share
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    participant_only: bool,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            participant_only: config.participant_only,
        }
    }

    /// Score the text. Degenerate input yields the all-zero vector.
    ///
    /// With `participant_only` set, speaker-prefixed transcripts are reduced
    /// to the participant's turns first.
    pub fn extract(&self, text: &str) -> SubprocessScores {
        if self.participant_only {
            return self.extract_participant(text);
        }
        score_text(text)
    }

    /// Score only the participant's own turns.
    pub fn extract_participant(&self, text: &str) -> SubprocessScores {
        score_text(&transcript::participant_text(text))
    }

    /// Per-dimension audit of which cascade tier fired and on what text.
    pub fn explain(&self, text: &str) -> Vec<DimensionExplanation> {
        let owned;
        let text = if self.participant_only {
            owned = transcript::participant_text(text);
            owned.as_str()
        } else {
            text
        };
        Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let (tier, matched) =
                    cascade::evaluate_with_match(lexicon::lexicon(dimension), text);
                DimensionExplanation {
                    dimension,
                    tier,
                    score: tier.score(),
                    matched: matched.map(str::to_string),
                }
            })
            .collect()
    }

    /// Vocabulary patterns that failed to compile.
    pub fn pattern_health(&self) -> &'static [PatternFailure] {
        lexicon::pattern_health()
    }
}

fn score_text(text: &str) -> SubprocessScores {
    let span = extraction_span!(text.len());
    let _guard = span.enter();

    let mut scores = SubprocessScores::zero();
    if text.trim().is_empty() {
        return scores;
    }
    for dimension in Dimension::ALL {
        let tier = cascade::evaluate(lexicon::lexicon(dimension), text);
        scores.set(dimension, tier.score());
    }
    tracing::debug!(total = scores.total(), "scored text");
    scores
}

impl IFeatureExtractor for FeatureExtractor {
    fn extract(&self, text: &str) -> SubprocessScores {
        FeatureExtractor::extract(self, text)
    }
}
