use mca_core::traits::IPatternClassifier;
use mca_core::{classification_span, BatchClassification, SubprocessScores};

use crate::rules;

/// Classification plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub classification: BatchClassification,
    pub rule: &'static str,
}

/// Stateless rule-table classifier.
///
/// Does not validate its input: `total` is trusted to equal the sum of the
/// scores and each score to lie in `0..=3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternClassifier;

impl PatternClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, scores: &SubprocessScores, total: u8) -> BatchClassification {
        self.classify_traced(scores, total).classification
    }

    /// Classify, computing the total from the scores.
    pub fn classify_scores(&self, scores: &SubprocessScores) -> BatchClassification {
        self.classify(scores, scores.total())
    }

    /// Classify and report which rule fired.
    pub fn classify_traced(&self, scores: &SubprocessScores, total: u8) -> RuleMatch {
        let span = classification_span!(total);
        let _guard = span.enter();

        let rule = rules::find_applicable_rule(scores, total);
        let classification =
            BatchClassification::new(rule.pattern(scores), (rule.confidence)(scores, total));
        tracing::debug!(
            rule = rule.name,
            pattern = %classification.pattern,
            confidence = classification.confidence.as_str(),
            "classified"
        );
        RuleMatch {
            classification,
            rule: rule.name,
        }
    }
}

impl IPatternClassifier for PatternClassifier {
    fn classify(&self, scores: &SubprocessScores, total: u8) -> BatchClassification {
        PatternClassifier::classify(self, scores, total)
    }
}
