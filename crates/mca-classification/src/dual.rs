use rayon::prelude::*;

use mca_context::ContextFilter;
use mca_core::config::defaults::DEFAULT_MIN_PRIMARY_CHARS;
use mca_core::text::word_count;
use mca_core::{dual_coding_span, DualCoding, McaConfig, RiskClass, RiskContextCoding};
use mca_extraction::FeatureExtractor;

use crate::classifier::PatternClassifier;

/// Codes a transcript twice, once per risk class, and picks a primary coding.
///
/// Pure and re-entrant: one composer can code many transcripts concurrently.
#[derive(Debug, Clone)]
pub struct DualContextComposer {
    extractor: FeatureExtractor,
    filter: ContextFilter,
    classifier: PatternClassifier,
    min_primary_chars: usize,
}

impl DualContextComposer {
    pub fn new() -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            filter: ContextFilter::new(),
            classifier: PatternClassifier::new(),
            min_primary_chars: DEFAULT_MIN_PRIMARY_CHARS,
        }
    }

    pub fn with_config(config: &McaConfig) -> Self {
        Self {
            extractor: FeatureExtractor::with_config(&config.extraction),
            filter: ContextFilter::with_config(&config.context),
            classifier: PatternClassifier::new(),
            min_primary_chars: config.context.min_primary_chars,
        }
    }

    /// Filter, score, and classify the excerpt for one risk class.
    pub fn code_risk_context(&self, text: &str, risk_class: RiskClass) -> RiskContextCoding {
        let filtered_text = self.filter.filter_by_risk(text, risk_class);
        let scores = self.extractor.extract(&filtered_text);
        let total_score = scores.total();
        let classification = self.classifier.classify(&scores, total_score);
        RiskContextCoding {
            risk_class,
            word_count: word_count(&filtered_text),
            filtered_text,
            scores,
            total_score,
            classification,
        }
    }

    /// Code both risk classes. The high-risk coding is primary when its
    /// excerpt has at least `min_primary_chars` characters.
    pub fn code_dual_context(&self, text: &str) -> DualCoding {
        let span = dual_coding_span!(text.chars().count());
        let _guard = span.enter();

        let high_risk = self.code_risk_context(text, RiskClass::High);
        let low_risk = self.code_risk_context(text, RiskClass::Low);

        let primary_source = if high_risk.filtered_chars() >= self.min_primary_chars {
            RiskClass::High
        } else {
            RiskClass::Low
        };
        let primary = match primary_source {
            RiskClass::High => &high_risk,
            RiskClass::Low => &low_risk,
        };
        let (primary_pattern, primary_score, primary_confidence) = (
            primary.classification.pattern,
            primary.total_score,
            primary.classification.confidence,
        );

        tracing::info!(
            high = %high_risk.pattern(),
            low = %low_risk.pattern(),
            primary = %primary_pattern,
            source = primary_source.as_str(),
            "dual-context coding complete"
        );

        DualCoding {
            high_risk,
            low_risk,
            primary_pattern,
            primary_score,
            primary_confidence,
            primary_source,
        }
    }

    /// Code many transcripts in parallel. Output order matches input order.
    pub fn code_many<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<DualCoding> {
        texts
            .par_iter()
            .map(|t| self.code_dual_context(t.as_ref()))
            .collect()
    }
}

impl Default for DualContextComposer {
    fn default() -> Self {
        Self::new()
    }
}
