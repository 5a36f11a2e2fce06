use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use mca_classification::PatternClassifier;
use mca_core::config::ExtractionConfig;
use mca_core::text::word_count;
use mca_core::{BatchClassification, McaConfig, SubprocessScores};
use mca_extraction::{DimensionExplanation, FeatureExtractor};

use super::{print_json, read_input};

#[derive(Args)]
pub struct CodeArgs {
    /// Transcript files to code
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Score only the participant's turns of speaker-prefixed transcripts
    #[arg(long)]
    pub participant_only: bool,

    /// Include which vocabulary tier fired for each dimension
    #[arg(long)]
    pub explain: bool,
}

/// Batch coding of one transcript.
#[derive(Debug, Serialize)]
pub struct CodeReport {
    pub source: String,
    /// blake3 hex digest of the raw transcript, for de-duplicating inputs.
    pub content_hash: String,
    pub word_count: usize,
    pub scores: SubprocessScores,
    pub total_score: u8,
    pub classification: BatchClassification,
    pub rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Vec<DimensionExplanation>>,
}

pub fn execute(args: CodeArgs, config: &McaConfig) -> Result<()> {
    let extraction = ExtractionConfig {
        participant_only: args.participant_only || config.extraction.participant_only,
    };
    let extractor = FeatureExtractor::with_config(&extraction);
    let classifier = PatternClassifier::new();

    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let text = read_input(path)?;
        let report = code_text(
            &path.display().to_string(),
            &text,
            &extractor,
            &classifier,
            args.explain,
        );
        tracing::info!(
            source = %report.source,
            pattern = %report.classification.pattern,
            total = report.total_score,
            "coded transcript"
        );
        reports.push(report);
    }
    print_json(&reports)
}

pub fn code_text(
    source: &str,
    text: &str,
    extractor: &FeatureExtractor,
    classifier: &PatternClassifier,
    explain: bool,
) -> CodeReport {
    let scores = extractor.extract(text);
    let total = scores.total();
    let matched = classifier.classify_traced(&scores, total);
    CodeReport {
        source: source.to_string(),
        content_hash: blake3::hash(text.as_bytes()).to_hex().to_string(),
        word_count: word_count(text),
        scores,
        total_score: total,
        classification: matched.classification,
        rule: matched.rule,
        explanation: explain.then(|| extractor.explain(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mca_core::Pattern;

    #[test]
    fn empty_text_codes_as_passive() {
        let report = code_text(
            "empty",
            "",
            &FeatureExtractor::new(),
            &PatternClassifier::new(),
            false,
        );
        assert_eq!(report.total_score, 0);
        assert_eq!(report.classification.pattern, Pattern::F);
        assert_eq!(report.rule, "low_total_passive");
        assert!(report.explanation.is_none());
    }

    #[test]
    fn hash_identifies_content() {
        let extractor = FeatureExtractor::new();
        let classifier = PatternClassifier::new();
        let a = code_text("a", "same words", &extractor, &classifier, false);
        let b = code_text("b", "same words", &extractor, &classifier, false);
        let c = code_text("c", "other words", &extractor, &classifier, false);
        assert_eq!(a.content_hash, b.content_hash);
        assert_ne!(a.content_hash, c.content_hash);
        assert_eq!(a.content_hash.len(), 64);
    }

    #[test]
    fn explain_covers_every_dimension() {
        let report = code_text(
            "x",
            "I always verify the sources.",
            &FeatureExtractor::new(),
            &PatternClassifier::new(),
            true,
        );
        assert_eq!(report.explanation.map(|e| e.len()), Some(12));
    }
}
