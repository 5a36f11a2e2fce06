//! Agreement between the batch classifier and expert labels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use mca_core::{Pattern, SubprocessScores};

use crate::classifier::PatternClassifier;

/// A score vector with its expert-assigned pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledScores {
    pub id: String,
    pub scores: SubprocessScores,
    pub pattern: Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PatternMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of records labeled with this pattern.
    pub support: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Misclassification {
    pub id: String,
    pub expected: Pattern,
    pub predicted: Pattern,
    pub rule: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub total: u32,
    pub correct: u32,
    pub accuracy: f64,
    pub per_pattern: BTreeMap<Pattern, PatternMetrics>,
    /// Rows are expected patterns, columns predicted, both in A..F order.
    pub confusion: [[u32; Pattern::COUNT]; Pattern::COUNT],
    pub misclassified: Vec<Misclassification>,
}

impl EvaluationReport {
    pub fn metrics(&self, pattern: Pattern) -> PatternMetrics {
        self.per_pattern.get(&pattern).copied().unwrap_or_default()
    }

    /// Recall on pattern F. Missing a passive user is the costly error.
    pub fn passive_recall(&self) -> f64 {
        self.metrics(Pattern::F).recall
    }

    pub fn confusion_count(&self, expected: Pattern, predicted: Pattern) -> u32 {
        self.confusion[expected.index()][predicted.index()]
    }
}

/// Classify every record and compare against its label.
pub fn evaluate(classifier: &PatternClassifier, records: &[LabeledScores]) -> EvaluationReport {
    let mut confusion = [[0u32; Pattern::COUNT]; Pattern::COUNT];
    let mut misclassified = Vec::new();

    for record in records {
        let m = classifier.classify_traced(&record.scores, record.scores.total());
        let predicted = m.classification.pattern;
        confusion[record.pattern.index()][predicted.index()] += 1;
        if predicted != record.pattern {
            misclassified.push(Misclassification {
                id: record.id.clone(),
                expected: record.pattern,
                predicted,
                rule: m.rule,
            });
        }
    }

    let total = records.len() as u32;
    let correct: u32 = Pattern::ALL.iter().map(|p| confusion[p.index()][p.index()]).sum();
    let accuracy = ratio(correct, total);

    let per_pattern = Pattern::ALL
        .into_iter()
        .map(|p| (p, metrics_for(&confusion, p)))
        .collect();

    tracing::info!(total, correct, accuracy, "evaluation complete");

    EvaluationReport {
        total,
        correct,
        accuracy,
        per_pattern,
        confusion,
        misclassified,
    }
}

fn metrics_for(confusion: &[[u32; Pattern::COUNT]; Pattern::COUNT], pattern: Pattern) -> PatternMetrics {
    let i = pattern.index();
    let tp = confusion[i][i];
    let predicted: u32 = confusion.iter().map(|row| row[i]).sum();
    let support: u32 = confusion[i].iter().sum();
    let precision = ratio(tp, predicted);
    let recall = ratio(tp, support);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    PatternMetrics {
        precision,
        recall,
        f1,
        support,
    }
}

/// `num / den`, or 0 for an empty denominator.
fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        f64::from(num) / f64::from(den)
    }
}
