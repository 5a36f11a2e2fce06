use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use super::Pattern;

/// Running estimate of a live session's collaboration pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatternEstimate {
    pub top_pattern: Pattern,
    /// Posterior probability of `top_pattern`.
    pub probability: f64,
    /// Confidence margin: P(top) − P(second), never negative.
    pub confidence: f64,
    /// Posterior over all six patterns; sums to 1.
    pub probabilities: BTreeMap<Pattern, f64>,
    pub need_more_data: bool,
    /// Evidence trail, one rendered line per observed turn, oldest first.
    pub evidence: Vec<String>,
    pub turn_count: u32,
}

impl PatternEstimate {
    /// Build an estimate from a normalized distribution indexed by
    /// [`Pattern::index`]. Ties for the top slot go to the earlier pattern.
    pub fn from_distribution(
        distribution: &[f64; Pattern::COUNT],
        turn_count: u32,
        need_more_data: bool,
        evidence: Vec<String>,
    ) -> Self {
        let (top, second) = top_two(distribution);
        let probability = distribution[top.index()];
        let margin = (probability - distribution[second.index()]).max(0.0);
        let probabilities = Pattern::ALL
            .into_iter()
            .map(|p| (p, distribution[p.index()]))
            .collect();
        Self {
            top_pattern: top,
            probability,
            confidence: margin,
            probabilities,
            need_more_data,
            evidence,
            turn_count,
        }
    }

    /// Posterior probability of one pattern.
    pub fn probability_of(&self, pattern: Pattern) -> f64 {
        self.probabilities.get(&pattern).copied().unwrap_or(0.0)
    }
}

/// Indices of the highest and second-highest entries, earlier index first
/// on ties.
fn top_two(distribution: &[f64; Pattern::COUNT]) -> (Pattern, Pattern) {
    let mut order: Vec<Pattern> = Pattern::ALL.to_vec();
    // Stable sort keeps A..F order among equal probabilities.
    order.sort_by(|a, b| {
        distribution[b.index()]
            .partial_cmp(&distribution[a.index()])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    (order[0], order[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_is_top_minus_second() {
        let dist = [0.1, 0.5, 0.2, 0.1, 0.05, 0.05];
        let estimate = PatternEstimate::from_distribution(&dist, 3, false, vec![]);
        assert_eq!(estimate.top_pattern, Pattern::B);
        assert!((estimate.confidence - 0.3).abs() < 1e-12);
        assert!((estimate.probability_of(Pattern::C) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn ties_resolve_to_earlier_pattern() {
        let dist = [0.2, 0.2, 0.2, 0.2, 0.2, 0.0];
        let estimate = PatternEstimate::from_distribution(&dist, 0, true, vec![]);
        assert_eq!(estimate.top_pattern, Pattern::A);
        assert_eq!(estimate.confidence, 0.0);
    }

    #[test]
    fn serializes_camel_case() {
        let dist = [0.2, 0.2, 0.2, 0.2, 0.1, 0.1];
        let estimate = PatternEstimate::from_distribution(&dist, 1, true, vec!["t1".into()]);
        let json = serde_json::to_value(&estimate).unwrap();
        assert!(json.get("topPattern").is_some());
        assert!(json.get("needMoreData").is_some());
        assert_eq!(json["probabilities"].as_object().unwrap().len(), 6);
    }
}
