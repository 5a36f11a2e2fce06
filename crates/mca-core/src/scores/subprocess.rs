use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::{Dimension, EvidenceScore, Family};
use crate::errors::McaError;

/// Twelve-dimension evidence vector.
///
/// The total is always derived from the fields, so it can never drift from
/// the arithmetic sum. Serialized with the short dimension codes (`p1`..`r2`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubprocessScores {
    #[serde(rename = "p1")]
    pub decomposition: EvidenceScore,
    #[serde(rename = "p2")]
    pub goal_setting: EvidenceScore,
    #[serde(rename = "p3")]
    pub strategy_selection: EvidenceScore,
    #[serde(rename = "p4")]
    pub resource_planning: EvidenceScore,
    #[serde(rename = "m1")]
    pub progress_monitoring: EvidenceScore,
    #[serde(rename = "m2")]
    pub quality_checking: EvidenceScore,
    #[serde(rename = "m3")]
    pub context_awareness: EvidenceScore,
    #[serde(rename = "e1")]
    pub result_evaluation: EvidenceScore,
    #[serde(rename = "e2")]
    pub learning_reflection: EvidenceScore,
    #[serde(rename = "e3")]
    pub capability_judgment: EvidenceScore,
    #[serde(rename = "r1")]
    pub strategy_adjustment: EvidenceScore,
    #[serde(rename = "r2")]
    pub trust_calibration: EvidenceScore,
}

impl SubprocessScores {
    /// The all-zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from raw values in canonical order, clamping each to `0..=3`.
    pub fn from_clamped(values: [u8; 12]) -> Self {
        let mut scores = Self::zero();
        for (dimension, value) in Dimension::ALL.into_iter().zip(values) {
            scores.set(dimension, EvidenceScore::new(value));
        }
        scores
    }

    pub fn get(&self, dimension: Dimension) -> EvidenceScore {
        match dimension {
            Dimension::Decomposition => self.decomposition,
            Dimension::GoalSetting => self.goal_setting,
            Dimension::StrategySelection => self.strategy_selection,
            Dimension::ResourcePlanning => self.resource_planning,
            Dimension::ProgressMonitoring => self.progress_monitoring,
            Dimension::QualityChecking => self.quality_checking,
            Dimension::ContextAwareness => self.context_awareness,
            Dimension::ResultEvaluation => self.result_evaluation,
            Dimension::LearningReflection => self.learning_reflection,
            Dimension::CapabilityJudgment => self.capability_judgment,
            Dimension::StrategyAdjustment => self.strategy_adjustment,
            Dimension::TrustCalibration => self.trust_calibration,
        }
    }

    pub fn set(&mut self, dimension: Dimension, score: EvidenceScore) {
        let slot = match dimension {
            Dimension::Decomposition => &mut self.decomposition,
            Dimension::GoalSetting => &mut self.goal_setting,
            Dimension::StrategySelection => &mut self.strategy_selection,
            Dimension::ResourcePlanning => &mut self.resource_planning,
            Dimension::ProgressMonitoring => &mut self.progress_monitoring,
            Dimension::QualityChecking => &mut self.quality_checking,
            Dimension::ContextAwareness => &mut self.context_awareness,
            Dimension::ResultEvaluation => &mut self.result_evaluation,
            Dimension::LearningReflection => &mut self.learning_reflection,
            Dimension::CapabilityJudgment => &mut self.capability_judgment,
            Dimension::StrategyAdjustment => &mut self.strategy_adjustment,
            Dimension::TrustCalibration => &mut self.trust_calibration,
        };
        *slot = score;
    }

    /// Iterate `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, EvidenceScore)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Raw values in canonical order.
    pub fn values(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        for (dimension, score) in self.iter() {
            out[dimension.index()] = score.value();
        }
        out
    }

    /// Sum of all twelve fields, in `0..=36`.
    pub fn total(&self) -> u8 {
        self.iter().map(|(_, s)| s.value()).sum()
    }

    /// Sum of the scores in one family.
    pub fn family_total(&self, family: Family) -> u8 {
        family.dimensions().iter().map(|d| self.get(*d).value()).sum()
    }

    /// Mean score of one family.
    pub fn family_mean(&self, family: Family) -> f64 {
        let dims = family.dimensions();
        f64::from(self.family_total(family)) / dims.len() as f64
    }

    /// Per-dimension mean across several vectors, rounded half away from zero.
    ///
    /// Used to aggregate one participant's conversations into a single vector.
    /// An empty slice yields the all-zero vector.
    pub fn mean_of(vectors: &[SubprocessScores]) -> Self {
        if vectors.is_empty() {
            return Self::zero();
        }
        let n = vectors.len() as f64;
        let mut mean = Self::zero();
        for dimension in Dimension::ALL {
            let sum: f64 = vectors.iter().map(|v| f64::from(v.get(dimension).value())).sum();
            mean.set(dimension, EvidenceScore::new((sum / n).round() as u8));
        }
        mean
    }
}

impl TryFrom<[u8; 12]> for SubprocessScores {
    type Error = McaError;

    /// Build from raw values in canonical order, rejecting any value above 3.
    fn try_from(values: [u8; 12]) -> Result<Self, Self::Error> {
        let mut scores = Self::zero();
        for (dimension, value) in Dimension::ALL.into_iter().zip(values) {
            let score = EvidenceScore::try_from(value).map_err(|_| McaError::InvalidScore {
                dimension: dimension.code().to_string(),
                value: i64::from(value),
            })?;
            scores.set(dimension, score);
        }
        Ok(scores)
    }
}

impl fmt::Display for SubprocessScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (dimension, score) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", dimension.code(), score)?;
            first = false;
        }
        write!(f, " total={}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_totals_zero() {
        assert_eq!(SubprocessScores::zero().total(), 0);
    }

    #[test]
    fn from_clamped_caps_each_field() {
        let scores = SubprocessScores::from_clamped([9; 12]);
        assert_eq!(scores.total(), 36);
        assert!(scores.iter().all(|(_, s)| s.value() == 3));
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        let mut values = [1u8; 12];
        values[5] = 4;
        let err = SubprocessScores::try_from(values).unwrap_err();
        assert!(err.to_string().contains("M2"), "got: {err}");
    }

    #[test]
    fn family_means() {
        let scores = SubprocessScores::from_clamped([3, 3, 2, 3, 2, 3, 2, 2, 2, 3, 2, 2]);
        assert!((scores.family_mean(Family::Planning) - 2.75).abs() < 1e-12);
        assert!((scores.family_mean(Family::Regulation) - 2.0).abs() < 1e-12);
        assert_eq!(scores.family_total(Family::Monitoring), 7);
    }

    #[test]
    fn mean_of_rounds_half_away_from_zero() {
        let a = SubprocessScores::from_clamped([1; 12]);
        let b = SubprocessScores::from_clamped([2; 12]);
        let mean = SubprocessScores::mean_of(&[a, b]);
        assert_eq!(mean.decomposition.value(), 2);
        assert_eq!(SubprocessScores::mean_of(&[]), SubprocessScores::zero());
    }

    #[test]
    fn display_lists_codes_and_total() {
        let scores = SubprocessScores::from_clamped([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]);
        let rendered = scores.to_string();
        assert!(rendered.starts_with("P1=1 P2=0"));
        assert!(rendered.ends_with("R2=2 total=3"));
    }
}
