use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{McaError, McaResult};

/// Online pattern recognizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Prior probability of pattern F. Patterns A–E share the remainder.
    pub f_prior: f64,
    /// Lower bound applied to every unnormalized posterior.
    pub floor_epsilon: f64,
    /// Margin below which more data is requested.
    pub margin_threshold: f64,
    /// Turn count after which more data is no longer requested.
    pub min_turns: u32,
    /// P(F) threshold for the acute-risk guard.
    pub high_risk_f_threshold: f64,
    /// Evidence-trail capacity; the oldest entries are dropped first.
    pub max_evidence_entries: usize,
}

impl RecognizerConfig {
    /// Reject values the posterior update cannot work with, such as an F
    /// prior outside (0, 1) or a floor that is not below it.
    pub fn validate(&self) -> McaResult<()> {
        if !(self.f_prior > 0.0 && self.f_prior < 1.0) {
            return Err(McaError::ConfigError(format!(
                "recognizer.f_prior must be in (0, 1), got {}",
                self.f_prior
            )));
        }
        if !(self.floor_epsilon > 0.0 && self.floor_epsilon < self.f_prior) {
            return Err(McaError::ConfigError(format!(
                "recognizer.floor_epsilon must be in (0, f_prior), got {}",
                self.floor_epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.margin_threshold) {
            return Err(McaError::ConfigError(format!(
                "recognizer.margin_threshold must be in [0, 1], got {}",
                self.margin_threshold
            )));
        }
        if !(0.0..1.0).contains(&self.high_risk_f_threshold) {
            return Err(McaError::ConfigError(format!(
                "recognizer.high_risk_f_threshold must be in [0, 1), got {}",
                self.high_risk_f_threshold
            )));
        }
        if self.max_evidence_entries == 0 {
            return Err(McaError::ConfigError(
                "recognizer.max_evidence_entries must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            f_prior: defaults::DEFAULT_F_PRIOR,
            floor_epsilon: defaults::DEFAULT_FLOOR_EPSILON,
            margin_threshold: defaults::DEFAULT_MARGIN_THRESHOLD,
            min_turns: defaults::DEFAULT_MIN_TURNS,
            high_risk_f_threshold: defaults::DEFAULT_HIGH_RISK_F_THRESHOLD,
            max_evidence_entries: defaults::DEFAULT_MAX_EVIDENCE_ENTRIES,
        }
    }
}
