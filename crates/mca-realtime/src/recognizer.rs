use std::collections::VecDeque;

use mca_core::config::RecognizerConfig;
use mca_core::{McaResult, Pattern, PatternEstimate};

use crate::likelihood;
use crate::signals::{RelianceLevel, SignalLevel, TurnSignals};

/// Bayesian recognizer for one live session.
///
/// Starts from a prior that treats A–E alike and gives F a small explicit
/// mass, then multiplies in one likelihood factor per signal each turn.
/// Every posterior is floored before renormalizing so no pattern is ever
/// ruled out for good.
#[derive(Debug, Clone)]
pub struct OnlinePatternRecognizer {
    config: RecognizerConfig,
    posterior: [f64; Pattern::COUNT],
    turn_count: u32,
    evidence: VecDeque<String>,
    estimate: PatternEstimate,
}

impl OnlinePatternRecognizer {
    pub fn new() -> Self {
        Self::from_validated(RecognizerConfig::default())
    }

    /// Build a recognizer on `config`, rejecting it with
    /// [`McaError::ConfigError`](mca_core::McaError::ConfigError) when
    /// [`RecognizerConfig::validate`] fails.
    pub fn with_config(config: RecognizerConfig) -> McaResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: RecognizerConfig) -> Self {
        let posterior = prior(&config);
        let estimate = PatternEstimate::from_distribution(&posterior, 0, true, Vec::new());
        Self {
            config,
            posterior,
            turn_count: 0,
            evidence: VecDeque::new(),
            estimate,
        }
    }

    /// Return to the prior: empty evidence trail, turn count 0.
    pub fn initialize(&mut self) {
        self.posterior = prior(&self.config);
        self.turn_count = 0;
        self.evidence.clear();
        self.estimate = PatternEstimate::from_distribution(&self.posterior, 0, true, Vec::new());
    }

    /// Same as [`initialize`](Self::initialize).
    pub fn reset(&mut self) {
        self.initialize();
    }

    /// Fold one turn's signals into the posterior.
    pub fn update(&mut self, signals: &TurnSignals) -> PatternEstimate {
        let observed = signals.signals();
        let mut next = [0.0; Pattern::COUNT];
        for pattern in Pattern::ALL {
            let i = pattern.index();
            let product = observed
                .iter()
                .fold(self.posterior[i], |acc, s| acc * likelihood::factor(pattern, *s));
            next[i] = product.max(self.config.floor_epsilon);
        }
        let sum: f64 = next.iter().sum();
        for p in &mut next {
            *p /= sum;
        }
        self.posterior = next;
        self.turn_count += 1;

        let provisional = PatternEstimate::from_distribution(&next, self.turn_count, false, Vec::new());
        let need_more_data = provisional.confidence < self.config.margin_threshold
            && self.turn_count < self.config.min_turns;

        let described: Vec<&str> = observed
            .iter()
            .filter(|s| !s.is_baseline())
            .map(|s| s.description())
            .collect();
        let entry = format!(
            "turn {}: {} p={:.3} margin={:.3} [{}]",
            self.turn_count,
            provisional.top_pattern,
            provisional.probability,
            provisional.confidence,
            if described.is_empty() {
                "no signals".to_string()
            } else {
                described.join(", ")
            }
        );
        self.evidence.push_back(entry);
        while self.evidence.len() > self.config.max_evidence_entries {
            self.evidence.pop_front();
        }

        tracing::debug!(
            turn = self.turn_count,
            top = %provisional.top_pattern,
            probability = provisional.probability,
            margin = provisional.confidence,
            need_more_data,
            "recognizer updated"
        );

        self.estimate = PatternEstimate {
            need_more_data,
            evidence: self.evidence.iter().cloned().collect(),
            ..provisional
        };
        self.estimate.clone()
    }

    /// Last computed estimate. Calling it does not change state.
    pub fn current_estimate(&self) -> &PatternEstimate {
        &self.estimate
    }

    /// Acute passive-reliance guard: F is likely and this turn shows no
    /// decomposition, verification, or iteration under high reliance.
    pub fn is_high_risk_f(&self, signals: &TurnSignals) -> bool {
        self.posterior[Pattern::F.index()] > self.config.high_risk_f_threshold
            && signals.decomposition == SignalLevel::Absent
            && signals.verification == SignalLevel::Absent
            && signals.iteration == SignalLevel::Absent
            && signals.reliance == RelianceLevel::High
    }

    pub fn posterior(&self) -> &[f64; Pattern::COUNT] {
        &self.posterior
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }
}

impl Default for OnlinePatternRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A–E share `1 − f_prior` equally; F gets `f_prior`.
pub fn prior(config: &RecognizerConfig) -> [f64; Pattern::COUNT] {
    let shared = (1.0 - config.f_prior) / 5.0;
    let mut p = [shared; Pattern::COUNT];
    p[Pattern::F.index()] = config.f_prior;
    p
}
