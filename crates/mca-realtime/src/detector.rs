//! Derives turn signals from a single participant message.

use regex::Regex;
use std::sync::LazyLock;

use mca_core::{Dimension, SubprocessScores};
use mca_extraction::FeatureExtractor;

use crate::signals::{RelianceLevel, SignalLevel, TurnSignals};

macro_rules! reliance_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Wholesale delegation ───────────────────────────────────────────────────
reliance_pattern!(
    RE_DELEGATION,
    r"(?i)\b(?:just (?:do|write|give|tell|fix|finish)|do it for me|write (?:it|the whole|the entire) (?:thing|essay|report|code)?|whatever you think|i'll (?:just )?(?:copy|use|paste) (?:it|that|this)|no need to explain)\b|直接(?:给|写|帮我)|帮我(?:写|做)完|你(?:来)?决定|照搬"
);

// ── Ownership and verification ─────────────────────────────────────────────
reliance_pattern!(
    RE_OWNERSHIP,
    r"(?i)\b(?:i(?:'ll| will) (?:check|verify|decide|write)|let me (?:check|verify|try)|i wrote|my (?:draft|version|own)|show (?:me )?(?:the )?(?:sources?|steps|reasoning)|i disagree)\b|我(?:自己先|自己|先)(?:写|检查|核对|试)|我的(?:草稿|版本)|我不同意"
);

/// Maps one message to [`TurnSignals`] using the feature extractor plus a
/// reliance vocabulary.
///
/// Behavior levels come from the extractor's scores: decomposition from P1,
/// verification from M2, iteration from R1, reflection from E2, context
/// adaptation from M3.
#[derive(Debug, Clone, Default)]
pub struct SignalDetector {
    extractor: FeatureExtractor,
}

impl SignalDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extractor(extractor: FeatureExtractor) -> Self {
        Self { extractor }
    }

    pub fn detect(&self, message: &str) -> TurnSignals {
        let scores = self.extractor.extract(message);
        signals_from_scores(&scores, reliance_of(message))
    }
}

/// Turn signals from a score vector and an already-judged reliance level.
pub fn signals_from_scores(scores: &SubprocessScores, reliance: RelianceLevel) -> TurnSignals {
    let level = |d: Dimension| SignalLevel::from_score(scores.get(d));
    TurnSignals {
        decomposition: level(Dimension::Decomposition),
        verification: level(Dimension::QualityChecking),
        iteration: level(Dimension::StrategyAdjustment),
        reflection: level(Dimension::LearningReflection),
        context_adaptation: level(Dimension::ContextAwareness),
        reliance,
    }
}

/// Delegation without ownership is high reliance; ownership without
/// delegation is low; anything else is moderate.
pub fn reliance_of(message: &str) -> RelianceLevel {
    let hit = |re: &LazyLock<Option<Regex>>| re.as_ref().is_some_and(|r| r.is_match(message));
    match (hit(&RE_DELEGATION), hit(&RE_OWNERSHIP)) {
        (true, false) => RelianceLevel::High,
        (false, true) => RelianceLevel::Low,
        _ => RelianceLevel::Moderate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegation_is_high_reliance() {
        assert_eq!(reliance_of("Just write the whole essay for me."), RelianceLevel::High);
        assert_eq!(reliance_of("帮我写完这篇报告"), RelianceLevel::High);
    }

    #[test]
    fn ownership_is_low_reliance() {
        assert_eq!(reliance_of("Here is my draft, I will check the numbers."), RelianceLevel::Low);
        assert_eq!(reliance_of("我自己先写一版"), RelianceLevel::Low);
    }

    #[test]
    fn neutral_message_is_moderate() {
        assert_eq!(reliance_of("What is the capital of France?"), RelianceLevel::Moderate);
    }

    #[test]
    fn detects_behavior_levels() {
        let signals = SignalDetector::new()
            .detect("Can you cross-check this against the original paper? Just write the summary after.");
        assert_eq!(signals.verification, SignalLevel::Strong);
        assert_eq!(signals.decomposition, SignalLevel::Absent);
        assert_eq!(signals.reliance, RelianceLevel::High);
    }

    #[test]
    fn passive_message() {
        let signals = SignalDetector::new().detect("Just do it for me.");
        assert_eq!(signals, TurnSignals::passive());
    }
}
