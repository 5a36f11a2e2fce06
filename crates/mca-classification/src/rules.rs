//! Ordered classification rules. The first rule whose condition holds
//! decides the pattern.
//!
//! 1. total < 15 → F
//! 2. P1, M2, E3 ≥ 2 and total ≥ 24 → A
//! 3. M2 = 3, E1 ≥ 2, total ≥ 20 → D
//! 4. R1 ≥ 2, total ≥ 20 → B
//! 5. P3 ≥ 2, R2 ≥ 2, total ≥ 22 → C
//! 6. E1 + E2 + E3 ≥ 6, total ≥ 20 → E
//! 7. total ≥ 20 → pattern of the strongest dimension pairing
//! 8. otherwise → F
//!
//! Rules 2 and 3 overlap (a vector can satisfy both); order decides.

use mca_core::{BatchConfidence, Dimension, Pattern, SubprocessScores};

/// What a rule assigns when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    Fixed(Pattern),
    /// Pattern of the highest-summing [`Pairing`].
    StrongestPairing,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub outcome: RuleOutcome,
    pub applies: fn(&SubprocessScores, u8) -> bool,
    pub confidence: fn(&SubprocessScores, u8) -> BatchConfidence,
}

impl ClassificationRule {
    pub fn pattern(&self, scores: &SubprocessScores) -> Pattern {
        match self.outcome {
            RuleOutcome::Fixed(pattern) => pattern,
            RuleOutcome::StrongestPairing => strongest_pairing(scores),
        }
    }
}

/// Two dimensions whose combined score points at one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub pattern: Pattern,
    pub dimensions: [Dimension; 2],
}

impl Pairing {
    pub fn sum(&self, scores: &SubprocessScores) -> u8 {
        self.dimensions.iter().map(|d| scores.get(*d).value()).sum()
    }
}

/// Pairings in tie-break order.
pub const PAIRINGS: [Pairing; 4] = [
    Pairing {
        pattern: Pattern::A,
        dimensions: [Dimension::Decomposition, Dimension::ResourcePlanning],
    },
    Pairing {
        pattern: Pattern::D,
        dimensions: [Dimension::QualityChecking, Dimension::ResultEvaluation],
    },
    Pairing {
        pattern: Pattern::B,
        dimensions: [Dimension::StrategyAdjustment, Dimension::TrustCalibration],
    },
    Pairing {
        pattern: Pattern::C,
        dimensions: [Dimension::StrategySelection, Dimension::ContextAwareness],
    },
];

/// Pattern of the pairing with the largest sum; ties go to the earlier pairing.
pub fn strongest_pairing(scores: &SubprocessScores) -> Pattern {
    let mut best = PAIRINGS[0];
    for pairing in &PAIRINGS[1..] {
        if pairing.sum(scores) > best.sum(scores) {
            best = *pairing;
        }
    }
    best.pattern
}

fn v(scores: &SubprocessScores, dimension: Dimension) -> u8 {
    scores.get(dimension).value()
}

// ── Conditions ─────────────────────────────────────────────────────────────

fn low_total(_: &SubprocessScores, total: u8) -> bool {
    total < 15
}

fn strategic(s: &SubprocessScores, total: u8) -> bool {
    v(s, Dimension::Decomposition) >= 2
        && v(s, Dimension::QualityChecking) >= 2
        && v(s, Dimension::CapabilityJudgment) >= 2
        && total >= 24
}

fn verifying(s: &SubprocessScores, total: u8) -> bool {
    v(s, Dimension::QualityChecking) == 3 && v(s, Dimension::ResultEvaluation) >= 2 && total >= 20
}

fn iterative(s: &SubprocessScores, total: u8) -> bool {
    v(s, Dimension::StrategyAdjustment) >= 2 && total >= 20
}

fn context_adaptive(s: &SubprocessScores, total: u8) -> bool {
    v(s, Dimension::StrategySelection) >= 2 && v(s, Dimension::TrustCalibration) >= 2 && total >= 22
}

fn reflective(s: &SubprocessScores, total: u8) -> bool {
    s.family_total(mca_core::Family::Evaluation) >= 6 && total >= 20
}

fn mid_total(_: &SubprocessScores, total: u8) -> bool {
    total >= 20
}

fn always(_: &SubprocessScores, _: u8) -> bool {
    true
}

// ── Confidence ─────────────────────────────────────────────────────────────

fn passive_confidence(s: &SubprocessScores, _: u8) -> BatchConfidence {
    let zeros = [
        Dimension::Decomposition,
        Dimension::QualityChecking,
        Dimension::CapabilityJudgment,
    ]
    .into_iter()
    .filter(|d| s.get(*d).is_zero())
    .count();
    if zeros >= 2 {
        BatchConfidence::High
    } else {
        BatchConfidence::Moderate
    }
}

fn strategic_confidence(s: &SubprocessScores, _: u8) -> BatchConfidence {
    let core = v(s, Dimension::Decomposition)
        + v(s, Dimension::ResourcePlanning)
        + v(s, Dimension::QualityChecking)
        + v(s, Dimension::CapabilityJudgment);
    if core >= 10 {
        BatchConfidence::High
    } else {
        BatchConfidence::Moderate
    }
}

fn iterative_confidence(s: &SubprocessScores, _: u8) -> BatchConfidence {
    if v(s, Dimension::StrategyAdjustment) == 3 {
        BatchConfidence::High
    } else {
        BatchConfidence::Moderate
    }
}

fn high(_: &SubprocessScores, _: u8) -> BatchConfidence {
    BatchConfidence::High
}

fn moderate(_: &SubprocessScores, _: u8) -> BatchConfidence {
    BatchConfidence::Moderate
}

fn low(_: &SubprocessScores, _: u8) -> BatchConfidence {
    BatchConfidence::Low
}

static RULES: [ClassificationRule; 8] = [
    ClassificationRule {
        name: "low_total_passive",
        outcome: RuleOutcome::Fixed(Pattern::F),
        applies: low_total,
        confidence: passive_confidence,
    },
    ClassificationRule {
        name: "strategic_decomposition",
        outcome: RuleOutcome::Fixed(Pattern::A),
        applies: strategic,
        confidence: strategic_confidence,
    },
    ClassificationRule {
        name: "deep_verification",
        outcome: RuleOutcome::Fixed(Pattern::D),
        applies: verifying,
        confidence: high,
    },
    ClassificationRule {
        name: "iterative_refinement",
        outcome: RuleOutcome::Fixed(Pattern::B),
        applies: iterative,
        confidence: iterative_confidence,
    },
    ClassificationRule {
        name: "context_adaptive",
        outcome: RuleOutcome::Fixed(Pattern::C),
        applies: context_adaptive,
        confidence: moderate,
    },
    ClassificationRule {
        name: "reflective_learning",
        outcome: RuleOutcome::Fixed(Pattern::E),
        applies: reflective,
        confidence: moderate,
    },
    ClassificationRule {
        name: "strongest_pairing",
        outcome: RuleOutcome::StrongestPairing,
        applies: mid_total,
        confidence: low,
    },
    ClassificationRule {
        name: "default_passive",
        outcome: RuleOutcome::Fixed(Pattern::F),
        applies: always,
        confidence: moderate,
    },
];

/// The rule table, in evaluation order.
pub fn all_rules() -> &'static [ClassificationRule] {
    &RULES
}

/// First rule whose condition holds. The last rule always applies.
pub fn find_applicable_rule(scores: &SubprocessScores, total: u8) -> &'static ClassificationRule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(scores, total))
        .unwrap_or(&RULES[RULES.len() - 1])
}
