use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::McaError;

/// Collaboration pattern label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Pattern {
    /// Strategic decomposition: plans and splits work before delegating.
    A,
    /// Iterative refinement: improves output through repeated adjustment.
    B,
    /// Context-adaptive: changes behavior with the stakes of the task.
    C,
    /// Deep verification: systematically checks output against sources.
    D,
    /// Reflective, teaching-oriented: uses the AI to learn and reflect.
    E,
    /// Passive, uncritical: accepts output without checking or iterating.
    F,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::A,
        Pattern::B,
        Pattern::C,
        Pattern::D,
        Pattern::E,
        Pattern::F,
    ];

    pub const COUNT: usize = 6;

    /// Index for array access.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Pattern> {
        Pattern::ALL.get(i).copied()
    }

    /// Single-letter label.
    pub fn letter(self) -> &'static str {
        match self {
            Pattern::A => "A",
            Pattern::B => "B",
            Pattern::C => "C",
            Pattern::D => "D",
            Pattern::E => "E",
            Pattern::F => "F",
        }
    }

    /// Display name of the collaboration style.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::A => "Strategic Decomposition",
            Pattern::B => "Iterative Refinement",
            Pattern::C => "Context-Adaptive",
            Pattern::D => "Deep Verification",
            Pattern::E => "Reflective Learning",
            Pattern::F => "Passive Reliance",
        }
    }

    /// One-sentence description of the behavior the label stands for.
    pub fn description(self) -> &'static str {
        match self {
            Pattern::A => "Breaks tasks into parts, sets goals, and verifies output before relying on it.",
            Pattern::B => "Refines results through repeated rephrasing and adjustment across turns.",
            Pattern::C => "Adapts checking and trust to the stakes and context of each task.",
            Pattern::D => "Systematically checks output against sources and evaluates its quality.",
            Pattern::E => "Uses the assistant to learn, reflecting on results and its limits.",
            Pattern::F => "Accepts output as given without planning, checking, or iterating.",
        }
    }

    /// Pattern F is the only label that calls for intervention.
    pub fn is_at_risk(self) -> bool {
        self == Pattern::F
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Pattern {
    type Err = McaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Pattern::ALL
            .into_iter()
            .find(|p| p.letter().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| McaError::UnknownPattern {
                label: trimmed.to_string(),
            })
    }
}

/// Categorical confidence attached to a batch rule match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum BatchConfidence {
    Low,
    Moderate,
    High,
}

impl BatchConfidence {
    pub fn as_str(self) -> &'static str {
        match self {
            BatchConfidence::Low => "low",
            BatchConfidence::Moderate => "moderate",
            BatchConfidence::High => "high",
        }
    }
}

impl fmt::Display for BatchConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-shot transcript label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchClassification {
    pub pattern: Pattern,
    pub confidence: BatchConfidence,
}

impl BatchClassification {
    pub fn new(pattern: Pattern, confidence: BatchConfidence) -> Self {
        Self {
            pattern,
            confidence,
        }
    }
}

impl fmt::Display for BatchClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.pattern, self.confidence)
    }
}
