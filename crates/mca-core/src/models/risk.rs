use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use super::{BatchClassification, BatchConfidence, Pattern};
use crate::errors::McaError;
use crate::scores::SubprocessScores;

/// Stakes of the task an excerpt talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskClass {
    High,
    Low,
}

impl RiskClass {
    pub const ALL: [RiskClass; 2] = [RiskClass::High, RiskClass::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskClass::High => "high",
            RiskClass::Low => "low",
        }
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskClass {
    type Err = McaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(RiskClass::High),
            "low" => Ok(RiskClass::Low),
            other => Err(McaError::UnknownRiskClass {
                label: other.to_string(),
            }),
        }
    }
}

/// Coding of the excerpt of a transcript that matches one risk class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskContextCoding {
    pub risk_class: RiskClass,
    pub filtered_text: String,
    pub word_count: usize,
    pub scores: SubprocessScores,
    pub total_score: u8,
    pub classification: BatchClassification,
}

impl RiskContextCoding {
    pub fn pattern(&self) -> Pattern {
        self.classification.pattern
    }

    /// Length of the filtered excerpt in Unicode scalar values.
    pub fn filtered_chars(&self) -> usize {
        self.filtered_text.chars().count()
    }
}

/// High- and low-stakes codings of the same transcript, plus the one chosen
/// as primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DualCoding {
    pub high_risk: RiskContextCoding,
    pub low_risk: RiskContextCoding,
    pub primary_pattern: Pattern,
    pub primary_score: u8,
    pub primary_confidence: BatchConfidence,
    /// Which coding the primary fields were taken from.
    pub primary_source: RiskClass,
}

impl DualCoding {
    /// Whether the person's pattern differs between high- and low-stakes tasks.
    pub fn is_context_dependent(&self) -> bool {
        self.high_risk.pattern() != self.low_risk.pattern()
    }
}
