use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use mca_core::{EvidenceScore, McaError};

/// Discretized strength of one behavior within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalLevel {
    #[default]
    Absent,
    Weak,
    Strong,
}

impl SignalLevel {
    /// 0 → absent, 1 → weak, 2 or more → strong.
    pub fn from_score(score: EvidenceScore) -> Self {
        match score.value() {
            0 => SignalLevel::Absent,
            1 => SignalLevel::Weak,
            _ => SignalLevel::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignalLevel::Absent => "absent",
            SignalLevel::Weak => "weak",
            SignalLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalLevel {
    type Err = McaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absent" => Ok(SignalLevel::Absent),
            "weak" => Ok(SignalLevel::Weak),
            "strong" => Ok(SignalLevel::Strong),
            other => Err(McaError::UnknownSignalLevel {
                label: other.to_string(),
            }),
        }
    }
}

/// How much of the work the person hands to the assistant within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelianceLevel {
    Low,
    #[default]
    Moderate,
    High,
}

impl RelianceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RelianceLevel::Low => "low",
            RelianceLevel::Moderate => "moderate",
            RelianceLevel::High => "high",
        }
    }
}

impl fmt::Display for RelianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelianceLevel {
    type Err = McaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RelianceLevel::Low),
            "moderate" => Ok(RelianceLevel::Moderate),
            "high" => Ok(RelianceLevel::High),
            other => Err(McaError::UnknownSignalLevel {
                label: other.to_string(),
            }),
        }
    }
}
