use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

use crate::constants::MAX_EVIDENCE_SCORE;
use crate::errors::McaError;

/// Strength of evidence for one metacognitive sub-behavior, in `0..=3`.
///
/// Construction through [`EvidenceScore::new`] clamps; deserialization and
/// `TryFrom` reject out-of-range values instead of clamping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct EvidenceScore(u8);

impl EvidenceScore {
    pub const NONE: Self = Self(0);
    pub const WEAK: Self = Self(1);
    pub const MODERATE: Self = Self(2);
    pub const STRONG: Self = Self(3);

    /// Create a new score, clamping to `0..=3`.
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_EVIDENCE_SCORE))
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for EvidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for EvidenceScore {
    type Error = McaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_EVIDENCE_SCORE {
            return Err(McaError::InvalidScore {
                dimension: "evidence".to_string(),
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }
}

impl From<EvidenceScore> for u8 {
    fn from(score: EvidenceScore) -> Self {
        score.0
    }
}

impl Serialize for EvidenceScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for EvidenceScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        EvidenceScore::try_from(raw).map_err(serde::de::Error::custom)
    }
}
