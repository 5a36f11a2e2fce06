use serde::{Deserialize, Serialize};

/// Feature extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Score only the participant's own turns when the transcript carries
    /// speaker prefixes.
    pub participant_only: bool,
}
