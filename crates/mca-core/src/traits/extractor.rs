use crate::scores::SubprocessScores;

/// Turns free text into a twelve-dimension evidence vector.
///
/// Implementations never fail: degenerate input yields the all-zero vector.
pub trait IFeatureExtractor: Send + Sync {
    fn extract(&self, text: &str) -> SubprocessScores;
}
