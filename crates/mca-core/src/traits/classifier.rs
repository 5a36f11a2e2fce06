use crate::models::BatchClassification;
use crate::scores::SubprocessScores;

/// Maps a score vector and its total to a pattern label.
///
/// `total` must equal `scores.total()`; implementations do not check it.
pub trait IPatternClassifier: Send + Sync {
    fn classify(&self, scores: &SubprocessScores, total: u8) -> BatchClassification;
}
