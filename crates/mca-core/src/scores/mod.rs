//! The twelve-dimension evidence vector and its parts.

mod dimension;
mod evidence;
mod subprocess;

pub use dimension::{Dimension, Family};
pub use evidence::EvidenceScore;
pub use subprocess::SubprocessScores;
