//! Classification outputs produced by the engine.

mod estimate;
mod pattern;
mod risk;

pub use estimate::PatternEstimate;
pub use pattern::{BatchClassification, BatchConfidence, Pattern};
pub use risk::{DualCoding, RiskClass, RiskContextCoding};
