//! # mca-classification
//!
//! Batch pattern classification:
//! - `rules`: the ordered rule table mapping a score vector to a pattern
//! - `classifier`: first-match evaluation of the table
//! - `dual`: filter, extract, and classify once per risk class
//! - `evaluation`: accuracy and per-pattern metrics against labeled vectors

pub mod classifier;
pub mod dual;
pub mod evaluation;
pub mod rules;

pub use classifier::{PatternClassifier, RuleMatch};
pub use dual::DualContextComposer;
pub use evaluation::{evaluate, EvaluationReport, LabeledScores, PatternMetrics};
