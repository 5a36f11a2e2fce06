//! # mca-extraction
//!
//! Turns transcript text into a twelve-dimension evidence vector.
//!
//! Every dimension is scored by its own ordered cascade of evidence tiers
//! (strong, moderate, negated, keyword, absent) over a bilingual
//! English/Chinese vocabulary. Vocabulary patterns compile once, lazily;
//! a pattern that fails to compile disables its tier instead of panicking.

pub mod cascade;
pub mod engine;
pub mod lexicon;
pub mod transcript;

pub use cascade::{DimensionExplanation, Tier};
pub use engine::FeatureExtractor;
pub use lexicon::{pattern_health, PatternFailure};
pub use transcript::{participant_text, parse_turns, Speaker, Turn};
