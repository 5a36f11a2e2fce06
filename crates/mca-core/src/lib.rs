//! # mca-core
//!
//! Foundation crate for the MCA behavioral pattern engine.
//! Defines the score vector, pattern labels, coding results, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;
pub mod scores;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::McaConfig;
pub use errors::{McaError, McaResult};
pub use models::{
    BatchClassification, BatchConfidence, DualCoding, Pattern, PatternEstimate, RiskClass,
    RiskContextCoding,
};
pub use scores::{Dimension, EvidenceScore, Family, SubprocessScores};

#[doc(hidden)]
pub use tracing;
