/// MCA engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of metacognitive sub-behaviors in a score vector.
pub const DIMENSION_COUNT: usize = 12;

/// Highest evidence score a single dimension can carry.
pub const MAX_EVIDENCE_SCORE: u8 = 3;

/// Highest possible total score (12 × 3).
pub const MAX_TOTAL_SCORE: u8 = 36;

/// Number of collaboration pattern labels.
pub const PATTERN_COUNT: usize = 6;
