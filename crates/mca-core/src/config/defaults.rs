//! Default values for every configurable knob.

/// Lines of context kept on each side of a risk-indicator line.
pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

/// Minimum length (chars) of the high-risk excerpt for it to become primary.
pub const DEFAULT_MIN_PRIMARY_CHARS: usize = 200;

/// Prior probability mass given to pattern F before any turn is observed.
pub const DEFAULT_F_PRIOR: f64 = 0.01;

/// Posterior floor applied before renormalization.
pub const DEFAULT_FLOOR_EPSILON: f64 = 1e-6;

/// Margin below which the recognizer asks for more turns.
pub const DEFAULT_MARGIN_THRESHOLD: f64 = 0.3;

/// Turn count at which the recognizer stops asking for more turns.
pub const DEFAULT_MIN_TURNS: u32 = 10;

/// P(F) that must be exceeded before the acute-risk guard can fire.
pub const DEFAULT_HIGH_RISK_F_THRESHOLD: f64 = 0.5;

/// Evidence-trail entries retained per recognizer.
pub const DEFAULT_MAX_EVIDENCE_ENTRIES: usize = 100;
