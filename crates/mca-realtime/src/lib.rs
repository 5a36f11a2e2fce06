//! # mca-realtime
//!
//! Live-session pattern recognition. Each turn is reduced to discretized
//! signals, and a per-session recognizer folds them into a posterior over
//! the six patterns with a fixed likelihood table.

pub mod detector;
pub mod likelihood;
pub mod recognizer;
pub mod registry;
pub mod signals;

pub use detector::SignalDetector;
pub use recognizer::OnlinePatternRecognizer;
pub use registry::{SessionInfo, SessionRegistry};
pub use signals::{RelianceLevel, Signal, SignalLevel, TurnSignals};
