/// Top-level error type for the MCA engine.
///
/// Scoring, filtering, classification, and recognizer updates never fail;
/// these variants only surface at parsing, configuration, and session
/// registry boundaries.
#[derive(Debug, thiserror::Error)]
pub enum McaError {
    #[error("invalid evidence score for {dimension}: {value} (expected 0..=3)")]
    InvalidScore { dimension: String, value: i64 },

    #[error("unknown pattern label: {label}")]
    UnknownPattern { label: String },

    #[error("unknown risk class: {label}")]
    UnknownRiskClass { label: String },

    #[error("unknown signal level: {label}")]
    UnknownSignalLevel { label: String },

    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    #[error("session already open: {id}")]
    SessionAlreadyOpen { id: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience type alias.
pub type McaResult<T> = Result<T, McaError>;
