//! Span definitions per operation: extraction, classification, dual coding, realtime.
//!
//! Each span carries the operation's identifying metadata via the `tracing` crate.
//! The macros resolve `tracing` through this crate, so callers need no direct
//! dependency on it.

/// Create an extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($chars:expr) => {
        $crate::tracing::debug_span!("mca.extraction", chars = $chars)
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($total:expr) => {
        $crate::tracing::debug_span!("mca.classification", total = $total)
    };
}

/// Create a dual-coding span.
#[macro_export]
macro_rules! dual_coding_span {
    ($chars:expr) => {
        $crate::tracing::info_span!("mca.dual_coding", chars = $chars)
    };
}

/// Create a realtime update span.
#[macro_export]
macro_rules! realtime_span {
    ($session_id:expr, $turn:expr) => {
        $crate::tracing::debug_span!("mca.realtime", session_id = %$session_id, turn = $turn)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EXTRACTION: &str = "mca.extraction";
    pub const CLASSIFICATION: &str = "mca.classification";
    pub const DUAL_CODING: &str = "mca.dual_coding";
    pub const REALTIME: &str = "mca.realtime";
}

#[cfg(test)]
mod tests {
    #[test]
    fn span_macros_expand_through_the_reexport() {
        let spans = [
            crate::extraction_span!(42usize),
            crate::classification_span!(18u8),
            crate::dual_coding_span!(42usize),
            crate::realtime_span!("session-1", 3u32),
        ];
        for span in &spans {
            let _guard = span.enter();
        }
    }
}
