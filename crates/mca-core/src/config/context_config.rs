use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{McaError, McaResult};

/// Context filter and dual-context composer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContextConfig {
    /// Neighboring lines included on each side of an indicator line.
    pub window: usize,
    /// High-risk excerpts shorter than this fall back to the low-risk coding.
    pub min_primary_chars: usize,
}

impl ContextConfig {
    pub(crate) fn validate(&self) -> McaResult<()> {
        if self.min_primary_chars == 0 {
            return Err(McaError::ConfigError(
                "context.min_primary_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_CONTEXT_WINDOW,
            min_primary_chars: defaults::DEFAULT_MIN_PRIMARY_CHARS,
        }
    }
}
