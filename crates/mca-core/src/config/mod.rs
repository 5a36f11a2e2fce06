pub mod context_config;
pub mod defaults;
pub mod extraction_config;
pub mod recognizer_config;

use serde::{Deserialize, Serialize};

pub use context_config::ContextConfig;
pub use extraction_config::ExtractionConfig;
pub use recognizer_config::RecognizerConfig;

use crate::errors::{McaError, McaResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct McaConfig {
    pub extraction: ExtractionConfig,
    pub context: ContextConfig,
    pub recognizer: RecognizerConfig,
}

impl McaConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> McaResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| McaError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the engine misbehave silently.
    pub fn validate(&self) -> McaResult<()> {
        self.context.validate()?;
        self.recognizer.validate()?;
        Ok(())
    }
}
