//! High-level configuration API

use crate::error::{ApiError, Result};
use charprobe_engine::{DetectionPolicy, NEUTRAL_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of one detector session
///
/// Loaded from TOML as:
///
/// ```toml
/// language = "zh"
///
/// [policy]
/// threshold = 1.38
/// multibyte = true
/// ambiguity = true
/// garbage_test = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Language code the session is bound to
    pub language: String,
    /// Detection policy fixed at construction
    pub policy: DetectionPolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            language: NEUTRAL_LANGUAGE.to_string(),
            policy: DetectionPolicy::default(),
        }
    }
}

impl DetectorConfig {
    /// Create a configuration for a language with the default policy
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    /// Create a strict configuration
    pub fn strict(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            policy: DetectionPolicy::strict(),
        }
    }

    /// Create a permissive configuration
    pub fn permissive(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            policy: DetectionPolicy::permissive(),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: DetectorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Check the configuration without consulting the registry
    pub fn validate(&self) -> Result<()> {
        if self.language.is_empty() {
            return Err(ApiError::Config("language cannot be empty".to_string()));
        }
        self.policy
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: DetectorConfig,
}

impl ConfigBuilder {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Replace the whole policy
    pub fn policy(mut self, policy: DetectionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the confidence threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.policy.threshold = threshold;
        self
    }

    /// Enable or disable multibyte recognition
    pub fn multibyte(mut self, enabled: bool) -> Self {
        self.config.policy.multibyte = enabled;
        self
    }

    /// Enable or disable ambiguity resolution
    pub fn ambiguity(mut self, enabled: bool) -> Self {
        self.config.policy.ambiguity = enabled;
        self
    }

    /// Enable or disable the garbage test
    pub fn garbage_test(mut self, enabled: bool) -> Self {
        self.config.policy.garbage_test = enabled;
        self
    }

    /// Use strict policy preset
    pub fn strict(mut self) -> Self {
        self.config.policy = DetectionPolicy::strict();
        self
    }

    /// Use permissive policy preset
    pub fn permissive(mut self) -> Self {
        self.config.policy = DetectionPolicy::permissive();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DetectorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Take the configuration as set, leaving validation to the caller
    pub(crate) fn into_config(self) -> DetectorConfig {
        self.config
    }
}
