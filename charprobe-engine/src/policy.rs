//! Detection policy
//!
//! The four tuning knobs an analyser is created with. A policy is handed to
//! the engine once, when the analyser is allocated, and never changes for the
//! lifetime of that analyser.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Default confidence threshold
pub const DEFAULT_THRESHOLD: f64 = 1.38;

/// Tuning parameters for one analyser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionPolicy {
    /// Minimum ratio between plausible and implausible evidence for a guess
    /// to be accepted. Lower values accept more ambiguous matches.
    pub threshold: f64,
    /// Recognize multibyte encodings (UTF-8, byte-order marks)
    pub multibyte: bool,
    /// Resolve ties in favour of the language's preferred charset instead of
    /// failing
    pub ambiguity: bool,
    /// Reject binary-looking samples
    pub garbage_test: bool,
}

impl Default for DetectionPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            multibyte: true,
            ambiguity: true,
            garbage_test: true,
        }
    }
}

impl DetectionPolicy {
    /// Create a strict policy: higher threshold, no tie resolution
    pub fn strict() -> Self {
        Self {
            threshold: 2.0,
            ambiguity: false,
            ..Default::default()
        }
    }

    /// Create a permissive policy that accepts nearly any guess
    pub fn permissive() -> Self {
        Self {
            threshold: 1.0,
            garbage_test: false,
            ..Default::default()
        }
    }

    /// Create a balanced policy
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Check the policy before an analyser is built with it
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 1.0 {
            return Err(EngineError::InvalidPolicy(format!(
                "threshold must be a finite value >= 1.0, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
