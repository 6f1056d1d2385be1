//! Language registry: single source of truth for supported languages.
//!
//! The global registry is filled from the default engine exactly once, on
//! first access, and is read-only afterwards. Registries for other engines
//! can be built with [`LanguageRegistry::from_engine`].

use charprobe_engine::RecognitionEngine;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Set of language codes a detector may be constructed with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: Vec<String>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Query an engine for its languages
    ///
    /// A failed query yields an empty registry: every construction against
    /// it then fails with `InvalidLanguage`.
    pub fn from_engine(engine: &dyn RecognitionEngine) -> Self {
        match engine.languages() {
            Ok(languages) => {
                info!(
                    engine = engine.name(),
                    count = languages.len(),
                    "language registry initialized"
                );
                Self { languages }
            }
            Err(e) => {
                warn!(
                    engine = engine.name(),
                    error = %e,
                    "language registry initialization failed; no language will be accepted"
                );
                Self::default()
            }
        }
    }

    /// Initialize the global registry from the default engine
    ///
    /// Runs the engine query at most once, even under concurrent first use;
    /// later calls return the cached registry.
    pub fn initialize() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| Self::from_engine(charprobe_engine::default_engine().as_ref()))
    }

    /// Get the global registry, initializing it if needed
    pub fn global() -> &'static LanguageRegistry {
        Self::initialize()
    }

    /// All registered language codes
    pub fn list(&self) -> &[String] {
        &self.languages
    }

    /// Check if a language code is registered
    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|lang| lang == code)
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is registered
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Languages of the global registry
pub fn list_languages() -> &'static [String] {
    LanguageRegistry::global().list()
}
