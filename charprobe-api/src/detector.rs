//! Detector session
//!
//! A [`Detector`] binds one language to one analyser it owns exclusively.
//! Every use of the analyser happens under the session's lock, so a single
//! detector can be shared between threads; distinct detectors never contend.
//!
//! The analyser is released by [`Detector::release`] or, failing that, when
//! the detector is dropped. Any call after release fails with
//! [`ApiError::SessionClosed`].

use crate::{
    config::{ConfigBuilder, DetectorConfig},
    error::{ApiError, Result},
    naming::{self, CharsetNames},
    registry::LanguageRegistry,
};
use charprobe_engine::{Analyser, CharsetId, DetectionPolicy, NameStyle, RecognitionEngine};
use parking_lot::Mutex;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Charset detection session bound to one language
pub struct Detector {
    language: String,
    policy: DetectionPolicy,
    engine: Arc<dyn RecognitionEngine>,
    analyser: Mutex<Option<Box<dyn Analyser>>>,
    closed: AtomicBool,
}

impl Detector {
    /// Create a detector for a language with the default policy
    pub fn new(language: &str) -> Result<Self> {
        Self::with_config(DetectorConfig::new(language))
    }

    /// Create a detector from a configuration, using the default engine and
    /// the global registry
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        Self::with_engine(
            config,
            charprobe_engine::default_engine(),
            LanguageRegistry::global(),
        )
    }

    /// Create a detector on a specific engine, validated against a registry
    ///
    /// No analyser is allocated unless the language is registered and the
    /// configuration is valid.
    pub fn with_engine(
        config: DetectorConfig,
        engine: Arc<dyn RecognitionEngine>,
        registry: &LanguageRegistry,
    ) -> Result<Self> {
        if !registry.contains(&config.language) {
            return Err(ApiError::InvalidLanguage {
                language: config.language,
                available: registry.list().to_vec(),
            });
        }
        config.validate()?;

        let analyser = engine.analyser(&config.language, &config.policy)?;
        debug!(
            engine = engine.name(),
            language = %config.language,
            "detector session constructed"
        );

        Ok(Self {
            language: config.language,
            policy: config.policy,
            engine,
            analyser: Mutex::new(Some(analyser)),
            closed: AtomicBool::new(false),
        })
    }

    /// Create a builder
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::new()
    }

    /// Language the session is bound to
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Policy fixed at construction
    pub fn policy(&self) -> &DetectionPolicy {
        &self.policy
    }

    /// Whether the session has been released
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Detect the charset of a sample and render its name
    pub fn detect(&self, sample: &[u8], style: NameStyle) -> Result<String> {
        let charset = self.detect_charset(sample)?;
        Ok(naming::render(self.engine.as_ref(), charset, style))
    }

    /// Detect the charset of a text's bytes (convenience method)
    pub fn detect_str(&self, text: &str, style: NameStyle) -> Result<String> {
        self.detect(text.as_bytes(), style)
    }

    /// Read a file and detect its charset
    pub fn detect_file(&self, path: impl AsRef<Path>, style: NameStyle) -> Result<String> {
        let sample = std::fs::read(path)?;
        self.detect(&sample, style)
    }

    /// Detect the charset of a sample and render it under every style
    pub fn detect_names(&self, sample: &[u8]) -> Result<CharsetNames> {
        let charset = self.detect_charset(sample)?;
        Ok(CharsetNames::resolve(self.engine.as_ref(), charset))
    }

    /// Detect the charset of a sample, returning the engine identifier
    pub fn detect_charset(&self, sample: &[u8]) -> Result<CharsetId> {
        if self.is_closed() {
            return Err(ApiError::SessionClosed);
        }
        if sample.is_empty() {
            return Err(ApiError::EmptyInput);
        }

        let mut guard = self.analyser.lock();
        let analyser = guard.as_mut().ok_or(ApiError::SessionClosed)?;

        match analyser.analyse(sample) {
            Some(charset) => {
                trace!(language = %self.language, ?charset, len = sample.len(), "detected");
                Ok(charset)
            }
            None => {
                let code = analyser.errno();
                let message = analyser.strerror(code);
                trace!(language = %self.language, code, %message, "detection failed");
                Err(ApiError::DetectionFailed { code, message })
            }
        }
    }

    /// Release the analyser
    ///
    /// Waits for an in-flight detection on this session to finish. Releasing
    /// twice fails with [`ApiError::SessionClosed`].
    pub fn release(&self) -> Result<()> {
        let mut guard = self.analyser.lock();
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(ApiError::SessionClosed);
        }
        drop(guard.take());
        debug!(language = %self.language, "detector session released");
        Ok(())
    }
}

impl Drop for Detector {
    fn drop(&mut self) {
        if !*self.closed.get_mut() {
            *self.closed.get_mut() = true;
            drop(self.analyser.get_mut().take());
            debug!(language = %self.language, "detector session dropped");
        }
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("language", &self.language)
            .field("policy", &self.policy)
            .field("engine", &self.engine.name())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Builder for Detector
///
/// Provides a fluent interface over [`ConfigBuilder`] plus the choice of
/// engine.
#[derive(Default)]
pub struct DetectorBuilder {
    config_builder: ConfigBuilder,
    engine: Option<Arc<dyn RecognitionEngine>>,
    registry: Option<LanguageRegistry>,
}

impl DetectorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.language(language);
        self
    }

    /// Replace the whole policy
    pub fn policy(mut self, policy: DetectionPolicy) -> Self {
        self.config_builder = self.config_builder.policy(policy);
        self
    }

    /// Set the confidence threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config_builder = self.config_builder.threshold(threshold);
        self
    }

    /// Enable or disable multibyte recognition
    pub fn multibyte(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.multibyte(enabled);
        self
    }

    /// Enable or disable ambiguity resolution
    pub fn ambiguity(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.ambiguity(enabled);
        self
    }

    /// Enable or disable the garbage test
    pub fn garbage_test(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.garbage_test(enabled);
        self
    }

    /// Use a specific engine instead of the default one
    pub fn engine(mut self, engine: Arc<dyn RecognitionEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Validate against this registry instead of one queried from the engine
    pub fn registry(mut self, registry: LanguageRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the detector
    ///
    /// The language is checked against the registry before the policy, as
    /// for every other constructor.
    pub fn build(self) -> Result<Detector> {
        let config = self.config_builder.into_config();
        match self.engine {
            None => match self.registry {
                Some(registry) => {
                    Detector::with_engine(config, charprobe_engine::default_engine(), &registry)
                }
                None => Detector::with_config(config),
            },
            Some(engine) => {
                let registry = self
                    .registry
                    .unwrap_or_else(|| LanguageRegistry::from_engine(engine.as_ref()));
                Detector::with_engine(config, engine, &registry)
            }
        }
    }
}
