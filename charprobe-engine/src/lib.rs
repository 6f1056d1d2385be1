//! Charset recognition capability for charprobe
//!
//! This crate defines the narrow interface sessions use to reach a charset
//! recognition engine, the detection policy analysers are built with, the
//! charset name tables, and the default engine built on `chardetng`.

#![warn(missing_docs)]

pub mod capability;
pub mod chardet;
pub mod charset;
pub mod error;
pub mod language;
pub mod policy;

use std::sync::{Arc, OnceLock};

// Re-export key types
pub use capability::{Analyser, RecognitionEngine};
pub use chardet::{ChardetAnalyser, ChardetEngine};
pub use charset::{CharsetId, CharsetInfo, NameStyle};
pub use error::{EngineErrno, EngineError, Result};
pub use language::{LanguageProfile, Script, NEUTRAL_LANGUAGE};
pub use policy::{DetectionPolicy, DEFAULT_THRESHOLD};

static DEFAULT_ENGINE: OnceLock<Arc<dyn RecognitionEngine>> = OnceLock::new();

/// Process-wide default engine
pub fn default_engine() -> Arc<dyn RecognitionEngine> {
    DEFAULT_ENGINE
        .get_or_init(|| {
            let engine: Arc<dyn RecognitionEngine> = Arc::new(ChardetEngine::new());
            engine
        })
        .clone()
}
