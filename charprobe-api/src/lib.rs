//! Public API for charprobe charset detection
//!
//! This crate provides detector sessions bound to a language, the
//! process-wide language registry, and rendering of detected charsets under
//! the caller's naming style.
//!
//! ```no_run
//! use charprobe_api::{Detector, NameStyle};
//!
//! let detector = Detector::new("zh")?;
//! let name = detector.detect_str("美国各州选民今天开始正式投票。据信，", NameStyle::Human)?;
//! assert_eq!(name, "UTF-8");
//! detector.release()?;
//! # Ok::<(), charprobe_api::ApiError>(())
//! ```

#![warn(missing_docs)]

#[cfg(feature = "parallel")]
pub mod batch;
pub mod config;
pub mod detector;
pub mod error;
pub mod naming;
pub mod registry;

// Re-export key types
#[cfg(feature = "parallel")]
pub use batch::detect_batch;
pub use config::{ConfigBuilder, DetectorConfig};
pub use detector::{Detector, DetectorBuilder};
pub use error::{ApiError, Result};
pub use naming::CharsetNames;
pub use registry::{list_languages, LanguageRegistry};

// Re-export from engine for convenience
pub use charprobe_engine::{
    Analyser, CharsetId, DetectionPolicy, EngineErrno, EngineError, NameStyle, RecognitionEngine,
};

// Convenience functions

/// Detect the charset of a sample with a one-off session
pub fn detect_bytes(language: &str, sample: &[u8], style: NameStyle) -> Result<String> {
    let detector = Detector::new(language)?;
    let result = detector.detect(sample, style);
    detector.release()?;
    result
}

/// Detect the charset of a text's bytes with a one-off session
pub fn detect_text(language: &str, text: &str, style: NameStyle) -> Result<String> {
    detect_bytes(language, text.as_bytes(), style)
}
