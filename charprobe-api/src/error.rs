//! API error types

use charprobe_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Construction requested with a language outside the registry
    #[error("invalid language '{language}'. Available languages are: '{}'", available.join("', '"))]
    InvalidLanguage {
        /// The rejected language
        language: String,
        /// Every language the registry accepts
        available: Vec<String>,
    },

    /// Detection requested on a zero-length buffer
    #[error("cannot detect the charset of an empty sample")]
    EmptyInput,

    /// The engine could not determine an encoding
    #[error("error {code}: {message}")]
    DetectionFailed {
        /// Engine-defined failure code
        code: i32,
        /// Engine message for the code
        message: String,
    },

    /// The session was released
    #[error("detector session is closed")]
    SessionClosed,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
