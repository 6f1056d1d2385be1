//! Layered error types
//!
//! Engine errors cover the capability seam (allocating analysers, listing
//! languages). Per-sample failures are not errors at this layer: an analyser
//! reports them through its errno, see [`EngineErrno`].

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The engine has no profile for the requested language
    #[error("language '{code}' not supported by the engine")]
    UnknownLanguage {
        /// The language code that was requested
        code: String,
    },

    /// Detection policy rejected by the engine
    #[error("invalid detection policy: {0}")]
    InvalidPolicy(String),

    /// The engine could not be queried at all
    #[error("recognition engine unavailable: {0}")]
    Unavailable(String),
}

/// Numeric failure codes reported by an analyser after a failed analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EngineErrno {
    /// No error
    Ok = 0,
    /// Invalid value passed to the engine
    InvalidValue = 1,
    /// The sample was empty
    EmptySample = 2,
    /// Almost nothing remained after filtering
    Filtered = 3,
    /// Multibyte tests failed and the language has no 8bit charsets
    NoEightBitCharset = 4,
    /// Not enough significant (non-ASCII) data
    NotSignificant = 5,
    /// No candidate passed the confidence threshold
    NoWinner = 6,
    /// The sample looks like binary data
    Garbage = 7,
}

impl EngineErrno {
    /// All codes in numeric order
    pub const ALL: [EngineErrno; 8] = [
        EngineErrno::Ok,
        EngineErrno::InvalidValue,
        EngineErrno::EmptySample,
        EngineErrno::Filtered,
        EngineErrno::NoEightBitCharset,
        EngineErrno::NotSignificant,
        EngineErrno::NoWinner,
        EngineErrno::Garbage,
    ];

    /// Numeric code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a code, `None` for values outside the table
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|errno| errno.code() == code)
    }

    /// Fixed human readable message
    pub fn message(self) -> &'static str {
        match self {
            EngineErrno::Ok => "OK",
            EngineErrno::InvalidValue => "Invalid value",
            EngineErrno::EmptySample => "Sample is empty",
            EngineErrno::Filtered => "After filtering, (almost) nothing remained",
            EngineErrno::NoEightBitCharset => {
                "Multibyte tests failed and language contains no 8bit charsets"
            }
            EngineErrno::NotSignificant => "Not enough significant data",
            EngineErrno::NoWinner => "No clear winner",
            EngineErrno::Garbage => "Sample is garbage",
        }
    }
}

/// Message for an arbitrary numeric code
pub fn strerror(code: i32) -> &'static str {
    EngineErrno::from_code(code)
        .map(EngineErrno::message)
        .unwrap_or("Unknown error")
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
