//! Recognition capability seam
//!
//! Everything above this module talks to charset recognition only through
//! these two traits, so sessions and naming can run against any engine,
//! including test doubles.

use crate::{
    charset::{CharsetId, NameStyle},
    error::Result,
    policy::DetectionPolicy,
};

/// A charset recognition engine
pub trait RecognitionEngine: Send + Sync {
    /// Short identifier of the engine, used in logs
    fn name(&self) -> &'static str;

    /// Language codes the engine has profiles for
    fn languages(&self) -> Result<Vec<String>>;

    /// Allocate an analyser bound to one language with a fixed policy
    fn analyser(&self, language: &str, policy: &DetectionPolicy) -> Result<Box<dyn Analyser>>;

    /// Name of a charset under a naming style, `None` when the style has no
    /// name for it
    fn charset_name(&self, charset: CharsetId, style: NameStyle) -> Option<&str>;
}

/// Per-language analyser handle
///
/// Analysers keep bookkeeping between calls (the errno of the last failed
/// analysis at least), so they need exclusive access while analysing.
pub trait Analyser: Send {
    /// Language the analyser was allocated for
    fn language(&self) -> &str;

    /// Analyse a sample
    ///
    /// # Returns
    /// The recognized charset, or `None` when recognition failed; the cause
    /// is then available from [`Analyser::errno`].
    fn analyse(&mut self, sample: &[u8]) -> Option<CharsetId>;

    /// Code of the last failure
    fn errno(&self) -> i32;

    /// Message for a failure code
    fn strerror(&self, errno: i32) -> String;
}
