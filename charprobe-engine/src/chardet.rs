//! Default recognition engine
//!
//! Statistical guessing is delegated to `chardetng`; this module layers the
//! detection policy on top of it:
//!
//! 1. a byte-order mark decides the charset when multibyte recognition is on,
//! 2. binary-looking samples are rejected when the garbage test is on,
//! 3. pure ASCII and then valid UTF-8 are recognized without guessing,
//! 4. 8bit samples are guessed with and without the language's domain hint;
//!    disagreement is a tie that only the ambiguity setting may resolve,
//! 5. the decoded guess must contain at least `threshold` times more
//!    characters of the language's script than implausible ones.

use crate::{
    capability::{Analyser, RecognitionEngine},
    charset::{self, CharsetId, NameStyle},
    error::{self, EngineErrno, EngineError, Result},
    language::{self, LanguageProfile, Script},
    policy::DetectionPolicy,
};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::{debug, trace};

/// Share of control bytes above which a sample counts as binary
const GARBAGE_RATIO: f64 = 0.05;

/// Engine backed by `chardetng` and `encoding_rs`
#[derive(Debug, Default, Clone, Copy)]
pub struct ChardetEngine;

impl ChardetEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }
}

impl RecognitionEngine for ChardetEngine {
    fn name(&self) -> &'static str {
        "chardetng"
    }

    fn languages(&self) -> Result<Vec<String>> {
        Ok(language::profiles()
            .iter()
            .map(|profile| profile.code.to_string())
            .collect())
    }

    fn analyser(&self, language: &str, policy: &DetectionPolicy) -> Result<Box<dyn Analyser>> {
        policy.validate()?;
        let profile = language::profile(language).ok_or_else(|| EngineError::UnknownLanguage {
            code: language.to_string(),
        })?;

        debug!(
            engine = self.name(),
            language,
            threshold = policy.threshold,
            "allocated analyser"
        );
        Ok(Box::new(ChardetAnalyser::new(profile, *policy)))
    }

    fn charset_name(&self, charset: CharsetId, style: NameStyle) -> Option<&str> {
        charset::charset_name(charset, style)
    }
}

/// Analyser produced by [`ChardetEngine`]
#[derive(Debug)]
pub struct ChardetAnalyser {
    profile: &'static LanguageProfile,
    policy: DetectionPolicy,
    errno: EngineErrno,
    samples: u64,
}

impl ChardetAnalyser {
    /// Create an analyser for a profile
    pub fn new(profile: &'static LanguageProfile, policy: DetectionPolicy) -> Self {
        Self {
            profile,
            policy,
            errno: EngineErrno::Ok,
            samples: 0,
        }
    }

    /// Policy fixed at allocation
    pub fn policy(&self) -> &DetectionPolicy {
        &self.policy
    }

    /// Number of samples analysed so far
    pub fn samples_analysed(&self) -> u64 {
        self.samples
    }

    fn recognize(&self, sample: &[u8]) -> std::result::Result<CharsetId, EngineErrno> {
        if sample.is_empty() {
            return Err(EngineErrno::EmptySample);
        }

        if self.policy.multibyte {
            if let Some((encoding, _)) = Encoding::for_bom(sample) {
                return CharsetId::for_encoding(encoding).ok_or(EngineErrno::NoWinner);
            }
        }

        if self.policy.garbage_test && looks_like_garbage(sample) {
            return Err(EngineErrno::Garbage);
        }

        if sample.is_ascii() {
            return Ok(CharsetId::ASCII);
        }

        if self.policy.multibyte && std::str::from_utf8(sample).is_ok() {
            return Ok(CharsetId::UTF_8);
        }

        self.guess_eight_bit(sample)
    }

    fn guess_eight_bit(&self, sample: &[u8]) -> std::result::Result<CharsetId, EngineErrno> {
        let mut detector = EncodingDetector::new();
        detector.feed(sample, true);

        let allow_utf8 = self.policy.multibyte;
        let hinted = detector.guess(self.profile.tld, allow_utf8);
        let unhinted = detector.guess(None, allow_utf8);
        self.judge(sample, hinted, unhinted)
    }

    /// Apply the ambiguity and threshold settings to a pair of guesses
    fn judge(
        &self,
        sample: &[u8],
        hinted: &'static Encoding,
        unhinted: &'static Encoding,
    ) -> std::result::Result<CharsetId, EngineErrno> {
        if hinted != unhinted && !self.policy.ambiguity {
            return Err(EngineErrno::NoWinner);
        }

        let evidence = Evidence::collect(hinted, sample, self.profile.script);
        if evidence.is_empty() {
            return Err(EngineErrno::NotSignificant);
        }
        if evidence.ratio() < self.policy.threshold {
            return Err(EngineErrno::NoWinner);
        }

        CharsetId::for_encoding(hinted).ok_or(EngineErrno::NoWinner)
    }
}

impl Analyser for ChardetAnalyser {
    fn language(&self) -> &str {
        self.profile.code
    }

    fn analyse(&mut self, sample: &[u8]) -> Option<CharsetId> {
        self.samples += 1;
        match self.recognize(sample) {
            Ok(charset) => {
                self.errno = EngineErrno::Ok;
                trace!(language = self.profile.code, ?charset, len = sample.len(), "recognized");
                Some(charset)
            }
            Err(errno) => {
                self.errno = errno;
                trace!(language = self.profile.code, ?errno, len = sample.len(), "not recognized");
                None
            }
        }
    }

    fn errno(&self) -> i32 {
        self.errno.code()
    }

    fn strerror(&self, errno: i32) -> String {
        error::strerror(errno).to_string()
    }
}

/// Script evidence found in a decoded sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Evidence {
    plausible: usize,
    implausible: usize,
}

impl Evidence {
    fn collect(encoding: &'static Encoding, sample: &[u8], script: Script) -> Self {
        let (text, _) = encoding.decode_without_bom_handling(sample);
        let mut evidence = Evidence::default();
        for ch in text.chars().filter(|ch| !ch.is_ascii()) {
            if script.accepts(ch) {
                evidence.plausible += 1;
            } else if ch == char::REPLACEMENT_CHARACTER || ch.is_control() || ch.is_alphabetic() {
                evidence.implausible += 1;
            }
            // Other punctuation and symbols say nothing about the script.
        }
        evidence
    }

    fn is_empty(&self) -> bool {
        self.plausible == 0 && self.implausible == 0
    }

    fn ratio(&self) -> f64 {
        (self.plausible + 1) as f64 / (self.implausible + 1) as f64
    }
}

fn looks_like_garbage(sample: &[u8]) -> bool {
    let control = sample
        .iter()
        .filter(|&&b| (b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r' | 0x0c | 0x1b)) || b == 0x7f)
        .count();
    control as f64 > sample.len() as f64 * GARBAGE_RATIO
}
