//! Language profiles for the default engine
//!
//! A profile tells the engine which top-level domain to hint to the
//! statistical detector and which script decoded text is expected to use.

/// Script a language is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Cyrillic alphabet
    Cyrillic,
    /// Latin alphabet with diacritics
    Latin,
    /// Han ideographs and CJK punctuation
    Han,
    /// No expectation, any letter counts
    Any,
}

impl Script {
    /// Whether a decoded non-ASCII character is evidence for this script
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Script::Cyrillic => matches!(ch, '\u{0400}'..='\u{052F}'),
            Script::Latin => ch.is_alphabetic() && matches!(ch, '\u{00C0}'..='\u{024F}'),
            Script::Han => matches!(
                ch,
                '\u{3000}'..='\u{303F}'
                    | '\u{3400}'..='\u{4DBF}'
                    | '\u{4E00}'..='\u{9FFF}'
                    | '\u{F900}'..='\u{FAFF}'
                    | '\u{FF00}'..='\u{FFEF}'
            ),
            Script::Any => ch.is_alphabetic(),
        }
    }
}

/// Detection profile of one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Language code (ISO 639-1, or `__` for no particular language)
    pub code: &'static str,
    /// English name
    pub name: &'static str,
    /// Top-level domain hint, lowercase ASCII without dots
    pub tld: Option<&'static [u8]>,
    /// Expected script
    pub script: Script,
}

/// Code of the neutral profile used when the language is unknown
pub const NEUTRAL_LANGUAGE: &str = "__";

static PROFILES: &[LanguageProfile] = &[
    LanguageProfile { code: "be", name: "Belarusian", tld: Some(b"by"), script: Script::Cyrillic },
    LanguageProfile { code: "bg", name: "Bulgarian", tld: Some(b"bg"), script: Script::Cyrillic },
    LanguageProfile { code: "cs", name: "Czech", tld: Some(b"cz"), script: Script::Latin },
    LanguageProfile { code: "et", name: "Estonian", tld: Some(b"ee"), script: Script::Latin },
    LanguageProfile { code: "hr", name: "Croatian", tld: Some(b"hr"), script: Script::Latin },
    LanguageProfile { code: "hu", name: "Hungarian", tld: Some(b"hu"), script: Script::Latin },
    LanguageProfile { code: "lt", name: "Lithuanian", tld: Some(b"lt"), script: Script::Latin },
    LanguageProfile { code: "lv", name: "Latvian", tld: Some(b"lv"), script: Script::Latin },
    LanguageProfile { code: "pl", name: "Polish", tld: Some(b"pl"), script: Script::Latin },
    LanguageProfile { code: "ru", name: "Russian", tld: Some(b"ru"), script: Script::Cyrillic },
    LanguageProfile { code: "sk", name: "Slovak", tld: Some(b"sk"), script: Script::Latin },
    LanguageProfile { code: "sl", name: "Slovene", tld: Some(b"si"), script: Script::Latin },
    LanguageProfile { code: "uk", name: "Ukrainian", tld: Some(b"ua"), script: Script::Cyrillic },
    LanguageProfile { code: "zh", name: "Chinese", tld: Some(b"cn"), script: Script::Han },
    LanguageProfile { code: NEUTRAL_LANGUAGE, name: "none", tld: None, script: Script::Any },
];

/// Get a profile by language code
pub fn profile(code: &str) -> Option<&'static LanguageProfile> {
    PROFILES.iter().find(|profile| profile.code == code)
}

/// All profiles known to the default engine
pub fn profiles() -> &'static [LanguageProfile] {
    PROFILES
}
