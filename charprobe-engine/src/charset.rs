//! Charset identifiers and name tables
//!
//! Every charset the default engine can report has one row here. A row holds
//! the name of the charset under each [`NameStyle`]; styles that have no
//! name for a charset hold `None`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Convention used to render a charset name
///
/// The discriminants are wire-stable and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum NameStyle {
    /// Default, implicit charset name
    #[default]
    Default = 0,
    /// RFC 1345 or otherwise canonical name
    Standard = 1,
    /// Legacy alias used by old conversion tools (may not exist)
    LegacyAlias = 2,
    /// Name in the system conversion table, i.e. iconv (may not exist)
    SystemTable = 3,
    /// Human comprehensible description
    Human = 4,
    /// Preferred MIME name (may not exist)
    Mime = 5,
}

impl NameStyle {
    /// All styles in wire order
    pub const ALL: [NameStyle; 6] = [
        NameStyle::Default,
        NameStyle::Standard,
        NameStyle::LegacyAlias,
        NameStyle::SystemTable,
        NameStyle::Human,
        NameStyle::Mime,
    ];

    /// Wire value
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Configuration key for this style
    pub fn as_str(self) -> &'static str {
        match self {
            NameStyle::Default => "default",
            NameStyle::Standard => "standard",
            NameStyle::LegacyAlias => "legacy_alias",
            NameStyle::SystemTable => "system_table",
            NameStyle::Human => "human",
            NameStyle::Mime => "mime",
        }
    }
}

impl TryFrom<i32> for NameStyle {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        NameStyle::ALL
            .iter()
            .copied()
            .find(|style| style.code() == value)
            .ok_or(value)
    }
}

impl FromStr for NameStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "enca" => Ok(NameStyle::Default),
            "standard" | "rfc1345" => Ok(NameStyle::Standard),
            "legacy_alias" | "cstocs" => Ok(NameStyle::LegacyAlias),
            "system_table" | "iconv" => Ok(NameStyle::SystemTable),
            "human" => Ok(NameStyle::Human),
            "mime" => Ok(NameStyle::Mime),
            other => Err(format!("unknown name style: {other}")),
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Internal charset identifier handed out by an engine
///
/// Only meaningful to the engine that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharsetId(pub u32);

impl CharsetId {
    /// 7bit ASCII
    pub const ASCII: CharsetId = CharsetId(0);
    /// UTF-8
    pub const UTF_8: CharsetId = CharsetId(1);

    /// Find the row whose WHATWG label matches an `encoding_rs` encoding
    pub fn for_encoding(encoding: &'static encoding_rs::Encoding) -> Option<CharsetId> {
        let name = encoding.name();
        CHARSETS
            .iter()
            .position(|row| row.whatwg == Some(name))
            .map(|index| CharsetId(index as u32))
    }

    /// Row of the name table, `None` for identifiers outside the table
    pub fn info(self) -> Option<&'static CharsetInfo> {
        CHARSETS.get(self.0 as usize)
    }
}

/// One row of the name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetInfo {
    /// Default name
    pub default: &'static str,
    /// RFC 1345 or canonical name
    pub standard: &'static str,
    /// Legacy alias
    pub legacy_alias: Option<&'static str>,
    /// System conversion table name
    pub system_table: Option<&'static str>,
    /// Human readable description
    pub human: &'static str,
    /// Preferred MIME name
    pub mime: Option<&'static str>,
    /// Label of the matching `encoding_rs` encoding
    pub whatwg: Option<&'static str>,
}

impl CharsetInfo {
    /// Name under the given style
    pub fn name(&self, style: NameStyle) -> Option<&'static str> {
        match style {
            NameStyle::Default => Some(self.default),
            NameStyle::Standard => Some(self.standard),
            NameStyle::LegacyAlias => self.legacy_alias,
            NameStyle::SystemTable => self.system_table,
            NameStyle::Human => Some(self.human),
            NameStyle::Mime => self.mime,
        }
    }
}

/// Look up a charset name
pub fn charset_name(charset: CharsetId, style: NameStyle) -> Option<&'static str> {
    charset.info().and_then(|info| info.name(style))
}

/// Number of rows in the name table
pub fn charset_count() -> usize {
    CHARSETS.len()
}

macro_rules! row {
    ($default:expr, $standard:expr, $legacy:expr, $system:expr, $human:expr, $mime:expr, $whatwg:expr) => {
        CharsetInfo {
            default: $default,
            standard: $standard,
            legacy_alias: $legacy,
            system_table: $system,
            human: $human,
            mime: $mime,
            whatwg: $whatwg,
        }
    };
}

// Index 0 and 1 are pinned by CharsetId::ASCII and CharsetId::UTF_8.
static CHARSETS: &[CharsetInfo] = &[
    row!("ASCII", "ANSI_X3.4-1968", Some("ascii"), Some("ASCII"), "7bit ASCII characters", Some("US-ASCII"), None),
    row!("UTF-8", "UTF-8", None, Some("UTF-8"), "UTF-8", Some("UTF-8"), Some("UTF-8")),
    row!("UTF-16LE", "UTF-16LE", None, Some("UTF-16LE"), "UTF-16 little endian", Some("UTF-16LE"), Some("UTF-16LE")),
    row!("UTF-16BE", "UTF-16BE", None, Some("UTF-16BE"), "UTF-16 big endian", Some("UTF-16BE"), Some("UTF-16BE")),
    row!("IBM866", "IBM866", None, Some("IBM866"), "IBM/MS code page 866", Some("IBM866"), Some("IBM866")),
    row!("ISO-8859-2", "ISO_8859-2:1987", Some("il2"), Some("ISO-8859-2"), "ISO 8859-2 standard; ISO Latin 2", Some("ISO-8859-2"), Some("ISO-8859-2")),
    row!("ISO-8859-4", "ISO_8859-4:1988", None, Some("ISO-8859-4"), "ISO 8859-4 standard; Latin 4", Some("ISO-8859-4"), Some("ISO-8859-4")),
    row!("ISO-8859-5", "ISO_8859-5:1988", None, Some("ISO-8859-5"), "ISO 8859-5 standard; ISO Cyrillic", Some("ISO-8859-5"), Some("ISO-8859-5")),
    row!("ISO-8859-6", "ISO_8859-6:1987", None, Some("ISO-8859-6"), "ISO 8859-6 standard; ISO Arabic", Some("ISO-8859-6"), Some("ISO-8859-6")),
    row!("ISO-8859-7", "ISO_8859-7:1987", None, Some("ISO-8859-7"), "ISO 8859-7 standard; ISO Greek", Some("ISO-8859-7"), Some("ISO-8859-7")),
    row!("ISO-8859-8", "ISO_8859-8:1988", None, Some("ISO-8859-8"), "ISO 8859-8 standard; ISO Hebrew (visual)", Some("ISO-8859-8"), Some("ISO-8859-8")),
    row!("ISO-8859-8-I", "ISO-8859-8-I", None, Some("ISO-8859-8"), "ISO 8859-8 standard; ISO Hebrew (logical)", Some("ISO-8859-8-I"), Some("ISO-8859-8-I")),
    row!("ISO-8859-13", "ISO-8859-13", None, Some("ISO-8859-13"), "ISO 8859-13 standard; ISO Baltic", Some("ISO-8859-13"), Some("ISO-8859-13")),
    row!("KOI8-R", "KOI8-R", None, Some("KOI8-R"), "KOI8-R Cyrillic", Some("KOI8-R"), Some("KOI8-R")),
    row!("KOI8-U", "KOI8-U", None, Some("KOI8-U"), "KOI8-U Cyrillic", Some("KOI8-U"), Some("KOI8-U")),
    row!("maccyr", "x-mac-cyrillic", None, Some("MACCYRILLIC"), "Macintosh Cyrillic", None, Some("x-mac-cyrillic")),
    row!("CP874", "windows-874", None, Some("CP874"), "MS-Windows code page 874; Thai", Some("windows-874"), Some("windows-874")),
    row!("CP1250", "windows-1250", Some("1250"), Some("CP1250"), "MS-Windows code page 1250", Some("windows-1250"), Some("windows-1250")),
    row!("CP1251", "windows-1251", None, Some("CP1251"), "MS-Windows code page 1251", Some("windows-1251"), Some("windows-1251")),
    row!("CP1252", "windows-1252", None, Some("CP1252"), "MS-Windows code page 1252; Western", Some("windows-1252"), Some("windows-1252")),
    row!("CP1253", "windows-1253", None, Some("CP1253"), "MS-Windows code page 1253; Greek", Some("windows-1253"), Some("windows-1253")),
    row!("CP1254", "windows-1254", None, Some("CP1254"), "MS-Windows code page 1254; Turkish", Some("windows-1254"), Some("windows-1254")),
    row!("CP1255", "windows-1255", None, Some("CP1255"), "MS-Windows code page 1255; Hebrew", Some("windows-1255"), Some("windows-1255")),
    row!("CP1256", "windows-1256", None, Some("CP1256"), "MS-Windows code page 1256; Arabic", Some("windows-1256"), Some("windows-1256")),
    row!("CP1257", "windows-1257", None, Some("CP1257"), "MS-Windows code page 1257; Baltic", Some("windows-1257"), Some("windows-1257")),
    row!("CP1258", "windows-1258", None, Some("CP1258"), "MS-Windows code page 1258; Vietnamese", Some("windows-1258"), Some("windows-1258")),
    row!("GBK", "GBK", None, Some("GBK"), "Simplified Chinese GBK", Some("GBK"), Some("GBK")),
    row!("GB18030", "GB18030", None, Some("GB18030"), "Chinese national standard GB 18030", Some("GB18030"), Some("gb18030")),
    row!("BIG5", "Big5", None, Some("BIG5"), "Traditional Chinese Big5", Some("Big5"), Some("Big5")),
    row!("EUC-KR", "EUC-KR", None, Some("EUC-KR"), "Korean extended Unix code", Some("EUC-KR"), Some("EUC-KR")),
    row!("EUC-JP", "EUC-JP", None, Some("EUC-JP"), "Japanese extended Unix code", Some("EUC-JP"), Some("EUC-JP")),
    row!("SJIS", "Shift_JIS", None, Some("SHIFT_JIS"), "Japanese Shift JIS", Some("Shift_JIS"), Some("Shift_JIS")),
    row!("ISO-2022-JP", "ISO-2022-JP", None, Some("ISO-2022-JP"), "Japanese 7bit ISO-2022-JP", Some("ISO-2022-JP"), Some("ISO-2022-JP")),
];
