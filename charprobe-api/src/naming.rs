//! Naming resolver
//!
//! Renders engine charset identifiers under a [`NameStyle`]. A style with no
//! name for a charset renders as an empty string; [`try_render`] keeps the
//! distinction for callers who need it.

use charprobe_engine::{CharsetId, NameStyle, RecognitionEngine};
use serde::{Deserialize, Serialize};

/// Render a charset name, empty when the style has no name for it
pub fn render(engine: &dyn RecognitionEngine, charset: CharsetId, style: NameStyle) -> String {
    try_render(engine, charset, style).unwrap_or_default()
}

/// Render a charset name, `None` when the style has no name for it
pub fn try_render(
    engine: &dyn RecognitionEngine,
    charset: CharsetId,
    style: NameStyle,
) -> Option<String> {
    engine.charset_name(charset, style).map(str::to_string)
}

/// A charset rendered under every style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetNames {
    /// Default name
    pub default: String,
    /// Canonical name
    pub standard: String,
    /// Legacy alias, empty when absent
    pub legacy_alias: String,
    /// System conversion table name, empty when absent
    pub system_table: String,
    /// Human readable description
    pub human: String,
    /// Preferred MIME name, empty when absent
    pub mime: String,
}

impl CharsetNames {
    /// Render one charset under all six styles
    pub fn resolve(engine: &dyn RecognitionEngine, charset: CharsetId) -> Self {
        let name = |style| render(engine, charset, style);
        Self {
            default: name(NameStyle::Default),
            standard: name(NameStyle::Standard),
            legacy_alias: name(NameStyle::LegacyAlias),
            system_table: name(NameStyle::SystemTable),
            human: name(NameStyle::Human),
            mime: name(NameStyle::Mime),
        }
    }

    /// Name under one style
    pub fn get(&self, style: NameStyle) -> &str {
        match style {
            NameStyle::Default => &self.default,
            NameStyle::Standard => &self.standard,
            NameStyle::LegacyAlias => &self.legacy_alias,
            NameStyle::SystemTable => &self.system_table,
            NameStyle::Human => &self.human,
            NameStyle::Mime => &self.mime,
        }
    }
}
