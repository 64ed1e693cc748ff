use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
}

impl Locale {
    /// Locale used whenever no valid prior choice exists.
    pub const FALLBACK: Locale = Locale::De;

    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" | "de-de" | "de-at" | "de-ch" => Some(Locale::De),
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            _ => None,
        }
    }

    /// The locale the language toggle switches to.
    pub fn other(self) -> Self {
        match self {
            Locale::De => Locale::En,
            Locale::En => Locale::De,
        }
    }

    /// Short label shown on the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Locale::De => "DE",
            Locale::En => "EN",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::FALLBACK
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
