//! Display locales and localized text lookup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of locales the calendar is translated into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the canonical locale
    #[default]
    En,

    /// Hindi
    Hi,

    /// Gujarati
    Gu,
}

impl Locale {
    /// All supported locales in menu order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Hi, Locale::Gu];

    /// Resolve a locale code, falling back to English for anything unknown.
    ///
    /// ```rust
    /// use fasal_core::models::Locale;
    ///
    /// assert_eq!(Locale::from_code("hi"), Locale::Hi);
    /// assert_eq!(Locale::from_code("GU"), Locale::Gu);
    /// assert_eq!(Locale::from_code("xx"), Locale::En);
    /// ```
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Gu => "gu",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "hi" | "hindi" => Ok(Locale::Hi),
            "gu" | "gujarati" => Ok(Locale::Gu),
            _ => Err(format!("Unsupported locale: {s}")),
        }
    }
}

/// Text with a canonical (English) form and optional translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    /// Canonical text, also used as the fallback for missing translations
    pub canonical: &'static str,

    /// Translations keyed by locale
    pub translations: &'static [(Locale, &'static str)],
}

impl LocalizedText {
    /// Text without any translations.
    pub const fn plain(canonical: &'static str) -> Self {
        Self {
            canonical,
            translations: &[],
        }
    }

    /// Look up the text for `locale`, falling back to the canonical form.
    pub fn get(&self, locale: Locale) -> &'static str {
        self.translations
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, text)| *text)
            .unwrap_or(self.canonical)
    }
}
