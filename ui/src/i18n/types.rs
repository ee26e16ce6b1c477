use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::i18n::error::I18nError;

/// The closed set of site languages. `En` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    /// Registration order.
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Exact code match; anything else means "no language chosen".
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Match on the primary subtag of a BCP 47 tag (`es-AR` -> `es`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        Self::parse(&primary.to_ascii_lowercase())
    }

    /// URL path prefix; the default language is served unprefixed.
    pub fn path_prefix(self) -> Option<&'static str> {
        match self {
            Language::En => None,
            Language::Es => Some("/es"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Descriptive record for one language, fixed for a strategy's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMetadata {
    pub code: Language,
    pub name: &'static str,
    pub locale: LanguageIdentifier,
    pub direction: Direction,
    pub date_format: &'static str,
    pub number_format: &'static str,
}

impl LanguageMetadata {
    /// Separator between thousands groups, read off `number_format`.
    pub fn grouping_separator(&self) -> Option<char> {
        let seps = self.separators();
        (seps.len() > 1).then(|| seps[0])
    }

    /// Decimal separator, read off `number_format` (last non-digit).
    pub fn decimal_separator(&self) -> char {
        self.separators().last().copied().unwrap_or('.')
    }

    fn separators(&self) -> Vec<char> {
        self.number_format
            .chars()
            .filter(|c| !c.is_ascii_digit())
            .collect()
    }
}
