//! Per-language strategies and the factory that resolves them.

use tracing::warn;
use unic_langid::langid;

use crate::i18n::catalog::{catalog, Catalog};
use crate::i18n::constants::DEFAULT_LANGUAGE;
use crate::i18n::types::{Direction, Language, LanguageMetadata};

/// Uniform access to one language's catalog and metadata.
pub trait LanguageStrategy {
    fn translations(&self) -> &'static Catalog;
    fn metadata(&self) -> &LanguageMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnglishStrategy {
    translations: &'static Catalog,
    metadata: LanguageMetadata,
}

impl EnglishStrategy {
    pub fn new() -> Self {
        Self {
            translations: catalog(Language::En),
            metadata: LanguageMetadata {
                code: Language::En,
                name: "English",
                locale: langid!("en-US"),
                direction: Direction::Ltr,
                date_format: "MM/DD/YYYY",
                number_format: "1,234.56",
            },
        }
    }
}

impl Default for EnglishStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageStrategy for EnglishStrategy {
    fn translations(&self) -> &'static Catalog {
        self.translations
    }

    fn metadata(&self) -> &LanguageMetadata {
        &self.metadata
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpanishStrategy {
    translations: &'static Catalog,
    metadata: LanguageMetadata,
}

impl SpanishStrategy {
    pub fn new() -> Self {
        Self {
            translations: catalog(Language::Es),
            metadata: LanguageMetadata {
                code: Language::Es,
                name: "Español",
                locale: langid!("es-AR"),
                direction: Direction::Ltr,
                date_format: "DD/MM/YYYY",
                number_format: "1.234,56",
            },
        }
    }
}

impl Default for SpanishStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageStrategy for SpanishStrategy {
    fn translations(&self) -> &'static Catalog {
        self.translations
    }

    fn metadata(&self) -> &LanguageMetadata {
        &self.metadata
    }
}

/// The closed set of strategies, one variant per [`Language`].
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    English(EnglishStrategy),
    Spanish(SpanishStrategy),
}

impl Strategy {
    pub fn language(&self) -> Language {
        self.metadata().code
    }
}

impl LanguageStrategy for Strategy {
    fn translations(&self) -> &'static Catalog {
        match self {
            Strategy::English(s) => s.translations(),
            Strategy::Spanish(s) => s.translations(),
        }
    }

    fn metadata(&self) -> &LanguageMetadata {
        match self {
            Strategy::English(s) => s.metadata(),
            Strategy::Spanish(s) => s.metadata(),
        }
    }
}

pub struct StrategyFactory;

impl StrategyFactory {
    /// Resolve `code`, falling back to the default language (with a
    /// warning) for anything unsupported.
    pub fn create_strategy(code: &str) -> Strategy {
        match Language::parse(code) {
            Some(language) => Self::strategy_for(language),
            None => {
                warn!("Language \"{code}\" not supported, falling back to {DEFAULT_LANGUAGE}");
                Self::strategy_for(DEFAULT_LANGUAGE)
            }
        }
    }

    pub fn strategy_for(language: Language) -> Strategy {
        match language {
            Language::En => Strategy::English(EnglishStrategy::new()),
            Language::Es => Strategy::Spanish(SpanishStrategy::new()),
        }
    }

    pub fn is_valid_language(code: &str) -> bool {
        Language::parse(code).is_some()
    }

    pub fn available_languages() -> Vec<Language> {
        Language::ALL.to_vec()
    }
}
