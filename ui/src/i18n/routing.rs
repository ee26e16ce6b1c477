//! Language-aware URLs and per-request translators.
//!
//! The default language lives at `/...`, every other language under its
//! code (`/es/...`).

use serde_json::Value;

use crate::i18n::strategy::{LanguageStrategy, Strategy, StrategyFactory};
use crate::i18n::types::{Language, LanguageMetadata};
use crate::i18n::DEFAULT_LANGUAGE;

/// Split `path` into its language and the remainder after the prefix.
fn split_prefix(path: &str) -> (Language, &str) {
    for lang in Language::ALL {
        let Some(prefix) = lang.path_prefix() else {
            continue;
        };
        if let Some(rest) = path.strip_prefix(prefix) {
            if rest.is_empty() || rest.starts_with('/') {
                return (lang, rest);
            }
        }
    }
    (DEFAULT_LANGUAGE, path)
}

/// The language a URL path is served in.
pub fn language_from_path(path: &str) -> Language {
    split_prefix(path).0
}

/// `path` without its language prefix (`/es/about` -> `/about`, `/es` -> ``).
pub fn strip_language_prefix(path: &str) -> &str {
    split_prefix(path).1
}

/// The same page in `target`'s language.
pub fn localized_url(path: &str, target: Language) -> String {
    let base = strip_language_prefix(path);
    match target.path_prefix() {
        Some(prefix) => format!("{prefix}{base}"),
        None if base.is_empty() => "/".to_string(),
        None => base.to_string(),
    }
}

/// `(language, url)` for every supported language, in registration order.
pub fn alternate_urls(path: &str) -> Vec<(Language, String)> {
    StrategyFactory::available_languages()
        .into_iter()
        .map(|lang| (lang, localized_url(path, lang)))
        .collect()
}

/// A translator bound to one language, for a single render.
#[derive(Debug, Clone)]
pub struct DirectI18n {
    language: Language,
    strategy: Strategy,
}

impl DirectI18n {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            strategy: StrategyFactory::strategy_for(language),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.strategy.translations().translate(key)
    }

    /// Structured value at `key` (lists, records), for templates that
    /// render collections.
    pub fn value(&self, key: &str) -> Option<&'static Value> {
        self.strategy.translations().value(key)
    }

    pub fn current_language(&self) -> Language {
        self.language
    }

    pub fn available_languages(&self) -> Vec<LanguageMetadata> {
        StrategyFactory::available_languages()
            .into_iter()
            .map(|lang| StrategyFactory::strategy_for(lang).metadata().clone())
            .collect()
    }
}

pub struct PageI18n {
    pub lang: Language,
    pub i18n: DirectI18n,
}

/// Resolve the language of a page from its URL path and hand back a
/// translator for it, independent of any shared instance.
pub fn page_i18n(path: &str) -> PageI18n {
    let lang = language_from_path(path);
    PageI18n {
        lang,
        i18n: DirectI18n::new(lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_urls_swap_prefixes() {
        assert_eq!(localized_url("/es/about", Language::En), "/about");
        assert_eq!(localized_url("/about", Language::Es), "/es/about");
        assert_eq!(localized_url("/about", Language::En), "/about");
        assert_eq!(localized_url("/es/about", Language::Es), "/es/about");
    }

    #[test]
    fn home_pages_round_trip() {
        assert_eq!(localized_url("/", Language::Es), "/es/");
        assert_eq!(localized_url("/es/", Language::En), "/");
        assert_eq!(localized_url("/es", Language::En), "/");
        assert_eq!(localized_url("/es", Language::Es), "/es");
    }

    #[test]
    fn prefix_must_be_a_whole_segment() {
        assert_eq!(language_from_path("/essays"), Language::En);
        assert_eq!(localized_url("/essays", Language::Es), "/es/essays");
        assert_eq!(language_from_path("/es/projects"), Language::Es);
    }

    #[test]
    fn alternates_cover_every_language() {
        assert_eq!(
            alternate_urls("/es/contact"),
            vec![
                (Language::En, "/contact".to_string()),
                (Language::Es, "/es/contact".to_string()),
            ]
        );
    }

    #[test]
    fn page_translator_follows_the_path() {
        let page = page_i18n("/es/about");
        assert_eq!(page.lang, Language::Es);
        assert_eq!(page.i18n.t("about.title"), "Sobre mí");
        assert_eq!(page.i18n.t("about.missing"), "about.missing");
        assert!(page.i18n.value("experience.jobs").unwrap().is_array());

        let names: Vec<_> = page
            .i18n
            .available_languages()
            .iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["English", "Español"]);
    }
}
