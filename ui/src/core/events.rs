//! Custom DOM events emitted by the i18n subsystem.
//!
//! Independent widgets learn about state changes only through these; the
//! event names and `detail` shapes are part of the page contract.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::i18n::Language;

/// One rotating word of the hero headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicWord {
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum I18nEvent {
    /// Legacy `languageChanged` with `{ language }`, dispatched on `document`.
    LanguageChanged { language: Language },
    /// `language-changed` with `{ language, translations }`, on `window`.
    LanguageSwitched {
        language: Language,
        translations: Value,
    },
    /// `dynamicTextUpdate` with `{ words }`, targeted at the headline element.
    DynamicTextUpdate { words: Vec<DynamicWord> },
}

impl I18nEvent {
    pub fn name(&self) -> &'static str {
        match self {
            I18nEvent::LanguageChanged { .. } => "languageChanged",
            I18nEvent::LanguageSwitched { .. } => "language-changed",
            I18nEvent::DynamicTextUpdate { .. } => "dynamicTextUpdate",
        }
    }

    pub fn detail(&self) -> Value {
        match self {
            I18nEvent::LanguageChanged { language } => json!({ "language": language }),
            I18nEvent::LanguageSwitched {
                language,
                translations,
            } => json!({ "language": language, "translations": translations }),
            I18nEvent::DynamicTextUpdate { words } => json!({ "words": words }),
        }
    }
}
