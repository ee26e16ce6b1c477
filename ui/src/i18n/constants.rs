use crate::i18n::types::Language;

pub const DEFAULT_LANGUAGE: Language = Language::ALL[0];

/// Raw language code written by the persistence path.
pub const LANGUAGE_STORAGE_KEY: &str = "preferred-language";

/// `{ "state": { "currentLanguage": .. }, "version": 0 }` envelope read on
/// store rehydration.
pub const STORE_STORAGE_KEY: &str = "i18n-store";
