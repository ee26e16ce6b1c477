//! Observable i18n state for client-rendered islands.

use std::cell::{Cell, RefCell};

use tracing::{debug, error, warn};

use crate::core::{Host, Listeners, PreferenceStorage, SubscriptionId};
use crate::i18n::catalog::Catalog;
use crate::i18n::constants::DEFAULT_LANGUAGE;
use crate::i18n::strategy::{LanguageStrategy, StrategyFactory};
use crate::i18n::types::{Language, LanguageMetadata};
use crate::i18n::utils::{detect_user_language, interpolate, store_preference, Params};

/// Snapshot handed to readers and listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct I18nState {
    pub current_language: Language,
    pub translations: &'static Catalog,
    pub metadata: LanguageMetadata,
    pub is_loading: bool,
}

impl I18nState {
    fn for_language(language: Language) -> Self {
        let strategy = StrategyFactory::strategy_for(language);
        Self {
            current_language: language,
            translations: strategy.translations(),
            metadata: strategy.metadata().clone(),
            is_loading: false,
        }
    }
}

pub struct I18nStore<H: Host> {
    host: H,
    state: RefCell<I18nState>,
    listeners: Listeners<I18nState>,
    initialized: Cell<bool>,
}

impl<H: Host> I18nStore<H> {
    /// Rehydrate from the stored preference. Only the code is read back;
    /// catalog and metadata come from the strategy.
    pub fn new(host: H) -> Self {
        let language = match PreferenceStorage::new(&host).load() {
            Ok(stored) => stored.unwrap_or(DEFAULT_LANGUAGE),
            Err(err) => {
                warn!("could not rehydrate i18n store: {err}");
                DEFAULT_LANGUAGE
            }
        };
        Self {
            host,
            state: RefCell::new(I18nState::for_language(language)),
            listeners: Listeners::default(),
            initialized: Cell::new(false),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> I18nState {
        self.state.borrow().clone()
    }

    pub fn current_language(&self) -> Language {
        self.state.borrow().current_language
    }

    pub fn subscribe(&self, listener: impl Fn(&I18nState) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn update(&self, apply: impl FnOnce(&mut I18nState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        self.listeners.notify(&snapshot);
    }

    /// Switch to `code`. Unsupported codes are rejected with a warning.
    pub fn set_language(&self, code: &str) {
        let Some(language) = Language::parse(code) else {
            warn!("Invalid language: {code}");
            return;
        };

        self.update(|state| state.is_loading = true);

        if let Err(err) = store_preference(&self.host, language) {
            error!("failed to change language to {language}: {err}");
            self.update(|state| state.is_loading = false);
            return;
        }

        let next = I18nState::for_language(language);
        self.update(|state| *state = next);
        debug!(%language, "store language changed");
    }

    /// Resolve `key` against the current translations.
    pub fn t(&self, key: &str, params: Option<&Params>) -> String {
        let translations = self.state.borrow().translations;
        match (translations.text(key), params) {
            (Some(text), Some(params)) => interpolate(text, params),
            (Some(text), None) => text.to_string(),
            (None, _) => key.to_string(),
        }
    }

    /// Detect, load and persist the startup language. Runs once.
    pub fn initialize(&self) {
        if self.initialized.replace(true) {
            return;
        }

        let detected = detect_user_language(Some(&self.host));
        if let Err(err) = store_preference(&self.host, detected) {
            warn!("could not persist detected language {detected}: {err}");
        }

        if self.current_language() != detected {
            let next = I18nState::for_language(detected);
            self.update(|state| *state = next);
        }
        debug!(language = %detected, "i18n store initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryHost;
    use crate::i18n::constants::{LANGUAGE_STORAGE_KEY, STORE_STORAGE_KEY};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn recorder(store: &I18nStore<MemoryHost>) -> Rc<RefCell<Vec<(Language, bool)>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| {
            sink.borrow_mut()
                .push((state.current_language, state.is_loading))
        });
        seen
    }

    #[test]
    fn rehydrates_only_the_language_code() {
        let host = MemoryHost::new("/").with_storage(
            STORE_STORAGE_KEY,
            r#"{"state":{"currentLanguage":"es","translations":{"bogus":true}},"version":0}"#,
        );
        let store = I18nStore::new(host);
        let state = store.state();
        assert_eq!(state.current_language, Language::Es);
        assert_eq!(state.metadata.name, "Español");
        assert_eq!(state.translations.language(), Language::Es);
        assert!(!state.is_loading);
    }

    #[test]
    fn invalid_language_leaves_state_untouched() {
        let store = I18nStore::new(MemoryHost::new("/"));
        let seen = recorder(&store);
        store.set_language("fr");
        store.set_language("");
        store.set_language("ES");
        assert_eq!(store.current_language(), Language::En);
        assert!(seen.borrow().is_empty());
        assert_eq!(store.host().storage_item(LANGUAGE_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn set_language_announces_loading_then_result() {
        let store = I18nStore::new(MemoryHost::new("/"));
        let seen = recorder(&store);
        store.set_language("es");

        assert_eq!(
            *seen.borrow(),
            vec![(Language::En, true), (Language::Es, false)]
        );
        assert_eq!(store.t("common.home", None), "Inicio");
        assert_eq!(store.host().document_language(), "es");
        assert_eq!(
            store.host().storage_item(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
            Some("es")
        );
    }

    #[test]
    fn storage_failure_keeps_last_known_good_state() {
        let store = I18nStore::new(MemoryHost::new("/"));
        store.host().set_storage_failure(true);
        let seen = recorder(&store);
        store.set_language("es");

        let state = store.state();
        assert_eq!(state.current_language, Language::En);
        assert!(!state.is_loading);
        assert_eq!(
            *seen.borrow(),
            vec![(Language::En, true), (Language::En, false)]
        );
    }

    #[test]
    fn lookups_interpolate_and_fall_back_to_the_key() {
        let store = I18nStore::new(MemoryHost::new("/"));
        assert_eq!(store.t("hero.title.part1", None), "I design and");
        assert_eq!(store.t("hero.title", None), "hero.title");
        assert_eq!(store.t("a.b.c.d", None), "a.b.c.d");
        assert_eq!(store.t("nodots", None), "nodots");

        let params = Params::new().with("year", 2024);
        assert_eq!(store.t("contact.title", Some(&params)), "Get In Touch");
    }

    #[test]
    fn initialize_runs_once() {
        let host = MemoryHost::new("/").with_navigator_language("es-AR");
        let store = I18nStore::new(host);
        let seen = recorder(&store);

        store.initialize();
        store.initialize();

        assert_eq!(store.current_language(), Language::Es);
        assert_eq!(*seen.borrow(), vec![(Language::Es, false)]);
        assert_eq!(
            store.host().storage_item(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
            Some("es")
        );
    }

    #[test]
    fn unsubscribed_listeners_stop_hearing() {
        let store = I18nStore::new(MemoryHost::new("/"));
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| sink.set(sink.get() + 1));

        store.set_language("es");
        assert_eq!(count.get(), 2);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_language("en");
        assert_eq!(count.get(), 2);
    }
}
