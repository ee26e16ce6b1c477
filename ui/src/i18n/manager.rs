//! Synchronous translation facade for server-rendered pages.
//!
//! `I18nManager` is an ordinary value: build one per render context and
//! pass it down, or use [`I18nManager::global`] from call sites that have
//! no context to hand. Lookups never wait on the Fluent runtime; until
//! [`I18nManager::initialize`] has finished they resolve straight from the
//! language's strategy.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::i18n::constants::DEFAULT_LANGUAGE;
use crate::i18n::error::I18nError;
use crate::i18n::runtime::TranslationRuntime;
use crate::i18n::strategy::{LanguageStrategy, StrategyFactory};
use crate::i18n::types::{Language, LanguageMetadata};
use crate::i18n::utils::{interpolate, Params};

struct ManagerState {
    current: Language,
    runtime: Option<TranslationRuntime>,
}

pub struct I18nManager {
    state: RwLock<ManagerState>,
}

static GLOBAL: Lazy<I18nManager> = Lazy::new(I18nManager::new);

impl Default for I18nManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the runtime off the render path.
async fn build_runtime(language: Language) -> Result<TranslationRuntime, I18nError> {
    futures::future::lazy(|_| TranslationRuntime::new(language)).await
}

impl I18nManager {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ManagerState {
                current: DEFAULT_LANGUAGE,
                runtime: None,
            }),
        }
    }

    /// The shared default instance.
    pub fn global() -> &'static I18nManager {
        &GLOBAL
    }

    fn read(&self) -> RwLockReadGuard<'_, ManagerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ManagerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_initialized(&self) -> bool {
        self.read().runtime.is_some()
    }

    /// Bring up the Fluent runtime. Later calls are no-ops.
    pub async fn initialize(&self, language: Option<Language>) {
        let requested = {
            let state = self.read();
            if state.runtime.is_some() {
                return;
            }
            language.unwrap_or(state.current)
        };

        match build_runtime(requested).await {
            Ok(runtime) => {
                let mut state = self.write();
                if state.runtime.is_none() {
                    state.runtime = Some(runtime);
                    state.current = requested;
                    debug!(language = %requested, "translation runtime ready");
                }
            }
            Err(err) => warn!("translation runtime unavailable, using direct lookups: {err}"),
        }
    }

    /// Switch language, loading it into the runtime.
    pub async fn set_language(&self, language: Language) {
        self.initialize(None).await;
        let mut state = self.write();
        if let Some(runtime) = state.runtime.as_mut() {
            if let Err(err) = runtime.load_language(language) {
                warn!("could not load {language} into the runtime: {err}");
            }
        }
        state.current = language;
    }

    /// Override the active language immediately, without the runtime.
    pub fn set_current_language_sync(&self, language: Language) {
        self.write().current = language;
    }

    pub fn current_language(&self) -> Language {
        self.read().current
    }

    /// Translate `key`; the key itself comes back when nothing matches.
    pub fn t(&self, key: &str, params: Option<&Params>) -> String {
        let state = self.read();
        if let Some(text) = state
            .runtime
            .as_ref()
            .and_then(|runtime| runtime.translate(state.current, key, params))
        {
            return text;
        }

        let strategy = StrategyFactory::strategy_for(state.current);
        match (strategy.translations().text(key), params) {
            (Some(text), Some(params)) => interpolate(text, params),
            (Some(text), None) => text.to_string(),
            (None, _) => key.to_string(),
        }
    }

    pub fn metadata(&self) -> LanguageMetadata {
        StrategyFactory::strategy_for(self.current_language())
            .metadata()
            .clone()
    }

    pub fn available_languages(&self) -> Vec<LanguageMetadata> {
        StrategyFactory::available_languages()
            .into_iter()
            .map(|lang| StrategyFactory::strategy_for(lang).metadata().clone())
            .collect()
    }
}

/// Point the shared facade at the page's language before rendering.
/// Invalid or missing codes leave it untouched.
pub fn setup_i18n(lang: Option<&str>) -> &'static I18nManager {
    let i18n = I18nManager::global();
    if let Some(language) = Language::parse(lang.unwrap_or(DEFAULT_LANGUAGE.code())) {
        i18n.set_current_language_sync(language);
    }
    i18n
}
