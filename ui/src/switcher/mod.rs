//! Live language switching for an already-rendered page.
//!
//! [`DynamicSwitcher::switch_language`] moves the URL, rewrites the page
//! through [`dom::PageRewriter`], stores the preference and broadcasts the
//! change, all without a reload. Overlapping switches are serialized by a
//! request token: a switch that finds a newer request when it resumes is
//! dropped before touching anything.

pub mod config;
pub mod dom;
pub mod experience;

#[cfg(target_arch = "wasm32")]
pub mod client;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde_json::Value;
use tracing::{debug, error, info};

use crate::core::{Host, HostError, I18nEvent, Listeners, SubscriptionId};
use crate::i18n::{
    language_from_path, localized_url, persist_language, Catalog, Language, LanguageStrategy,
    Strategy, StrategyFactory,
};

pub use config::{GroupBinding, SiteConfig, WordColor};
pub use dom::PageRewriter;

#[derive(Debug, Clone, PartialEq)]
pub struct SwitcherState {
    pub current_language: Language,
    pub translations: &'static Catalog,
    pub is_loading: bool,
}

/// Yields to the executor once.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

async fn resolve_strategy(language: Language) -> Strategy {
    YieldNow::default().await;
    StrategyFactory::strategy_for(language)
}

pub struct DynamicSwitcher<H: Host> {
    host: H,
    config: SiteConfig,
    state: RefCell<SwitcherState>,
    listeners: Listeners<SwitcherState>,
    request: Cell<u64>,
    pending: Cell<Option<Language>>,
}

impl<H: Host> DynamicSwitcher<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, SiteConfig::default())
    }

    /// Starts in the language of the current URL.
    pub fn with_config(host: H, config: SiteConfig) -> Self {
        let language = language_from_path(&host.pathname());
        let strategy = StrategyFactory::strategy_for(language);
        Self {
            host,
            config,
            state: RefCell::new(SwitcherState {
                current_language: language,
                translations: strategy.translations(),
                is_loading: false,
            }),
            listeners: Listeners::default(),
            request: Cell::new(0),
            pending: Cell::new(None),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn state(&self) -> SwitcherState {
        self.state.borrow().clone()
    }

    pub fn current_language(&self) -> Language {
        self.state.borrow().current_language
    }

    pub fn subscribe(&self, listener: impl Fn(&SwitcherState) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Text at `key` in the current language, or the key itself.
    pub fn t(&self, key: &str) -> String {
        self.state.borrow().translations.translate(key)
    }

    /// Structured value at `key` (job lists and the like).
    pub fn value(&self, key: &str) -> Option<&'static Value> {
        let translations = self.state.borrow().translations;
        translations.value(key)
    }

    fn update(&self, apply: impl FnOnce(&mut SwitcherState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        self.listeners.notify(&snapshot);
    }

    pub async fn switch_language(&self, target: Language) {
        let token = self.request.get() + 1;

        if target == self.current_language() {
            // Going back to where we are cancels whatever is in flight.
            if self.pending.take().is_some() {
                self.request.set(token);
                self.update(|state| state.is_loading = false);
            }
            return;
        }
        if self.pending.get() == Some(target) {
            return;
        }

        self.request.set(token);
        self.pending.set(Some(target));
        self.update(|state| state.is_loading = true);

        let strategy = resolve_strategy(target).await;
        if self.request.get() != token {
            debug!(%target, "dropping superseded language switch");
            return;
        }
        self.pending.set(None);

        if let Err(err) = self.apply(target, strategy.translations()) {
            error!("Failed to switch language: {err}");
            self.update(|state| state.is_loading = false);
        }
    }

    fn apply(&self, target: Language, translations: &'static Catalog) -> Result<(), HostError> {
        let path = self.host.pathname();
        let url = localized_url(&path, target);
        if url != path {
            self.host.push_history(target, &url)?;
        }

        self.update(|state| {
            *state = SwitcherState {
                current_language: target,
                translations,
                is_loading: false,
            }
        });

        PageRewriter::new(&self.host, target, translations, &self.config).rewrite()?;
        persist_language(Some(&self.host), target);

        self.host.dispatch(&I18nEvent::LanguageSwitched {
            language: target,
            translations: translations.tree().clone(),
        })?;
        self.host
            .dispatch_document(&I18nEvent::LanguageChanged { language: target })?;

        info!(language = %target, "language switched");
        Ok(())
    }

    /// Back/forward navigation: follow the URL when it names another language.
    pub async fn handle_pop_state(&self) {
        let language = language_from_path(&self.host.pathname());
        if language != self.current_language() {
            self.switch_language(language).await;
        }
    }
}
