//! Internationalization (i18n) for the portfolio.
//!
//! This module wires together:
//! - `catalog` (typed JSON catalogs embedded with `rust-embed`)
//! - `strategy` (one strategy per language, resolved by `StrategyFactory`)
//! - `utils` (detection, persistence, interpolation, formatting)
//! - `manager` (synchronous facade for server-rendered pages, backed by a
//!   `fluent-bundle` runtime once initialized)
//! - `store` (observable state for client-rendered islands)
//! - `routing` (language-prefixed URLs and per-page translators)
//!
//! Usage while rendering a page:
//! ```ignore
//! use ui::i18n::{page_i18n, setup_i18n};
//! let page = page_i18n("/es/about");
//! let title = page.i18n.t("about.title");
//! let i18n = setup_i18n(Some(page.lang.code()));
//! let home = i18n.t("common.home", None);
//! ```
//!
//! To add a language:
//! 1. Add a variant to `Language` and its path prefix.
//! 2. Copy `locales/en.json` and translate every value (keep keys and
//!    `{{placeholders}}` identical).
//! 3. Add a strategy and register it in `StrategyFactory`.
//! 4. Run tests to ensure catalog parity.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod manager;
pub mod routing;
pub mod runtime;
pub mod store;
pub mod strategy;
pub mod types;
pub mod utils;

pub use catalog::{catalog, Catalog, Job, TranslationResource};
pub use constants::{DEFAULT_LANGUAGE, LANGUAGE_STORAGE_KEY, STORE_STORAGE_KEY};
pub use error::{CatalogError, I18nError};
pub use manager::{setup_i18n, I18nManager};
pub use routing::{
    alternate_urls, language_from_path, localized_url, page_i18n, strip_language_prefix,
    DirectI18n, PageI18n,
};
pub use store::{I18nState, I18nStore};
pub use strategy::{EnglishStrategy, LanguageStrategy, SpanishStrategy, Strategy, StrategyFactory};
pub use types::{Direction, Language, LanguageMetadata};
pub use utils::{
    detect_user_language, format_date, format_number, interpolate, persist_language,
    translation_key, Params,
};
