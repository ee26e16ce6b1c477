//! Shared crate for the portfolio site: translations, language switching
//! and the widgets that take part in it.

pub mod core;
pub mod i18n;
pub mod switcher;

pub mod components {
    // Language picker rewritten in place by the switcher (components/language_selector.rs)
    pub mod language_selector;
    pub use language_selector::LanguageSelector;

    // Localized section links (components/site_nav.rs)
    pub mod site_nav;
    pub use site_nav::SiteNav;
}
