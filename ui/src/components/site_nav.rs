use dioxus::prelude::*;

use crate::i18n::{localized_url, DirectI18n, Language};

/// `(catalog key, unprefixed path)` for each primary section.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("common.home", "/"),
    ("common.about", "/about"),
    ("common.projects", "/projects"),
    ("common.contact", "/contact"),
];

/// `(key, label, href)` for every nav entry in `language`.
pub fn nav_links(language: Language) -> Vec<(&'static str, String, String)> {
    let i18n = DirectI18n::new(language);
    NAV_ITEMS
        .iter()
        .map(|(key, path)| (*key, i18n.t(key), localized_url(path, language)))
        .collect()
}

/// Section links carrying `data-i18n` keys and `.nav-link` hrefs, both of
/// which the live switcher keeps in step with the active language.
#[component]
pub fn SiteNav(language: Language) -> Element {
    rsx! {
        nav { class: "site-nav",
            for (key, label, href) in nav_links(language) {
                a { key: "{key}", class: "nav-link", href: "{href}", "data-i18n": key, "{label}" }
            }
        }
    }
}
