use dioxus::prelude::*;

use ui::components::{LanguageSelector, SiteNav};
use ui::i18n::{catalog, localized_url, page_i18n, Language};
use ui::switcher::dom::DYNAMIC_WORDS_CLASS;
use ui::switcher::experience::render_experience_cards;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/es")]
    SpanishHome {},
    #[route("/es/:section")]
    SpanishSection { section: String },
    #[route("/:section")]
    Section { section: String },
}

fn main() {
    ui::core::logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { Page { path: "/" } }
}

#[component]
fn SpanishHome() -> Element {
    rsx! { Page { path: "/es/" } }
}

#[component]
fn Section(section: String) -> Element {
    rsx! { Page { path: format!("/{section}") } }
}

#[component]
fn SpanishSection(section: String) -> Element {
    rsx! { Page { path: format!("/es/{section}") } }
}

/// A server-rendered page; once in the browser the switcher takes over
/// language changes without re-rendering.
#[component]
fn Page(path: String) -> Element {
    let page = page_i18n(&path);
    let lang = page.lang;
    let i18n = page.i18n;
    let nav = navigator();

    #[cfg(target_arch = "wasm32")]
    let switcher = use_hook(|| ui::switcher::client::install(Default::default()));

    let on_select = move |target: Language| {
        #[cfg(target_arch = "wasm32")]
        if let Some(switcher) = switcher.as_ref() {
            ui::switcher::client::request_switch(switcher, target);
            return;
        }
        nav.push(localized_url(&path, target));
    };

    let cards = render_experience_cards(catalog(lang));
    let words = i18n.t("hero.dynamicWords.build");

    rsx! {
        header { class: "site-header",
            SiteNav { language: lang }
            LanguageSelector { current: lang, on_select }
        }
        main {
            section { class: "hero",
                h1 {
                    span { "data-i18n": "hero.title.part1", {i18n.t("hero.title.part1")} }
                    " "
                    span { class: DYNAMIC_WORDS_CLASS, "{words}" }
                    " "
                    span { "data-i18n": "hero.title.part2", {i18n.t("hero.title.part2")} }
                }
                p { "data-i18n": "hero.title.part3", {i18n.t("hero.title.part3")} }
            }
            section { class: "experience",
                h2 { "data-i18n": "experience.title", {i18n.t("experience.title")} }
                div { "data-i18n-experience-cards": "", dangerous_inner_html: "{cards}" }
            }
            section { class: "contact",
                h2 { "data-i18n": "contact.title", {i18n.t("contact.title")} }
                div { class: "contact-card",
                    h3 { "data-i18n-title": "contact.emailMe", {i18n.t("contact.emailMe")} }
                    p { "data-i18n-description": "contact.emailDescription", {i18n.t("contact.emailDescription")} }
                }
                div { class: "contact-card",
                    h3 { "data-i18n-title": "contact.linkedin", {i18n.t("contact.linkedin")} }
                    p { "data-i18n-description": "contact.linkedinDescription", {i18n.t("contact.linkedinDescription")} }
                    span { "data-i18n-link-text": "contact.viewProfile", {i18n.t("contact.viewProfile")} }
                }
                div { class: "contact-card",
                    h3 { "data-i18n-title": "contact.scheduleCall", {i18n.t("contact.scheduleCall")} }
                    p { "data-i18n-description": "contact.scheduleDescription", {i18n.t("contact.scheduleDescription")} }
                    span { "data-i18n-button-text": "contact.bookMeeting", {i18n.t("contact.bookMeeting")} }
                }
            }
        }
    }
}
