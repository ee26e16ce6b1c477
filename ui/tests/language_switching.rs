use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future::join;
use pretty_assertions::assert_eq;

use ui::core::{DomElement, Host, MemoryElement, MemoryHost};
use ui::i18n::{Language, LANGUAGE_STORAGE_KEY, STORE_STORAGE_KEY};
use ui::switcher::DynamicSwitcher;

/// A page as the site renders it in English, with handles to the parts a
/// switch should touch.
struct Page {
    host: MemoryHost,
    heading: MemoryElement,
    menu_button: MemoryElement,
    email_input: MemoryElement,
    intro: MemoryElement,
    code: MemoryElement,
    en_option: MemoryElement,
    es_option: MemoryElement,
    es_check: MemoryElement,
    cards: MemoryElement,
    nav_about: MemoryElement,
    nav_external: MemoryElement,
    words: MemoryElement,
    cv: MemoryElement,
    titles: Vec<MemoryElement>,
    links: Vec<MemoryElement>,
    button: MemoryElement,
}

fn page(path: &str) -> Page {
    let heading = MemoryElement::new("h2")
        .with_attr("data-i18n", "contact.title")
        .with_text("Get In Touch");
    let menu_button = MemoryElement::new("button")
        .with_attr("data-i18n", "common.menu")
        .with_attr("aria-label", "Menu")
        .with_attr("title", "Menu")
        .with_child(MemoryElement::new("svg"));
    let email_input = MemoryElement::new("input").with_attr("data-i18n", "contact.email");
    let intro = MemoryElement::new("p").with_attr("data-i18n-html", "about.paragraph1");
    let code = MemoryElement::new("span").with_class("language-code").with_text("EN");
    let en_option = MemoryElement::new("button")
        .with_class("language-option")
        .with_class("active")
        .with_attr("data-lang", "en")
        .with_child(MemoryElement::new("span").with_class("check-icon"));
    let es_check = MemoryElement::new("span").with_class("check-icon");
    let es_option = MemoryElement::new("button")
        .with_class("language-option")
        .with_attr("data-lang", "es")
        .with_child(es_check.clone());
    let cards = MemoryElement::new("div").with_attr("data-i18n-experience-cards", "");
    let nav_about = MemoryElement::new("a")
        .with_class("nav-link")
        .with_attr("href", "/about");
    let nav_external = MemoryElement::new("a")
        .with_class("nav-link")
        .with_attr("href", "#contact");
    let words = MemoryElement::new("span").with_class("data-i18n-dynamic-words");
    let cv = MemoryElement::new("a")
        .with_attr("data-cv-download", "")
        .with_attr("href", "/cv/Damian_Meroni_CV_EN_I.pdf");
    // The first title names its key; the others fall back to position.
    let titles = vec![
        MemoryElement::new("h3").with_attr("data-i18n-title", "contact.scheduleCall"),
        MemoryElement::new("h3").with_attr("data-i18n-title", ""),
        MemoryElement::new("h3").with_attr("data-i18n-title", ""),
    ];
    let links = vec![
        MemoryElement::new("span")
            .with_attr("data-i18n-link-text", "")
            .with_text("hello@damianmeroni.dev"),
        MemoryElement::new("span")
            .with_attr("data-i18n-link-text", "")
            .with_text("View Profile"),
    ];
    let button = MemoryElement::new("span").with_attr("data-i18n-button-text", "");

    let mut host = MemoryHost::new(path)
        .with_document_language("en")
        .with_element(heading.clone())
        .with_element(menu_button.clone())
        .with_element(email_input.clone())
        .with_element(intro.clone())
        .with_element(code.clone())
        .with_element(en_option.clone())
        .with_element(es_option.clone())
        .with_element(cards.clone())
        .with_element(nav_about.clone())
        .with_element(nav_external.clone())
        .with_element(words.clone())
        .with_element(cv.clone())
        .with_element(button.clone());
    for el in titles.iter().chain(&links) {
        host = host.with_element(el.clone());
    }

    Page {
        host,
        heading,
        menu_button,
        email_input,
        intro,
        code,
        en_option,
        es_option,
        es_check,
        cards,
        nav_about,
        nav_external,
        words,
        cv,
        titles,
        links,
        button,
    }
}

#[test]
fn switching_rewrites_the_whole_page() {
    let Page {
        host,
        heading,
        menu_button,
        email_input,
        intro,
        code,
        en_option,
        es_option,
        es_check,
        cards,
        nav_about,
        nav_external,
        words,
        cv,
        titles,
        links,
        button,
    } = page("/contact");
    let switcher = DynamicSwitcher::new(host);

    block_on(switcher.switch_language(Language::Es));

    let host = switcher.host();
    assert_eq!(host.history(), vec![(Language::Es, "/es/contact".to_string())]);
    assert_eq!(host.pathname(), "/es/contact");
    assert_eq!(host.title(), "Contacto - Damian Meroni");
    assert_eq!(host.document_language(), "es");
    assert_eq!(host.document_direction(), "ltr");

    assert_eq!(heading.text(), "Contacto");
    assert_eq!(menu_button.children().len(), 1);
    assert_eq!(menu_button.attribute("aria-label"), menu_button.attribute("title"));
    assert_eq!(
        menu_button.attribute("aria-label").as_deref(),
        Some(switcher.t("common.menu").as_str())
    );
    assert_eq!(
        email_input.attribute("placeholder").as_deref(),
        Some("Correo")
    );
    assert_eq!(
        intro.inner_html().as_deref(),
        Some(switcher.t("about.paragraph1").as_str())
    );

    assert_eq!(code.text(), "ES");
    assert!(!en_option.has_class("active"));
    assert!(es_option.has_class("active"));
    assert!(!es_check.is_hidden());
    assert!(en_option.children()[0].is_hidden());

    let html = cards.inner_html().unwrap();
    assert!(html.contains("Ingeniero de Software Senior"));

    assert_eq!(nav_about.attribute("href").as_deref(), Some("/es/about"));
    assert_eq!(nav_external.attribute("href").as_deref(), Some("#contact"));
    assert!(words.attribute("data-words").unwrap().contains("construyo"));
    assert_eq!(cv.attribute("href").as_deref(), Some("/cv/Damian_Meroni_CV_ES_I.pdf"));

    // Explicit key first, then positions 1 and 2 of the legacy list.
    assert_eq!(titles[0].text(), "Agendar una llamada");
    assert_eq!(titles[1].text(), "LinkedIn");
    assert_eq!(titles[2].text(), "Agendar una llamada");
    assert_eq!(links[0].text(), "hello@damianmeroni.dev");
    assert_eq!(links[1].text(), "Ver perfil");
    assert_eq!(button.text(), "Reservar reunión");

    assert_eq!(
        host.storage_item(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
        Some("es")
    );
    assert_eq!(
        host.storage_item(STORE_STORAGE_KEY).unwrap().as_deref(),
        Some(r#"{"state":{"currentLanguage":"es"},"version":0}"#)
    );

    let events = host.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, "language-changed");
    assert_eq!(events[0].1["language"], "es");
    assert_eq!(events[0].1["translations"]["common"]["home"], "Inicio");

    // The legacy event goes to the document, where its listeners live.
    let legacy = host.document_events();
    assert_eq!(legacy.len(), 1);
    assert_eq!(legacy[0].0, "languageChanged");
    assert_eq!(legacy[0].1["language"], "es");
}

#[test]
fn home_title_joins_the_headline() {
    let switcher = DynamicSwitcher::new(page("/").host);
    block_on(switcher.switch_language(Language::Es));
    assert_eq!(switcher.host().pathname(), "/es/");
    assert_eq!(switcher.host().title(), "Diseño y sitios de alto rendimiento");

    block_on(switcher.switch_language(Language::En));
    assert_eq!(switcher.host().pathname(), "/");
    assert_eq!(switcher.host().title(), "I design and performant sites");
}

#[test]
fn switching_to_the_current_language_changes_nothing() {
    let page = page("/about");
    let heading = page.heading.clone();
    let switcher = DynamicSwitcher::new(page.host);
    let notified = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&notified);
    switcher.subscribe(move |_| *sink.borrow_mut() += 1);

    block_on(switcher.switch_language(Language::En));

    assert_eq!(*notified.borrow(), 0);
    assert!(switcher.host().history().is_empty());
    assert!(switcher.host().events().is_empty());
    assert!(switcher.host().document_events().is_empty());
    assert_eq!(heading.text(), "Get In Touch");
    assert_eq!(switcher.host().storage_item(LANGUAGE_STORAGE_KEY).unwrap(), None);
}

#[test]
fn subscribers_see_loading_then_the_new_language() {
    let switcher = DynamicSwitcher::new(MemoryHost::new("/projects"));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    switcher.subscribe(move |state| {
        sink.borrow_mut()
            .push((state.current_language, state.is_loading))
    });

    block_on(switcher.switch_language(Language::Es));

    assert_eq!(
        *seen.borrow(),
        vec![(Language::En, true), (Language::Es, false)]
    );
    assert_eq!(switcher.t("projects.title"), "Proyectos destacados");
}

#[test]
fn a_newer_switch_supersedes_one_in_flight() {
    let switcher = DynamicSwitcher::new(MemoryHost::new("/about"));

    // The second request cancels the first before it resumes.
    block_on(join(
        switcher.switch_language(Language::Es),
        switcher.switch_language(Language::En),
    ));

    assert_eq!(switcher.current_language(), Language::En);
    assert!(!switcher.state().is_loading);
    assert!(switcher.host().history().is_empty());
    assert!(switcher.host().events().is_empty());
}

#[test]
fn duplicate_requests_apply_once() {
    let switcher = DynamicSwitcher::new(MemoryHost::new("/about"));

    block_on(join(
        switcher.switch_language(Language::Es),
        switcher.switch_language(Language::Es),
    ));

    assert_eq!(switcher.current_language(), Language::Es);
    assert_eq!(switcher.host().history().len(), 1);
    assert_eq!(switcher.host().events().len(), 1);
    assert_eq!(switcher.host().document_events().len(), 1);
}

#[test]
fn pop_state_follows_the_url_without_pushing_history() {
    let switcher = DynamicSwitcher::new(MemoryHost::new("/about"));
    block_on(switcher.switch_language(Language::Es));
    assert_eq!(switcher.host().history().len(), 1);

    // Back button: the browser already moved the URL.
    switcher.host().set_pathname("/about");
    block_on(switcher.handle_pop_state());
    assert_eq!(switcher.current_language(), Language::En);
    assert_eq!(switcher.host().history().len(), 1);
    assert_eq!(switcher.host().document_language(), "en");

    // A popped state matching the current language is ignored.
    let events_before = switcher.host().events().len();
    block_on(switcher.handle_pop_state());
    assert_eq!(switcher.host().events().len(), events_before);
}

#[test]
fn storage_failures_do_not_stop_the_switch() {
    let host = MemoryHost::new("/");
    host.set_storage_failure(true);
    let switcher = DynamicSwitcher::new(host);

    block_on(switcher.switch_language(Language::Es));

    assert_eq!(switcher.current_language(), Language::Es);
    assert_eq!(switcher.host().events().len(), 1);
    assert_eq!(switcher.host().document_events().len(), 1);
}

#[test]
fn a_failure_mid_rewrite_keeps_what_was_applied() {
    let Page {
        host,
        heading,
        words,
        cv,
        ..
    } = page("/contact");
    words.set_dispatch_failure(true);
    let switcher = DynamicSwitcher::new(host);

    block_on(switcher.switch_language(Language::Es));

    let state = switcher.state();
    assert_eq!(state.current_language, Language::Es);
    assert!(!state.is_loading);

    // Passes before the hero words ran; the CV pass after them did not.
    assert_eq!(heading.text(), "Contacto");
    assert!(words.attribute("data-words").is_some());
    assert_eq!(cv.attribute("href").as_deref(), Some("/cv/Damian_Meroni_CV_EN_I.pdf"));

    let host = switcher.host();
    assert_eq!(host.storage_item(LANGUAGE_STORAGE_KEY).unwrap(), None);
    assert_eq!(host.storage_item(STORE_STORAGE_KEY).unwrap(), None);
    assert!(host.events().is_empty());
    assert!(host.document_events().is_empty());
}
