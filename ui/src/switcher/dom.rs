//! The page rewrite applied after a language switch.
//!
//! Passes run in a fixed order: keyed text, keyed markup, document title,
//! document language, language selector, experience cards, navigation
//! links, hero words, CV links, card groups. A failing pass stops the
//! rewrite; passes already applied stay applied.

use tracing::debug;

use crate::core::{DomElement, DynamicWord, Host, HostError, I18nEvent, Query};
use crate::i18n::{localized_url, strip_language_prefix, Catalog, Language};
use crate::switcher::config::SiteConfig;
use crate::switcher::experience::render_experience_cards;

pub const TEXT_ATTR: &str = "data-i18n";
pub const HTML_ATTR: &str = "data-i18n-html";
pub const EXPERIENCE_ATTR: &str = "data-i18n-experience-cards";
pub const DYNAMIC_WORDS_CLASS: &str = "data-i18n-dynamic-words";
pub const CV_ATTRS: [&str; 2] = ["data-cv-download", "data-cv-download-floating"];

pub struct PageRewriter<'a, H: Host> {
    host: &'a H,
    language: Language,
    catalog: &'a Catalog,
    config: &'a SiteConfig,
}

impl<'a, H: Host> PageRewriter<'a, H> {
    pub fn new(host: &'a H, language: Language, catalog: &'a Catalog, config: &'a SiteConfig) -> Self {
        Self {
            host,
            language,
            catalog,
            config,
        }
    }

    fn t(&self, key: &str) -> String {
        self.catalog.translate(key)
    }

    pub fn rewrite(&self) -> Result<(), HostError> {
        self.keyed_text()?;
        self.keyed_html();
        self.document_title();
        self.host.set_document_language(self.language.code())?;
        self.language_selector()?;
        self.experience_cards();
        self.navigation_links()?;
        self.dynamic_words()?;
        self.cv_links()?;
        self.card_groups();
        debug!(language = %self.language, "page rewritten");
        Ok(())
    }

    fn keyed_text(&self) -> Result<(), HostError> {
        for element in self.host.query_all(&Query::Attribute(TEXT_ATTR)) {
            let Some(key) = element.attribute(TEXT_ATTR).filter(|k| !k.is_empty()) else {
                continue;
            };
            let text = self.t(&key);

            if element.is_tag("input") || element.is_tag("textarea") {
                element.set_attribute("placeholder", &text)?;
            } else if !element.contains_graphic() {
                element.set_text_content(&text);
            }
            for attr in ["aria-label", "title"] {
                if element.has_attribute(attr) {
                    element.set_attribute(attr, &text)?;
                }
            }
        }
        Ok(())
    }

    fn keyed_html(&self) {
        for element in self.host.query_all(&Query::Attribute(HTML_ATTR)) {
            if let Some(key) = element.attribute(HTML_ATTR).filter(|k| !k.is_empty()) {
                element.set_inner_html(&self.t(&key));
            }
        }
    }

    /// Page title for the current path, if the page has a translated one.
    pub fn title_for(&self, path: &str) -> Option<String> {
        let page = strip_language_prefix(path);
        if page.is_empty() || page == "/" {
            return Some(format!(
                "{} {}",
                self.t("hero.title.part1"),
                self.t("hero.title.part2")
            ));
        }
        ["about", "contact", "projects"]
            .into_iter()
            .find(|section| page.contains(section))
            .map(|section| {
                format!(
                    "{} - {}",
                    self.t(&format!("{section}.title")),
                    self.config.owner_name
                )
            })
    }

    fn document_title(&self) {
        if let Some(title) = self.title_for(&self.host.pathname()) {
            self.host.set_title(&title);
        }
    }

    fn language_selector(&self) -> Result<(), HostError> {
        let code = self.language.code();
        for element in self.host.query_all(&Query::Class("language-code")) {
            element.set_text_content(&code.to_uppercase());
        }
        for option in self.host.query_all(&Query::Class("language-option")) {
            let active = option.attribute("data-lang").as_deref() == Some(code);
            option.set_class("active", active)?;
            for icon in option.query_all(&Query::Class("check-icon")) {
                icon.set_visible(active)?;
            }
        }
        Ok(())
    }

    fn experience_cards(&self) {
        let containers = self.host.query_all(&Query::Attribute(EXPERIENCE_ATTR));
        if containers.is_empty() {
            return;
        }
        let html = render_experience_cards(self.catalog);
        for container in containers {
            container.set_inner_html(&html);
        }
    }

    /// Root-relative hrefs only; external and fragment links are left alone.
    fn navigation_links(&self) -> Result<(), HostError> {
        for link in self.host.query_all(&Query::Class("nav-link")) {
            let Some(href) = link.attribute("href") else {
                continue;
            };
            if !href.starts_with('/') || href.starts_with("//") {
                continue;
            }
            link.set_attribute("href", &localized_url(&href, self.language))?;
        }
        Ok(())
    }

    fn words(&self) -> Vec<DynamicWord> {
        self.config
            .dynamic_words
            .iter()
            .map(|word| DynamicWord {
                text: self.t(&format!("hero.dynamicWords.{}", word.key)),
                color: word.color.clone(),
            })
            .collect()
    }

    fn dynamic_words(&self) -> Result<(), HostError> {
        let targets = self.host.query_all(&Query::Class(DYNAMIC_WORDS_CLASS));
        let Some(first) = targets.first() else {
            return Ok(());
        };
        let words = self.words();
        first.set_attribute("data-words", &serde_json::to_string(&words)?)?;
        first.dispatch(&I18nEvent::DynamicTextUpdate { words })
    }

    fn cv_links(&self) -> Result<(), HostError> {
        let Some(path) = self.config.cv_path(self.language) else {
            return Ok(());
        };
        for link in self.host.query_all(&Query::AnyAttribute(&CV_ATTRS)) {
            if link.is_tag("a") {
                link.set_attribute("href", path)?;
            }
        }
        Ok(())
    }

    fn card_groups(&self) {
        for group in &self.config.card_groups {
            let elements = self.host.query_all(&Query::Attribute(&group.attribute));
            for (index, element) in elements.iter().enumerate() {
                let explicit = element.attribute(&group.attribute);
                if let Some(key) = group.key_for(explicit.as_deref(), index) {
                    element.set_text_content(&self.t(key));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryElement, MemoryHost};
    use crate::i18n::catalog;

    fn rewrite(host: &MemoryHost, language: Language) {
        let config = SiteConfig::default();
        PageRewriter::new(host, language, catalog(language), &config)
            .rewrite()
            .unwrap();
    }

    #[test]
    fn titles_follow_the_path() {
        let host = MemoryHost::default();
        let config = SiteConfig::default();
        let es = PageRewriter::new(&host, Language::Es, catalog(Language::Es), &config);
        assert_eq!(es.title_for("/es/").as_deref(), Some("Diseño y sitios de alto rendimiento"));
        assert_eq!(es.title_for("/es").as_deref(), Some("Diseño y sitios de alto rendimiento"));
        assert_eq!(es.title_for("/es/about").as_deref(), Some("Sobre mí - Damian Meroni"));
        assert_eq!(es.title_for("/es/contact").as_deref(), Some("Contacto - Damian Meroni"));
        assert_eq!(es.title_for("/blog/post"), None);
    }

    #[test]
    fn keyed_text_respects_inputs_icons_and_labels() {
        let input = MemoryElement::new("input").with_attr(TEXT_ATTR, "common.email");
        let icon_button = MemoryElement::new("button")
            .with_attr(TEXT_ATTR, "common.menu")
            .with_attr("aria-label", "Menu")
            .with_child(MemoryElement::new("svg"));
        let titled = MemoryElement::new("span")
            .with_attr(TEXT_ATTR, "common.home")
            .with_attr("title", "Home")
            .with_text("Home");
        let host = MemoryHost::new("/es/")
            .with_element(input.clone())
            .with_element(icon_button.clone())
            .with_element(titled.clone());

        rewrite(&host, Language::Es);

        assert_eq!(
            input.attribute("placeholder").as_deref(),
            Some(catalog(Language::Es).resource().common.email.as_str())
        );
        assert_eq!(input.text(), "");
        assert_eq!(icon_button.children().len(), 1);
        assert_eq!(
            icon_button.attribute("aria-label").as_deref(),
            Some(catalog(Language::Es).resource().common.menu.as_str())
        );
        assert_eq!(titled.text(), "Inicio");
        assert_eq!(titled.attribute("title").as_deref(), Some("Inicio"));
    }

    #[test]
    fn navigation_skips_external_links() {
        let about = MemoryElement::new("a").with_class("nav-link").with_attr("href", "/about");
        let external = MemoryElement::new("a")
            .with_class("nav-link")
            .with_attr("href", "https://github.com/damianmeroni");
        let host = MemoryHost::new("/")
            .with_element(about.clone())
            .with_element(external.clone());

        rewrite(&host, Language::Es);
        assert_eq!(about.attribute("href").as_deref(), Some("/es/about"));
        assert_eq!(
            external.attribute("href").as_deref(),
            Some("https://github.com/damianmeroni")
        );

        rewrite(&host, Language::En);
        assert_eq!(about.attribute("href").as_deref(), Some("/about"));
    }

    #[test]
    fn cv_links_only_touch_anchors() {
        let hero = MemoryElement::new("a").with_attr("data-cv-download", "");
        let floating = MemoryElement::new("a").with_attr("data-cv-download-floating", "");
        let button = MemoryElement::new("button").with_attr("data-cv-download", "");
        let host = MemoryHost::new("/")
            .with_element(hero.clone())
            .with_element(floating.clone())
            .with_element(button.clone());

        rewrite(&host, Language::Es);
        assert_eq!(hero.attribute("href").as_deref(), Some("/cv/Damian_Meroni_CV_ES_I.pdf"));
        assert_eq!(floating.attribute("href").as_deref(), Some("/cv/Damian_Meroni_CV_ES_I.pdf"));
        assert_eq!(button.attribute("href"), None);
    }

    #[test]
    fn dynamic_words_are_published_on_the_element() {
        let words = MemoryElement::new("span").with_class(DYNAMIC_WORDS_CLASS);
        let host = MemoryHost::new("/").with_element(words.clone());

        rewrite(&host, Language::Es);

        let blob = words.attribute("data-words").unwrap();
        let parsed: Vec<DynamicWord> = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed.len(), 9);
        assert_eq!(parsed[0].text, "construyo");
        assert_eq!(parsed[0].color, "#3178C6");

        let events = words.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "dynamicTextUpdate");
        assert_eq!(events[0].1["words"][8]["text"], "modelo");
    }
}
