//! In-memory [`Host`] used by native builds and tests.
//!
//! The element tree is a plain `Rc<RefCell<..>>` graph: no markup parsing,
//! `set_inner_html` just records the markup it was given.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::core::events::I18nEvent;
use crate::core::host::{DomElement, Host, HostError, Query};
use crate::i18n::Language;

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    inner_html: Option<String>,
    children: Vec<MemoryElement>,
    hidden: bool,
    events: Vec<(String, Value)>,
    dispatch_fails: bool,
}

#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_ascii_uppercase(),
            ..ElementData::default()
        })))
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_child(self, child: MemoryElement) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn inner_html(&self) -> Option<String> {
        self.0.borrow().inner_html.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    pub fn is_hidden(&self) -> bool {
        self.0.borrow().hidden
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    /// Make every event dispatched on this element fail.
    pub fn set_dispatch_failure(&self, fails: bool) {
        self.0.borrow_mut().dispatch_fails = fails;
    }

    /// Events dispatched on this element as `(name, detail)`.
    pub fn events(&self) -> Vec<(String, Value)> {
        self.0.borrow().events.clone()
    }

    fn matches(&self, query: &Query<'_>) -> bool {
        let data = self.0.borrow();
        match query {
            Query::Attribute(name) => data.attributes.contains_key(*name),
            Query::AnyAttribute(names) => names.iter().any(|n| data.attributes.contains_key(*n)),
            Query::Class(class) => data.classes.iter().any(|c| c == class),
        }
    }

    fn collect(&self, query: &Query<'_>, out: &mut Vec<MemoryElement>) {
        for child in self.0.borrow().children.iter() {
            if child.matches(query) {
                out.push(child.clone());
            }
            child.collect(query, out);
        }
    }

    fn any_descendant(&self, pred: &dyn Fn(&ElementData) -> bool) -> bool {
        self.0
            .borrow()
            .children
            .iter()
            .any(|c| pred(&c.0.borrow()) || c.any_descendant(pred))
    }
}

impl DomElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_text_content(&self, text: &str) {
        let mut data = self.0.borrow_mut();
        data.children.clear();
        data.inner_html = None;
        data.text = text.to_string();
    }

    fn set_inner_html(&self, html: &str) {
        let mut data = self.0.borrow_mut();
        data.children.clear();
        data.text.clear();
        data.inner_html = Some(html.to_string());
    }

    fn contains_graphic(&self) -> bool {
        self.any_descendant(&|data: &ElementData| data.tag.eq_ignore_ascii_case("svg"))
    }

    fn set_class(&self, class: &str, enabled: bool) -> Result<(), HostError> {
        let mut data = self.0.borrow_mut();
        data.classes.retain(|c| c != class);
        if enabled {
            data.classes.push(class.to_string());
        }
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), HostError> {
        self.0.borrow_mut().hidden = !visible;
        Ok(())
    }

    fn query_all(&self, query: &Query<'_>) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect(query, &mut out);
        out
    }

    fn dispatch(&self, event: &I18nEvent) -> Result<(), HostError> {
        let mut data = self.0.borrow_mut();
        if data.dispatch_fails {
            return Err(HostError::Js(format!("{} listener threw", event.name())));
        }
        data.events.push((event.name().to_string(), event.detail()));
        Ok(())
    }
}

#[derive(Debug)]
struct HostData {
    pathname: String,
    history: Vec<(Language, String)>,
    storage: BTreeMap<String, String>,
    storage_fails: bool,
    history_fails: bool,
    navigator_language: Option<String>,
    lang: String,
    dir: String,
    title: String,
    events: Vec<(String, Value)>,
    document_events: Vec<(String, Value)>,
}

/// A window + document held entirely in memory.
#[derive(Debug)]
pub struct MemoryHost {
    data: RefCell<HostData>,
    root: MemoryElement,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHost {
    pub fn new(pathname: &str) -> Self {
        Self {
            data: RefCell::new(HostData {
                pathname: pathname.to_string(),
                history: Vec::new(),
                storage: BTreeMap::new(),
                storage_fails: false,
                history_fails: false,
                navigator_language: None,
                lang: String::new(),
                dir: String::new(),
                title: String::new(),
                events: Vec::new(),
                document_events: Vec::new(),
            }),
            root: MemoryElement::new("body"),
        }
    }

    pub fn with_storage(self, key: &str, value: &str) -> Self {
        self.data
            .borrow_mut()
            .storage
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_navigator_language(self, language: &str) -> Self {
        self.data.borrow_mut().navigator_language = Some(language.to_string());
        self
    }

    pub fn with_document_language(self, language: &str) -> Self {
        self.data.borrow_mut().lang = language.to_string();
        self
    }

    pub fn with_element(self, element: MemoryElement) -> Self {
        self.root.0.borrow_mut().children.push(element);
        self
    }

    /// Make every storage read and write fail, as a locked-down browser does.
    pub fn set_storage_failure(&self, fails: bool) {
        self.data.borrow_mut().storage_fails = fails;
    }

    pub fn set_history_failure(&self, fails: bool) {
        self.data.borrow_mut().history_fails = fails;
    }

    /// Simulate a back/forward navigation to `pathname`.
    pub fn set_pathname(&self, pathname: &str) {
        self.data.borrow_mut().pathname = pathname.to_string();
    }

    pub fn history(&self) -> Vec<(Language, String)> {
        self.data.borrow().history.clone()
    }

    pub fn document_direction(&self) -> String {
        self.data.borrow().dir.clone()
    }

    pub fn title(&self) -> String {
        self.data.borrow().title.clone()
    }

    /// Window-level events as `(name, detail)`.
    pub fn events(&self) -> Vec<(String, Value)> {
        self.data.borrow().events.clone()
    }

    /// Document-level events as `(name, detail)`.
    pub fn document_events(&self) -> Vec<(String, Value)> {
        self.data.borrow().document_events.clone()
    }

    pub fn body(&self) -> &MemoryElement {
        &self.root
    }
}

impl Host for MemoryHost {
    type Element = MemoryElement;

    fn pathname(&self) -> String {
        self.data.borrow().pathname.clone()
    }

    fn push_history(&self, language: Language, url: &str) -> Result<(), HostError> {
        let mut data = self.data.borrow_mut();
        if data.history_fails {
            return Err(HostError::Js("pushState rejected".into()));
        }
        data.history.push((language, url.to_string()));
        data.pathname = url.to_string();
        Ok(())
    }

    fn storage_item(&self, key: &str) -> Result<Option<String>, HostError> {
        let data = self.data.borrow();
        if data.storage_fails {
            return Err(HostError::Storage("storage is disabled".into()));
        }
        Ok(data.storage.get(key).cloned())
    }

    fn set_storage_item(&self, key: &str, value: &str) -> Result<(), HostError> {
        let mut data = self.data.borrow_mut();
        if data.storage_fails {
            return Err(HostError::Storage("storage is disabled".into()));
        }
        data.storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn navigator_language(&self) -> Option<String> {
        self.data.borrow().navigator_language.clone()
    }

    fn document_language(&self) -> String {
        self.data.borrow().lang.clone()
    }

    fn set_document_language(&self, code: &str) -> Result<(), HostError> {
        self.data.borrow_mut().lang = code.to_string();
        Ok(())
    }

    fn set_document_direction(&self, direction: &str) -> Result<(), HostError> {
        self.data.borrow_mut().dir = direction.to_string();
        Ok(())
    }

    fn set_title(&self, title: &str) {
        self.data.borrow_mut().title = title.to_string();
    }

    fn query_all(&self, query: &Query<'_>) -> Vec<Self::Element> {
        self.root.query_all(query)
    }

    fn dispatch(&self, event: &I18nEvent) -> Result<(), HostError> {
        self.data
            .borrow_mut()
            .events
            .push((event.name().to_string(), event.detail()));
        Ok(())
    }

    fn dispatch_document(&self, event: &I18nEvent) -> Result<(), HostError> {
        self.data
            .borrow_mut()
            .document_events
            .push((event.name().to_string(), event.detail()));
        Ok(())
    }
}
