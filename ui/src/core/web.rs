//! Browser [`Host`] backed by `web-sys`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement, Window};

use crate::core::events::I18nEvent;
use crate::core::host::{DomElement, Host, HostError, Query};
use crate::i18n::Language;

fn js_error(err: JsValue) -> HostError {
    HostError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn custom_event(event: &I18nEvent) -> Result<CustomEvent, HostError> {
    let detail = js_sys::JSON::parse(&event.detail().to_string()).map_err(js_error)?;
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    CustomEvent::new_with_event_init_dict(event.name(), &init).map_err(js_error)
}

fn collect(list: web_sys::NodeList) -> Vec<WebElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(WebElement)
        .collect()
}

#[derive(Debug, Clone)]
pub struct WebElement(Element);

impl DomElement for WebElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.0.set_attribute(name, value).map_err(js_error)
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn contains_graphic(&self) -> bool {
        matches!(self.0.query_selector("svg"), Ok(Some(_)))
    }

    fn set_class(&self, class: &str, enabled: bool) -> Result<(), HostError> {
        self.0
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(js_error)
    }

    fn set_visible(&self, visible: bool) -> Result<(), HostError> {
        let Some(el) = self.0.dyn_ref::<HtmlElement>() else {
            return Ok(());
        };
        let style = el.style();
        if visible {
            style.remove_property("display").map(|_| ()).map_err(js_error)
        } else {
            style.set_property("display", "none").map_err(js_error)
        }
    }

    fn query_all(&self, query: &Query<'_>) -> Vec<Self> {
        self.0
            .query_selector_all(&query.to_selector())
            .map(collect)
            .unwrap_or_default()
    }

    fn dispatch(&self, event: &I18nEvent) -> Result<(), HostError> {
        let event = custom_event(event)?;
        self.0.dispatch_event(&event).map(|_| ()).map_err(js_error)
    }
}

/// The real `window` and `document`.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// `None` outside a browser (no `window` or no `document`).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Run `callback` on every `popstate` (browser back/forward).
    ///
    /// The listener lives for the rest of the page.
    pub fn on_pop_state(&self, callback: impl FnMut() + 'static) -> Result<(), HostError> {
        let mut callback = callback;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            callback();
        });
        self.window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        closure.forget();
        Ok(())
    }

    fn storage(&self) -> Result<web_sys::Storage, HostError> {
        self.window
            .local_storage()
            .map_err(js_error)?
            .ok_or(HostError::Unavailable("localStorage"))
    }

    fn root(&self) -> Result<Element, HostError> {
        self.document
            .document_element()
            .ok_or(HostError::Unavailable("document element"))
    }
}

impl Host for WebHost {
    type Element = WebElement;

    fn pathname(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push_history(&self, language: Language, url: &str) -> Result<(), HostError> {
        let state = I18nEvent::LanguageChanged { language }.detail();
        let state = js_sys::JSON::parse(&state.to_string()).map_err(js_error)?;
        self.window
            .history()
            .map_err(js_error)?
            .push_state_with_url(&state, "", Some(url))
            .map_err(js_error)
    }

    fn storage_item(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_storage_item(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn navigator_language(&self) -> Option<String> {
        self.window.navigator().language()
    }

    fn document_language(&self) -> String {
        self.root()
            .ok()
            .and_then(|root| root.get_attribute("lang"))
            .unwrap_or_default()
    }

    fn set_document_language(&self, code: &str) -> Result<(), HostError> {
        self.root()?.set_attribute("lang", code).map_err(js_error)
    }

    fn set_document_direction(&self, direction: &str) -> Result<(), HostError> {
        self.root()?.set_attribute("dir", direction).map_err(js_error)
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn query_all(&self, query: &Query<'_>) -> Vec<Self::Element> {
        self.document
            .query_selector_all(&query.to_selector())
            .map(collect)
            .unwrap_or_default()
    }

    fn dispatch(&self, event: &I18nEvent) -> Result<(), HostError> {
        let event = custom_event(event)?;
        self.window.dispatch_event(&event).map(|_| ()).map_err(js_error)
    }

    fn dispatch_document(&self, event: &I18nEvent) -> Result<(), HostError> {
        let event = custom_event(event)?;
        self.document.dispatch_event(&event).map(|_| ()).map_err(js_error)
    }
}
