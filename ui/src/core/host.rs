//! The slice of the browser the i18n subsystem touches.
//!
//! Everything that reads or writes `window`, `document`, `history` or
//! `localStorage` goes through [`Host`], so the same switching code runs
//! against the real DOM on `wasm32` ([`crate::core::web::WebHost`]) and
//! against [`crate::core::memory::MemoryHost`] in tests and native builds.

use thiserror::Error;

use crate::core::events::I18nEvent;
use crate::i18n::Language;

/// Failures raised by host operations.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("{0} is not available in this context")]
    Unavailable(&'static str),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Element selection used by the page rewrite passes.
///
/// Kept deliberately small: each variant maps onto one CSS selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// `[attr]`
    Attribute(&'a str),
    /// `[a], [b], ...`
    AnyAttribute(&'a [&'a str]),
    /// `.class`
    Class(&'a str),
}

impl Query<'_> {
    pub fn to_selector(&self) -> String {
        match self {
            Query::Attribute(name) => format!("[{name}]"),
            Query::AnyAttribute(names) => names
                .iter()
                .map(|name| format!("[{name}]"))
                .collect::<Vec<_>>()
                .join(", "),
            Query::Class(class) => format!(".{class}"),
        }
    }
}

/// A live document element.
pub trait DomElement: Clone {
    /// Tag name as reported by the document (compare case-insensitively).
    fn tag_name(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError>;

    /// Replace all children with a single text node.
    fn set_text_content(&self, text: &str);

    /// Replace all children with parsed markup.
    fn set_inner_html(&self, html: &str);

    /// Whether an `svg` descendant exists (icon buttons keep their icon).
    fn contains_graphic(&self) -> bool;

    fn set_class(&self, class: &str, enabled: bool) -> Result<(), HostError>;

    /// Show or hide through the inline `display` style.
    fn set_visible(&self, visible: bool) -> Result<(), HostError>;

    /// Descendants matching `query`, in document order.
    fn query_all(&self, query: &Query<'_>) -> Vec<Self>;

    /// Dispatch a custom event targeted at this element.
    fn dispatch(&self, event: &I18nEvent) -> Result<(), HostError>;

    fn is_tag(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }
}

/// Window-level capabilities: location, history, storage, navigator and
/// the root document.
pub trait Host {
    type Element: DomElement;

    /// Current `location.pathname`.
    fn pathname(&self) -> String;

    /// `history.pushState({ language }, "", url)` without navigating.
    fn push_history(&self, language: Language, url: &str) -> Result<(), HostError>;

    fn storage_item(&self, key: &str) -> Result<Option<String>, HostError>;

    fn set_storage_item(&self, key: &str, value: &str) -> Result<(), HostError>;

    /// `navigator.language`, if the host reports one.
    fn navigator_language(&self) -> Option<String>;

    /// The root element's `lang` attribute (empty when unset).
    fn document_language(&self) -> String;

    fn set_document_language(&self, code: &str) -> Result<(), HostError>;

    fn set_document_direction(&self, direction: &str) -> Result<(), HostError>;

    fn set_title(&self, title: &str);

    /// All document elements matching `query`, in document order.
    fn query_all(&self, query: &Query<'_>) -> Vec<Self::Element>;

    /// Dispatch a custom event on `window`.
    fn dispatch(&self, event: &I18nEvent) -> Result<(), HostError>;

    /// Dispatch a custom event on `document`. Listeners attached to the
    /// document never see window events.
    fn dispatch_document(&self, event: &I18nEvent) -> Result<(), HostError>;
}
