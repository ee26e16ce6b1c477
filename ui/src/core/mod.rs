//! Host glue shared by the i18n subsystem: the document/storage/history
//! abstraction, its in-memory and browser implementations, custom events,
//! subscriber lists, preference storage and logging setup.

pub mod events;
pub mod host;
pub mod listeners;
pub mod logging;
pub mod memory;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use events::{DynamicWord, I18nEvent};
pub use host::{DomElement, Host, HostError, Query};
pub use listeners::{Listeners, SubscriptionId};
pub use memory::{MemoryElement, MemoryHost};
pub use storage::PreferenceStorage;

#[cfg(target_arch = "wasm32")]
pub use web::{WebElement, WebHost};
