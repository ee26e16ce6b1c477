//! Browser bootstrap: one switcher per page, following back/forward.

use std::rc::Rc;

use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::core::WebHost;
use crate::i18n::Language;
use crate::switcher::{DynamicSwitcher, SiteConfig};

/// Build the page's switcher and hook it to `popstate`. `None` outside a
/// browser.
pub fn install(config: SiteConfig) -> Option<Rc<DynamicSwitcher<WebHost>>> {
    let host = WebHost::new()?;
    let switcher = Rc::new(DynamicSwitcher::with_config(host, config));

    let weak = Rc::downgrade(&switcher);
    let hooked = switcher.host().on_pop_state(move || {
        if let Some(switcher) = weak.upgrade() {
            spawn_local(async move { switcher.handle_pop_state().await });
        }
    });
    if let Err(err) = hooked {
        warn!("back/forward navigation will not switch language: {err}");
    }

    Some(switcher)
}

/// Start a switch from a UI event handler.
pub fn request_switch(switcher: &Rc<DynamicSwitcher<WebHost>>, target: Language) {
    let switcher = Rc::clone(switcher);
    spawn_local(async move { switcher.switch_language(target).await });
}
