use dioxus::prelude::*;

use crate::i18n::{DirectI18n, Language};

fn option_class(active: bool) -> &'static str {
    if active {
        "language-option active"
    } else {
        "language-option"
    }
}

/// Language picker. The markup (`.language-code`, `.language-option`,
/// `data-lang`, `.check-icon`) is what the live switcher rewrites, so a
/// statically rendered page and a switched one look the same.
#[component]
pub fn LanguageSelector(current: Language, on_select: EventHandler<Language>) -> Element {
    let i18n = DirectI18n::new(current);
    let label = i18n.t("common.selectLanguage");
    let code = current.code().to_uppercase();
    let options: Vec<(Language, &'static str)> = i18n
        .available_languages()
        .into_iter()
        .map(|meta| (meta.code, meta.name))
        .collect();

    rsx! {
        div { class: "language-selector",
            button {
                class: "language-toggle",
                r#type: "button",
                aria_label: "{label}",
                title: "{label}",
                "data-i18n": "common.selectLanguage",
                span { class: "language-code", "{code}" }
                svg { class: "language-icon", view_box: "0 0 24 24", "aria-hidden": "true" }
            }
            ul { class: "language-menu", role: "listbox",
                for (lang, name) in options {
                    li { key: "{lang}",
                        button {
                            class: option_class(lang == current),
                            r#type: "button",
                            "data-lang": "{lang}",
                            onclick: move |_| on_select.call(lang),
                            span { class: "language-name", "{name}" }
                            span {
                                class: "check-icon",
                                style: if lang == current { "" } else { "display: none" },
                                "✓"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_option_is_active() {
        assert_eq!(option_class(true), "language-option active");
        assert_eq!(option_class(false), "language-option");
    }
}
