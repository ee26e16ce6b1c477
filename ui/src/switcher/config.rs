//! Site-specific inputs to the page rewrite: owner name, CV files, the
//! hero's rotating words and the card groups.
//!
//! Defaults describe the portfolio as shipped. A page can override any field
//! by embedding JSON; missing fields keep their defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::{I18nError, Language};

/// One rotating hero word: `hero.dynamicWords.<key>` drawn in `color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordColor {
    pub key: String,
    pub color: String,
}

impl WordColor {
    fn new(key: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            color: color.to_string(),
        }
    }
}

/// Elements carrying `attribute` get their text from a catalog key.
///
/// A non-empty attribute value is the key. Otherwise the element's position
/// among all matches picks from `keys`, then `fallback`; when neither yields
/// a key the element is left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBinding {
    pub attribute: String,
    #[serde(default)]
    pub keys: Vec<Option<String>>,
    #[serde(default)]
    pub fallback: Option<String>,
}

impl GroupBinding {
    fn positional(attribute: &str, keys: &[Option<&str>], fallback: Option<&str>) -> Self {
        Self {
            attribute: attribute.to_string(),
            keys: keys.iter().map(|k| k.map(str::to_string)).collect(),
            fallback: fallback.map(str::to_string),
        }
    }

    /// Key for the element at `index` whose attribute value is `explicit`.
    pub fn key_for<'a>(&'a self, explicit: Option<&'a str>, index: usize) -> Option<&'a str> {
        explicit
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .or_else(|| self.keys.get(index).and_then(|k| k.as_deref()))
            .or(self.fallback.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Appended to section titles: `About Me - <owner>`.
    pub owner_name: String,
    pub cv_paths: BTreeMap<Language, String>,
    pub dynamic_words: Vec<WordColor>,
    pub card_groups: Vec<GroupBinding>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Damian Meroni".to_string(),
            cv_paths: BTreeMap::from([
                (Language::En, "/cv/Damian_Meroni_CV_EN_I.pdf".to_string()),
                (Language::Es, "/cv/Damian_Meroni_CV_ES_I.pdf".to_string()),
            ]),
            dynamic_words: vec![
                WordColor::new("build", "#3178C6"),
                WordColor::new("create", "#61DAFB"),
                WordColor::new("develop", "#339933"),
                WordColor::new("engineer", "#F7DF1E"),
                WordColor::new("craft", "#DD0031"),
                WordColor::new("architect", "#2496ED"),
                WordColor::new("code", "#FF9900"),
                WordColor::new("forge", "#4169E1"),
                WordColor::new("shape", "#47A248"),
            ],
            card_groups: vec![
                GroupBinding::positional(
                    "data-i18n-title",
                    &[
                        Some("contact.emailMe"),
                        Some("contact.linkedin"),
                        Some("contact.scheduleCall"),
                    ],
                    None,
                ),
                GroupBinding::positional(
                    "data-i18n-description",
                    &[
                        Some("contact.emailDescription"),
                        Some("contact.linkedinDescription"),
                        Some("contact.scheduleDescription"),
                    ],
                    None,
                ),
                // The email card shows the address itself.
                GroupBinding::positional(
                    "data-i18n-link-text",
                    &[None, Some("contact.viewProfile")],
                    None,
                ),
                GroupBinding::positional("data-i18n-button-text", &[], Some("contact.bookMeeting")),
            ],
        }
    }
}

impl SiteConfig {
    pub fn from_json(src: &str) -> Result<Self, I18nError> {
        serde_json::from_str(src)
            .map_err(|err| I18nError::Runtime(format!("invalid site config: {err}")))
    }

    pub fn cv_path(&self, language: Language) -> Option<&str> {
        self.cv_paths.get(&language).map(String::as_str)
    }
}
