//! Translation catalogs.
//!
//! One JSON catalog per language lives under `ui/locales/` and is embedded
//! at compile time. Each is deserialized into the typed
//! [`TranslationResource`] (so a catalog with a missing or extra key fails
//! to load) and kept alongside a `serde_json::Value` tree used for dotted-key
//! lookups such as `hero.title.part1`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::i18n::error::CatalogError;
use crate::i18n::types::Language;

#[derive(Embed)]
#[folder = "locales"]
struct Catalogs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TranslationResource {
    pub common: CommonText,
    pub hero: HeroText,
    pub about: AboutText,
    pub about_page: AboutPageText,
    pub experience: ExperienceText,
    pub projects: ProjectsText,
    pub contact: ContactText,
    pub footer: FooterText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommonText {
    pub email: String,
    pub email_short: String,
    pub years_experience: String,
    pub full_stack: String,
    pub cloud_architecture: String,
    pub years_remote: String,
    pub view_my_work: String,
    pub get_in_touch: String,
    pub home: String,
    pub about: String,
    pub experience: String,
    pub projects: String,
    pub contact: String,
    pub resume_pdf: String,
    pub light_mode: String,
    pub dark_mode: String,
    pub system_mode: String,
    pub close: String,
    pub menu: String,
    pub toggle_theme: String,
    pub select_language: String,
    pub read_more: String,
    pub present: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroText {
    pub title: HeroTitle,
    pub description: String,
    pub dynamic_words: DynamicWords,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroTitle {
    pub part1: String,
    pub part2: String,
    pub part3: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DynamicWords {
    pub build: String,
    pub create: String,
    pub develop: String,
    pub engineer: String,
    pub craft: String,
    pub architect: String,
    pub code: String,
    pub forge: String,
    pub shape: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutText {
    pub title: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub stats: AboutStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutStats {
    pub experience: String,
    pub experience_label: String,
    pub full_stack: String,
    pub full_stack_label: String,
    pub cloud: String,
    pub cloud_label: String,
    pub remote: String,
    pub remote_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutPageText {
    pub title: String,
    pub intro1: String,
    pub intro2: String,
    pub intro3: String,
    pub technical_skills_title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceText {
    pub title: String,
    pub download_resume: String,
    #[serde(rename = "downloadCV")]
    pub download_cv: String,
    pub current: String,
    pub responsibilities: String,
    /// Joins position and company on a card ("Engineer at Acme").
    pub at: String,
    pub jobs: Vec<Job>,
}

/// One entry of the job history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Job {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsText {
    pub title: String,
    pub featured: String,
    pub description: String,
    pub technologies: String,
    pub view_project: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactText {
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub location: String,
    pub availability: String,
    pub available: String,
    pub not_available: String,
    pub letscreate: String,
    pub amazing: String,
    pub ready_transform: String,
    pub choose_way: String,
    pub email_me: String,
    pub email_description: String,
    pub linkedin: String,
    pub linkedin_description: String,
    pub view_profile: String,
    pub schedule_call: String,
    pub schedule_description: String,
    pub book_meeting: String,
    pub prefer_quick: String,
    pub respond_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterText {
    pub copyright: String,
    pub rights: String,
}

/// A loaded catalog: typed resource plus its lookup tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    language: Language,
    resource: TranslationResource,
    tree: Value,
}

impl Catalog {
    pub fn from_json(language: Language, src: &[u8]) -> Result<Self, CatalogError> {
        let resource: TranslationResource = serde_json::from_slice(src)?;
        let tree = serde_json::to_value(&resource)?;
        Ok(Self {
            language,
            resource,
            tree,
        })
    }

    /// Load the catalog embedded for `language`.
    pub fn embedded(language: Language) -> Result<Self, CatalogError> {
        let name = format!("{}.json", language.code());
        let file = Catalogs::get(&name).ok_or(CatalogError::Missing(name))?;
        Self::from_json(language, &file.data)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn resource(&self) -> &TranslationResource {
        &self.resource
    }

    pub fn tree(&self) -> &Value {
        &self.tree
    }

    pub fn jobs(&self) -> &[Job] {
        &self.resource.experience.jobs
    }

    /// Raw value at a dotted key (numeric segments index arrays).
    pub fn value(&self, key: &str) -> Option<&Value> {
        lookup(&self.tree, key)
    }

    /// String leaf at a dotted key.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(Value::as_str)
    }

    /// String leaf at a dotted key, or the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.text(key).unwrap_or(key).to_string()
    }

    /// Every dotted key that reaches a leaf. Arrays count as leaves.
    pub fn keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_keys(&self.tree, String::new(), &mut keys);
        keys
    }

    /// `(dotted key, text)` for every string leaf, array items included.
    pub fn strings(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        collect_strings(&self.tree, String::new(), &mut out);
        out
    }
}

/// Walk `key` segment by segment through `tree`.
pub fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(tree, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn collect_keys(node: &Value, prefix: String, out: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                collect_keys(child, join(&prefix, key), out);
            }
        }
        _ => {
            out.insert(prefix);
        }
    }
}

fn collect_strings<'a>(node: &'a Value, prefix: String, out: &mut Vec<(String, &'a str)>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                collect_strings(child, join(&prefix, key), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_strings(child, join(&prefix, &index.to_string()), out);
            }
        }
        Value::String(text) => out.push((prefix, text)),
        _ => {}
    }
}

fn load(language: Language) -> Catalog {
    Catalog::embedded(language)
        .unwrap_or_else(|err| panic!("embedded `{language}` catalog is invalid: {err}"))
}

static EN: Lazy<Catalog> = Lazy::new(|| load(Language::En));
static ES: Lazy<Catalog> = Lazy::new(|| load(Language::Es));

/// The shared, immutable catalog for `language`.
pub fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_resolve() {
        let en = catalog(Language::En);
        assert_eq!(en.text("hero.title.part1"), Some("I design and"));
        assert_eq!(en.text("experience.jobs.0.company"), Some("Expian UK"));
        assert_eq!(en.text("about.stats.remoteLabel"), Some("Years Remote"));
    }

    #[test]
    fn missing_and_non_string_keys_fall_back_to_the_key() {
        let en = catalog(Language::En);
        assert_eq!(en.translate("hero.title.part9"), "hero.title.part9");
        assert_eq!(en.translate("hero.title"), "hero.title");
        assert_eq!(en.translate("experience.jobs"), "experience.jobs");
        assert_eq!(en.translate(""), "");
        assert_eq!(en.translate("a..b"), "a..b");
    }

    #[test]
    fn catalogs_with_unknown_keys_are_rejected() {
        let err = Catalog::from_json(Language::En, br#"{"common": {}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn keys_treat_arrays_as_leaves() {
        let keys = catalog(Language::En).keys();
        assert!(keys.contains("experience.jobs"));
        assert!(keys.contains("aboutPage.skills"));
        assert!(keys.contains("hero.dynamicWords.forge"));
        assert!(!keys.iter().any(|k| k.starts_with("experience.jobs.")));
    }

    #[test]
    fn strings_reach_into_arrays() {
        let en = catalog(Language::En);
        let strings = en.strings();
        assert!(strings.contains(&("experience.jobs.0.company".to_string(), "Expian UK")));
        assert!(strings.iter().any(|(key, _)| key == "aboutPage.skills.0"));
        for (key, text) in &strings {
            assert_eq!(en.text(key), Some(*text));
        }
    }

    #[test]
    fn typed_view_matches_tree() {
        let es = catalog(Language::Es);
        assert_eq!(es.language(), Language::Es);
        assert_eq!(es.jobs().len(), 5);
        assert_eq!(
            es.text("experience.downloadCV"),
            Some(es.resource().experience.download_cv.as_str())
        );
    }
}
