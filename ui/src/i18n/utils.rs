//! Language detection, persistence and formatting helpers.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde_json::{Map, Value};
use time::Date;
use tracing::warn;

use crate::core::{Host, HostError, PreferenceStorage};
use crate::i18n::catalog::lookup;
use crate::i18n::constants::DEFAULT_LANGUAGE;
use crate::i18n::strategy::{LanguageStrategy, StrategyFactory};
use crate::i18n::types::{Direction, Language};

/// Pick the active language: stored preference, then the browser language,
/// then the document `lang`, then the default. `None` (server render)
/// resolves to the default without touching anything.
pub fn detect_user_language<H: Host>(host: Option<&H>) -> Language {
    let Some(host) = host else {
        return DEFAULT_LANGUAGE;
    };

    match PreferenceStorage::new(host).load() {
        Ok(Some(stored)) => return stored,
        Ok(None) => {}
        Err(err) => warn!("could not read stored language: {err}"),
    }

    if let Some(lang) = host.navigator_language().as_deref().and_then(Language::from_tag) {
        return lang;
    }

    if let Some(lang) = Language::from_tag(&host.document_language()) {
        return lang;
    }

    DEFAULT_LANGUAGE
}

/// Store the preference and reflect it on the document root.
pub(crate) fn store_preference<H: Host>(host: &H, language: Language) -> Result<(), HostError> {
    PreferenceStorage::new(host).save(language)?;
    host.set_document_language(language.code())?;
    // Both site languages are left-to-right.
    host.set_document_direction(Direction::Ltr.as_str())
}

/// Persist `language`; a no-op without a host. Failures are logged.
pub fn persist_language<H: Host>(host: Option<&H>, language: Language) {
    let Some(host) = host else {
        return;
    };
    if let Err(err) = store_preference(host, language) {
        warn!("could not persist language {language}: {err}");
    }
}

/// Named values for `{{placeholder}}` substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Display) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A `{{name}}` occurrence inside a template.
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// Split `template` into literal text and `{{word}}` placeholders, where a
/// word is `[A-Za-z0-9_]+`. Anything else stays literal.
pub(crate) fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;
    while let Some(offset) = template[i..].find("{{") {
        let open = i + offset;
        let name_start = open + 2;
        let name_len = template[name_start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let name_end = name_start + name_len;
        if name_len > 0 && template[name_end..].starts_with("}}") {
            if literal_start < open {
                out.push(Segment::Text(&template[literal_start..open]));
            }
            out.push(Segment::Placeholder(&template[name_start..name_end]));
            i = name_end + 2;
            literal_start = i;
        } else {
            i = open + 1;
        }
    }
    if literal_start < template.len() {
        out.push(Segment::Text(&template[literal_start..]));
    }
    out
}

/// Replace `{{name}}` placeholders; unknown names stay verbatim.
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => match params.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(name);
                    out.push_str("}}");
                }
            },
        }
    }
    out
}

/// Dotted lookup into `translations`: the string found at `key`, else `key`.
pub fn translation_key(key: &str, translations: &Map<String, Value>) -> String {
    let (head, rest) = match key.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (key, None),
    };
    translations
        .get(head)
        .and_then(|node| match rest {
            Some(rest) => lookup(node, rest),
            None => Some(node),
        })
        .and_then(Value::as_str)
        .unwrap_or(key)
        .to_string()
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

/// Long-form date for `locale` (`January 15, 2024` / `15 de enero de 2024`).
/// Unsupported locales format as English.
pub fn format_date(date: Date, locale: &str) -> String {
    let month = usize::from(u8::from(date.month())) - 1;
    match Language::from_tag(locale).unwrap_or(DEFAULT_LANGUAGE) {
        Language::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Language::Es => format!("{} de {} de {}", date.day(), MONTHS_ES[month], date.year()),
    }
}

/// Group and punctuate `value` per the locale's number pattern, with at
/// most three fraction digits.
pub fn format_number(value: f64, locale: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let language = Language::from_tag(locale).unwrap_or(DEFAULT_LANGUAGE);
    let strategy = StrategyFactory::strategy_for(language);
    let meta = strategy.metadata();

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            if let Some(sep) = meta.grouping_separator() {
                grouped.push(sep);
            }
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push(meta.decimal_separator());
        out.push_str(frac_part);
    }
    out
}
