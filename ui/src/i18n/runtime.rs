//! Fluent-backed translation runtime used by the facade once initialized.
//!
//! Each catalog's string leaves are compiled into one Fluent resource:
//! `hero.title.part1` becomes message `hero-title-part1` and `{{name}}`
//! becomes `{ $name }`. Only dotted keys that name a string leaf reach a
//! message; anything else misses. Placeables without a matching argument render
//! back as `{{name}}`, the same as [`interpolate`](crate::i18n::interpolate).

use std::collections::HashMap;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use tracing::{debug, warn};

use crate::i18n::catalog::Catalog;
use crate::i18n::error::I18nError;
use crate::i18n::strategy::{LanguageStrategy, StrategyFactory};
use crate::i18n::types::Language;
use crate::i18n::utils::{segments, Params, Segment};

fn message_id(key: &str) -> String {
    key.replace('.', "-")
}

/// A compiled string leaf: its Fluent id and placeholder names.
struct CompiledMessage {
    id: String,
    placeholders: Vec<String>,
}

/// Fluent source for one catalog, plus the compiled message for each
/// dotted key.
fn compile(catalog: &Catalog) -> (String, HashMap<String, CompiledMessage>) {
    let mut ftl = String::new();
    let mut messages = HashMap::new();

    for (key, text) in catalog.strings() {
        let id = message_id(&key);
        let mut names = Vec::new();
        let mut body = String::new();
        for segment in segments(text) {
            match segment {
                Segment::Placeholder(name) => {
                    body.push_str(&format!("{{ ${name} }}"));
                    names.push(name.to_string());
                }
                Segment::Text(literal) => {
                    for c in literal.chars() {
                        match c {
                            '{' => body.push_str("{\"{\"}"),
                            '}' => body.push_str("{\"}\"}"),
                            '\n' => body.push_str("\n    "),
                            c => body.push(c),
                        }
                    }
                }
            }
        }
        if body.trim().is_empty() {
            body = format!("{{\"{body}\"}}");
        }
        ftl.push_str(&format!("{id} = {body}\n"));
        messages.insert(
            key,
            CompiledMessage {
                id,
                placeholders: names,
            },
        );
    }

    (ftl, messages)
}

struct LoadedLanguage {
    bundle: FluentBundle<FluentResource>,
    messages: HashMap<String, CompiledMessage>,
}

/// Compiled bundles for every language loaded so far.
pub struct TranslationRuntime {
    languages: HashMap<Language, LoadedLanguage>,
}

impl TranslationRuntime {
    pub fn new(language: Language) -> Result<Self, I18nError> {
        let mut runtime = Self {
            languages: HashMap::new(),
        };
        runtime.load_language(language)?;
        Ok(runtime)
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.languages.contains_key(&language)
    }

    /// Compile `language`'s catalog into a bundle unless already loaded.
    pub fn load_language(&mut self, language: Language) -> Result<(), I18nError> {
        if self.has_language(language) {
            return Ok(());
        }

        let strategy = StrategyFactory::strategy_for(language);
        let (ftl, messages) = compile(strategy.translations());

        let resource = match FluentResource::try_new(ftl) {
            Ok(res) => res,
            Err((res, errs)) => {
                warn!(%language, errors = ?errs, "fluent parse errors, keeping valid messages");
                res
            }
        };

        let mut bundle = FluentBundle::new_concurrent(vec![strategy.metadata().locale.clone()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errs| I18nError::Runtime(format!("{errs:?}")))?;

        debug!(%language, messages = messages.len(), "loaded translation bundle");
        self.languages.insert(language, LoadedLanguage { bundle, messages });
        Ok(())
    }

    /// `None` when the language is not loaded or the key has no message.
    pub fn translate(&self, language: Language, key: &str, params: Option<&Params>) -> Option<String> {
        let loaded = self.languages.get(&language)?;
        let message = loaded.messages.get(key)?;
        let pattern = loaded.bundle.get_message(&message.id)?.value()?;

        let mut args = FluentArgs::new();
        for name in &message.placeholders {
            let value = params
                .and_then(|p| p.get(name))
                .map(str::to_string)
                .unwrap_or_else(|| format!("{{{{{name}}}}}"));
            args.set(name.as_str(), FluentValue::from(value));
        }

        let mut errs = Vec::new();
        let text = loaded
            .bundle
            .format_pattern(pattern, Some(&args), &mut errs)
            .to_string();
        if !errs.is_empty() {
            warn!(%language, key, errors = ?errs, "fluent formatting errors");
        }
        Some(text)
    }
}
