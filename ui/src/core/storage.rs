//! Local persistence of the language preference.
//!
//! Two keys exist: the raw code under [`LANGUAGE_STORAGE_KEY`] and the
//! store envelope under [`STORE_STORAGE_KEY`]. Both are written together by
//! [`PreferenceStorage::save`] so they cannot drift apart; the raw key is
//! authoritative on read.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::host::{Host, HostError};
use crate::i18n::constants::{LANGUAGE_STORAGE_KEY, STORE_STORAGE_KEY};
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedEnvelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    current_language: String,
}

/// Read the language out of a store envelope. Unknown codes read as `None`.
fn parse_envelope(raw: &str) -> Option<Language> {
    serde_json::from_str::<PersistedEnvelope>(raw)
        .ok()
        .and_then(|env| Language::parse(&env.state.current_language))
}

pub struct PreferenceStorage<'h, H: Host> {
    host: &'h H,
}

impl<'h, H: Host> PreferenceStorage<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// The stored preference, if any valid one exists.
    pub fn load(&self) -> Result<Option<Language>, HostError> {
        if let Some(raw) = self.host.storage_item(LANGUAGE_STORAGE_KEY)? {
            // Older builds wrote the envelope under the raw key.
            if let Some(lang) = Language::parse(raw.trim()).or_else(|| parse_envelope(&raw)) {
                return Ok(Some(lang));
            }
            debug!(value = %raw, "ignoring invalid stored language");
        }
        Ok(self
            .host
            .storage_item(STORE_STORAGE_KEY)?
            .as_deref()
            .and_then(parse_envelope))
    }

    pub fn save(&self, language: Language) -> Result<(), HostError> {
        let envelope = PersistedEnvelope {
            state: PersistedState {
                current_language: language.code().to_string(),
            },
            version: 0,
        };
        self.host
            .set_storage_item(LANGUAGE_STORAGE_KEY, language.code())?;
        self.host
            .set_storage_item(STORE_STORAGE_KEY, &serde_json::to_string(&envelope)?)
    }
}
