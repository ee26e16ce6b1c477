use thiserror::Error;

use crate::core::HostError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog `{0}` is not embedded")]
    Missing(String),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("language `{0}` is not supported")]
    UnsupportedLanguage(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("translation runtime error: {0}")]
    Runtime(String),

    #[error(transparent)]
    Host(#[from] HostError),
}
