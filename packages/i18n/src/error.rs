use crate::Locale;
use thiserror::Error;

/// Errors raised while building a catalog or configuration.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("catalog for {locale} is not valid json: {source}")]
    Catalog {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("key `{key}` is not approved for rich text")]
    RichNotAllowed { key: String },
    #[error("rich value for `{key}` has invalid markup: {reason}")]
    InvalidMarkup { key: String, reason: String },
    #[error("link template `{0}` does not contain `{{lang}}`")]
    InvalidLinkTemplate(String),
}

/// Failure writing the durable locale slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("locale storage is unavailable")]
    Unavailable,
    #[error("failed to write locale storage: {0}")]
    Write(String),
}

/// Failure reported by a render subscriber.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("container `#{0}` is missing from the document")]
    MissingContainer(String),
    #[error("{0}")]
    Other(String),
}
