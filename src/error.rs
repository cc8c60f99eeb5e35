use thiserror::Error;

/// Errors raised while building a slug engine or loading its configuration.
///
/// Computing a slug never fails; only construction does.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration is malformed (bad pretranslate map, empty separator, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No transliteration table carries the requested name.
    #[error("unknown transliteration table: {0}")]
    UnknownTable(String),

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
