use thiserror::Error;

/// Top-level error type for the Deskmind system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for
/// DeskmindError` so that the `?` operator works seamlessly across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeskmindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for DeskmindError {
    fn from(err: toml::de::Error) -> Self {
        DeskmindError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DeskmindError {
    fn from(err: toml::ser::Error) -> Self {
        DeskmindError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DeskmindError {
    fn from(err: serde_json::Error) -> Self {
        DeskmindError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Deskmind operations.
pub type Result<T> = std::result::Result<T, DeskmindError>;
