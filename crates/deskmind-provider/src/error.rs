//! Error types for the completion provider client.

use deskmind_core::error::DeskmindError;

/// Errors from a completion provider call.
///
/// Every variant is fallback-worthy: callers substitute a local canned
/// response instead of surfacing these to the user.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("provider returned no completion content")]
    EmptyCompletion,
}

impl From<ProviderError> for DeskmindError {
    fn from(err: ProviderError) -> Self {
        DeskmindError::Provider(err.to_string())
    }
}
