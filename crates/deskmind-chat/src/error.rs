//! Error types for the conversational core.

use deskmind_core::error::DeskmindError;

/// Errors from the chat engine.
///
/// Resolver failures never appear here: provider problems are absorbed into
/// the local fallback before they reach the orchestrator boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("a turn is already in flight")]
    TurnInFlight,
    #[error("conversation state error: {0}")]
    State(String),
}

impl From<ChatError> for DeskmindError {
    fn from(err: ChatError) -> Self {
        DeskmindError::Chat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::MessageTooLong(2000);
        assert_eq!(
            err.to_string(),
            "message exceeds maximum length of 2000 characters"
        );

        let err = ChatError::TurnInFlight;
        assert_eq!(err.to_string(), "a turn is already in flight");

        let err = ChatError::State("lock poisoned".to_string());
        assert_eq!(err.to_string(), "conversation state error: lock poisoned");
    }

    #[test]
    fn test_chat_error_into_deskmind_error() {
        let err: DeskmindError = ChatError::TurnInFlight.into();
        assert!(matches!(err, DeskmindError::Chat(_)));
        assert!(err.to_string().contains("in flight"));
    }

    #[test]
    fn test_message_too_long_boundary_values() {
        let err = ChatError::MessageTooLong(0);
        assert!(err.to_string().contains("0 characters"));

        let err = ChatError::MessageTooLong(usize::MAX);
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", ChatError::TurnInFlight);
        assert!(dbg.contains("TurnInFlight"));
    }
}
