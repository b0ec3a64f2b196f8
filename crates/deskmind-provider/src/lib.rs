//! Completion provider client for Deskmind.
//!
//! Speaks the OpenAI-compatible `/chat/completions` wire format. This is the
//! single outbound network dependency in the system: one POST per chat turn,
//! no retries, no streaming.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CompletionClient, OpenAiClient};
pub use error::ProviderError;
pub use types::{ChatRole, ChatTurn};
