//! Conversational core for Deskmind.
//!
//! Provides the conversation state holder, the turn orchestrator, and the
//! response resolver that decides between a live provider call and the
//! deterministic local fallback.

pub mod conversation;
pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod types;

pub use conversation::Conversation;
pub use error::ChatError;
pub use orchestrator::{TurnOrchestrator, TurnRecord};
pub use resolver::{related_documents, DocTopic, FallbackReason, Resolution, ResponseResolver};
pub use types::{Message, MessageStatus, Sender};
