//! Turn orchestrator: drives one user submission from input validation to
//! the appended bot reply.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde::Serialize;

use deskmind_core::i18n::Language;

use crate::conversation::Conversation;
use crate::error::ChatError;
use crate::resolver::{FallbackReason, Resolution, ResponseResolver};
use crate::types::Message;

/// The two messages a completed turn appended, plus which path answered it.
#[derive(Clone, Debug, Serialize)]
pub struct TurnRecord {
    pub user: Message,
    pub reply: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

/// Coordinates the turn lifecycle over one conversation.
///
/// Exactly one turn may be in flight at a time: the composing flag doubles
/// as the guard, so overlapping submissions are rejected instead of racing
/// to append history out of order. The conversation lock is never held
/// across the provider await.
pub struct TurnOrchestrator {
    resolver: ResponseResolver,
    conversation: Mutex<Conversation>,
    composing: AtomicBool,
    max_message_chars: usize,
}

impl TurnOrchestrator {
    /// Create an orchestrator with a fresh conversation in `language`.
    pub fn new(resolver: ResponseResolver, language: Language, max_message_chars: usize) -> Self {
        Self {
            resolver,
            conversation: Mutex::new(Conversation::new(language)),
            composing: AtomicBool::new(false),
            max_message_chars,
        }
    }

    /// Submit one user message.
    ///
    /// Empty or whitespace-only input is a silent no-op (`Ok(None)`).
    /// Otherwise appends the user message, resolves a reply while the
    /// composing flag is raised, appends exactly one bot message, and, on
    /// an answered turn only, records the pair into provider-facing
    /// history. Returns the appended pair.
    pub async fn submit(&self, text: &str) -> Result<Option<TurnRecord>, ChatError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        if text.chars().count() > self.max_message_chars {
            return Err(ChatError::MessageTooLong(self.max_message_chars));
        }

        if self
            .composing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ChatError::TurnInFlight);
        }

        let (user, history, language) = {
            let mut convo = match self.lock_conversation() {
                Ok(convo) => convo,
                Err(e) => {
                    self.composing.store(false, Ordering::Release);
                    return Err(e);
                }
            };
            let user = Message::user(text);
            convo.push(user.clone());
            (user, convo.history().to_vec(), convo.language())
        };

        let resolution = self.resolver.resolve(text, &history, language).await;

        let result = {
            match self.lock_conversation() {
                Ok(mut convo) => {
                    let reply = Message::bot(
                        resolution.content(),
                        resolution.related_docs().map(<[String]>::to_vec),
                    );
                    convo.push(reply.clone());
                    if let Resolution::Answered { content, .. } = &resolution {
                        convo.record_exchange(text, content);
                    }
                    Ok(Some(TurnRecord {
                        user,
                        reply,
                        fallback: resolution.fallback_reason(),
                    }))
                }
                Err(e) => Err(e),
            }
        };

        self.composing.store(false, Ordering::Release);
        result
    }

    /// Whether a reply is currently being awaited.
    pub fn is_composing(&self) -> bool {
        self.composing.load(Ordering::Acquire)
    }

    /// Snapshot of the displayed message list.
    pub fn messages(&self) -> Result<Vec<Message>, ChatError> {
        Ok(self.lock_conversation()?.messages().to_vec())
    }

    /// The active conversation language.
    pub fn language(&self) -> Result<Language, ChatError> {
        Ok(self.lock_conversation()?.language())
    }

    /// Switch language, resetting the conversation to a single greeting.
    ///
    /// Rejected while a turn is in flight so the pending reply cannot land
    /// in the reseeded conversation.
    pub fn set_language(&self, language: Language) -> Result<Message, ChatError> {
        if self.is_composing() {
            return Err(ChatError::TurnInFlight);
        }
        let mut convo = self.lock_conversation()?;
        convo.set_language(language);
        Ok(convo.messages()[0].clone())
    }

    fn lock_conversation(&self) -> Result<std::sync::MutexGuard<'_, Conversation>, ChatError> {
        self.conversation
            .lock()
            .map_err(|e| ChatError::State(format!("conversation lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
