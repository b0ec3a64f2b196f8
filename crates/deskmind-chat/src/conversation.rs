//! Conversation state: the displayed message list and the provider-facing
//! history, kept in sync by the orchestrator.

use deskmind_core::i18n::Language;
use deskmind_provider::ChatTurn;

use crate::types::Message;

/// Holds one conversation: what the user sees and what the provider is told.
///
/// The two lists move together: exactly one user entry and at most one
/// assistant entry per answered turn. Fallback turns touch the displayed
/// list only, so a failed provider call never poisons future context.
#[derive(Debug)]
pub struct Conversation {
    language: Language,
    messages: Vec<Message>,
    history: Vec<ChatTurn>,
}

impl Conversation {
    /// Start a conversation seeded with the language's greeting.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            messages: vec![Message::bot(language.greeting(), None)],
            history: Vec::new(),
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language: clears both lists and reseeds the greeting.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.messages = vec![Message::bot(language.greeting(), None)];
        self.history.clear();
    }

    /// Displayed messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Provider-facing history, oldest first.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Append a displayed message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Record an answered user/assistant pair into provider-facing history.
    pub fn record_exchange(&mut self, user_text: &str, assistant_text: &str) {
        self.history.push(ChatTurn::user(user_text));
        self.history.push(ChatTurn::assistant(assistant_text));
    }
}
