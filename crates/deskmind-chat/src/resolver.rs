//! Response resolution: live provider call or deterministic local fallback,
//! plus related-document matching.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use tracing::warn;

use deskmind_core::i18n::Language;
use deskmind_provider::{ChatTurn, CompletionClient};

/// Upper bound on related-document hints per reply.
const MAX_RELATED_DOCS: usize = 3;

// =============================================================================
// DocTopic
// =============================================================================

/// Fixed keyword categories, each mapped to one knowledge-base document.
///
/// Variant order is match order and doubles as the index into
/// [`Language::knowledge_base`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocTopic {
    Installation,
    Api,
    Troubleshooting,
    Configuration,
    Security,
}

impl DocTopic {
    /// All topics, in category-check order.
    pub const ALL: [DocTopic; 5] = [
        DocTopic::Installation,
        DocTopic::Api,
        DocTopic::Troubleshooting,
        DocTopic::Configuration,
        DocTopic::Security,
    ];

    /// Lowercase keywords that trigger this topic via substring match.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            DocTopic::Installation => &["install", "setup"],
            DocTopic::Api => &["api", "integration"],
            DocTopic::Troubleshooting => &["error", "problem", "issue"],
            DocTopic::Configuration => &["config", "setting"],
            DocTopic::Security => &["security", "ssl", "auth"],
        }
    }

    fn index(self) -> usize {
        match self {
            DocTopic::Installation => 0,
            DocTopic::Api => 1,
            DocTopic::Troubleshooting => 2,
            DocTopic::Configuration => 3,
            DocTopic::Security => 4,
        }
    }
}

/// Match the user's text against the fixed keyword categories and return up
/// to three document names from the active language's knowledge base.
///
/// Returns `None` (never an empty list) when no category matched, so callers
/// can distinguish "no related docs" from "nothing to render".
pub fn related_documents(text: &str, language: Language) -> Option<Vec<String>> {
    let lowered = text.to_lowercase();
    let names = language.knowledge_base();

    let mut docs = Vec::new();
    for topic in DocTopic::ALL {
        if docs.len() == MAX_RELATED_DOCS {
            break;
        }
        if topic.keywords().iter().any(|kw| lowered.contains(kw)) {
            docs.push(names[topic.index()].to_string());
        }
    }

    if docs.is_empty() {
        None
    } else {
        Some(docs)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Why the local fallback was used instead of the live provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No API key configured. Expected, not exceptional.
    MissingCredential,
    /// The provider call failed or returned no usable content.
    Provider,
}

/// Outcome of resolving one user turn.
///
/// The two paths are explicit so callers and tests can assert which one
/// executed without inspecting logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A live reply from the completion provider.
    Answered {
        content: String,
        related_docs: Option<Vec<String>>,
    },
    /// A deterministic canned reply composed locally.
    Fallback {
        reason: FallbackReason,
        content: String,
        related_docs: Option<Vec<String>>,
    },
}

impl Resolution {
    /// The reply text, whichever path produced it.
    pub fn content(&self) -> &str {
        match self {
            Resolution::Answered { content, .. } | Resolution::Fallback { content, .. } => content,
        }
    }

    /// The related-document hints, whichever path produced them.
    pub fn related_docs(&self) -> Option<&[String]> {
        match self {
            Resolution::Answered { related_docs, .. }
            | Resolution::Fallback { related_docs, .. } => related_docs.as_deref(),
        }
    }

    /// The fallback reason, if this turn fell back.
    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Resolution::Answered { .. } => None,
            Resolution::Fallback { reason, .. } => Some(*reason),
        }
    }
}

// =============================================================================
// ResponseResolver
// =============================================================================

/// Decides between the live provider and the local fallback for each turn.
///
/// Never raises past its boundary: provider failures are logged and absorbed
/// into a fallback resolution.
pub struct ResponseResolver {
    client: Option<Arc<dyn CompletionClient>>,
}

impl ResponseResolver {
    /// Build a resolver. `None` models the expected no-credential state in
    /// which every turn is answered by the fallback.
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    /// Whether a live provider is wired in.
    pub fn has_provider(&self) -> bool {
        self.client.is_some()
    }

    /// Resolve one user turn against the prior provider-facing history.
    pub async fn resolve(
        &self,
        text: &str,
        history: &[ChatTurn],
        language: Language,
    ) -> Resolution {
        let related_docs = related_documents(text, language);

        let Some(client) = &self.client else {
            return Resolution::Fallback {
                reason: FallbackReason::MissingCredential,
                content: compose_fallback(language),
                related_docs,
            };
        };

        let mut request = Vec::with_capacity(history.len() + 2);
        request.push(ChatTurn::system(language.system_prompt()));
        request.extend_from_slice(history);
        request.push(ChatTurn::user(text));

        match client.complete(&request).await {
            Ok(content) => Resolution::Answered {
                content,
                related_docs,
            },
            Err(e) => {
                warn!(error = %e, "Completion provider failed; using local fallback");
                Resolution::Fallback {
                    reason: FallbackReason::Provider,
                    content: compose_fallback(language),
                    related_docs,
                }
            }
        }
    }
}

/// Compose a fallback reply: a random opener, a blank line, the fixed
/// follow-up tips block.
fn compose_fallback(language: Language) -> String {
    let openers = language.openers();
    let opener = openers
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(openers[0]);
    format!("{}\n\n{}", opener, language.follow_up())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use deskmind_provider::{ChatRole, ProviderError};
    use std::sync::Mutex;

    /// Test double that records the request and returns a fixed reply.
    struct RecordingClient {
        reply: Result<String, ()>,
        seen: Mutex<Vec<Vec<ChatTurn>>>,
    }

    impl RecordingClient {
        fn answering(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<Vec<ChatTurn>> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, turns: &[ChatTurn]) -> Result<String, ProviderError> {
            self.seen.lock().unwrap().push(turns.to_vec());
            match &self.reply {
                Ok(content) => Ok(content.clone()),
                Err(()) => Err(ProviderError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        }
    }

    // ---- Related documents ----

    #[test]
    fn test_related_docs_install_only() {
        let docs = related_documents("How do I install the agent?", Language::En);
        assert_eq!(docs, Some(vec!["Installation Guide.pdf".to_string()]));
    }

    #[test]
    fn test_related_docs_case_insensitive() {
        let docs = related_documents("INSTALL help please", Language::En);
        assert_eq!(docs, Some(vec!["Installation Guide.pdf".to_string()]));
    }

    #[test]
    fn test_related_docs_setup_triggers_installation() {
        let docs = related_documents("initial setup steps", Language::En);
        assert_eq!(docs, Some(vec!["Installation Guide.pdf".to_string()]));
    }

    #[test]
    fn test_related_docs_three_categories_in_order() {
        let docs = related_documents("install the api with security enabled", Language::En);
        assert_eq!(
            docs,
            Some(vec![
                "Installation Guide.pdf".to_string(),
                "API Documentation.html".to_string(),
                "Security Best Practices.pdf".to_string(),
            ])
        );
    }

    #[test]
    fn test_related_docs_capped_at_three_when_all_match() {
        let docs =
            related_documents("install api error config security", Language::En).unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0], "Installation Guide.pdf");
        assert_eq!(docs[1], "API Documentation.html");
        assert_eq!(docs[2], "Troubleshooting FAQ.md");
    }

    #[test]
    fn test_related_docs_none_when_no_keyword() {
        assert_eq!(related_documents("hello there", Language::En), None);
    }

    #[test]
    fn test_related_docs_never_empty_list() {
        // The contract is None-or-nonempty, not Some(vec![]).
        let docs = related_documents("", Language::En);
        assert_eq!(docs, None);
    }

    #[test]
    fn test_related_docs_localized_names() {
        let docs = related_documents("problema con la instalación... install", Language::Es);
        assert_eq!(
            docs,
            Some(vec![
                "Guía de Instalación.pdf".to_string(),
                "FAQ de Solución de Problemas.md".to_string(),
            ])
        );
    }

    #[test]
    fn test_related_docs_each_category_contributes_once() {
        // Both keywords of the same category match; one name, not two.
        let docs = related_documents("install and setup", Language::En);
        assert_eq!(docs, Some(vec!["Installation Guide.pdf".to_string()]));
    }

    #[test]
    fn test_doc_topic_keyword_table() {
        assert!(DocTopic::Security.keywords().contains(&"ssl"));
        assert!(DocTopic::Troubleshooting.keywords().contains(&"issue"));
        assert_eq!(DocTopic::ALL.len(), 5);
    }

    // ---- Fallback path ----

    #[tokio::test]
    async fn test_no_client_falls_back_with_missing_credential() {
        let resolver = ResponseResolver::new(None);
        let resolution = resolver.resolve("hello", &[], Language::En).await;

        assert_eq!(
            resolution.fallback_reason(),
            Some(FallbackReason::MissingCredential)
        );
        assert!(!resolution.content().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_content_is_opener_plus_follow_up() {
        let resolver = ResponseResolver::new(None);
        let resolution = resolver
            .resolve("How do I install the agent?", &[], Language::En)
            .await;

        let content = resolution.content();
        let openers = Language::En.openers();
        assert!(
            openers.iter().any(|o| content.starts_with(o)),
            "content should start with one of the fixed openers: {}",
            content
        );
        assert!(content.ends_with(Language::En.follow_up()));
        assert_eq!(
            resolution.related_docs(),
            Some(&["Installation Guide.pdf".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_fallback_opener_varies_within_fixed_set() {
        let resolver = ResponseResolver::new(None);
        let openers = Language::En.openers();
        for _ in 0..20 {
            let resolution = resolver.resolve("hi", &[], Language::En).await;
            assert!(openers.iter().any(|o| resolution.content().starts_with(o)));
        }
    }

    #[tokio::test]
    async fn test_fallback_localized() {
        let resolver = ResponseResolver::new(None);
        let resolution = resolver.resolve("bonjour", &[], Language::Fr).await;
        assert!(resolution.content().ends_with(Language::Fr.follow_up()));
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let resolver = ResponseResolver::new(Some(Arc::new(RecordingClient::failing())));
        let resolution = resolver.resolve("install help", &[], Language::En).await;

        assert_eq!(resolution.fallback_reason(), Some(FallbackReason::Provider));
        assert!(!resolution.content().is_empty());
        // Related docs are attached regardless of path.
        assert_eq!(
            resolution.related_docs(),
            Some(&["Installation Guide.pdf".to_string()][..])
        );
    }

    // ---- Answered path ----

    #[tokio::test]
    async fn test_answered_uses_provider_content() {
        let client = Arc::new(RecordingClient::answering("live answer"));
        let resolver = ResponseResolver::new(Some(Arc::clone(&client) as _));
        let resolution = resolver.resolve("question", &[], Language::En).await;

        assert_eq!(resolution.fallback_reason(), None);
        assert_eq!(resolution.content(), "live answer");
    }

    #[tokio::test]
    async fn test_request_is_system_then_history_then_user() {
        let client = Arc::new(RecordingClient::answering("ok"));
        let resolver = ResponseResolver::new(Some(Arc::clone(&client) as _));

        let history = vec![
            ChatTurn::user("earlier question"),
            ChatTurn::assistant("earlier answer"),
        ];
        resolver
            .resolve("new question", &history, Language::De)
            .await;

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.len(), 4);
        assert_eq!(request[0].role, ChatRole::System);
        assert_eq!(request[0].content, Language::De.system_prompt());
        assert_eq!(request[1].content, "earlier question");
        assert_eq!(request[2].content, "earlier answer");
        assert_eq!(request[3].role, ChatRole::User);
        assert_eq!(request[3].content, "new question");
    }

    #[tokio::test]
    async fn test_answered_attaches_related_docs() {
        let client = Arc::new(RecordingClient::answering("reply"));
        let resolver = ResponseResolver::new(Some(client as _));
        let resolution = resolver
            .resolve("api integration auth question", &[], Language::En)
            .await;

        assert_eq!(
            resolution.related_docs(),
            Some(
                &[
                    "API Documentation.html".to_string(),
                    "Security Best Practices.pdf".to_string(),
                ][..]
            )
        );
    }

    #[tokio::test]
    async fn test_answered_without_keywords_has_no_docs() {
        let client = Arc::new(RecordingClient::answering("reply"));
        let resolver = ResponseResolver::new(Some(client as _));
        let resolution = resolver.resolve("thanks!", &[], Language::En).await;
        assert_eq!(resolution.related_docs(), None);
    }

    // ---- Resolution accessors ----

    #[test]
    fn test_resolution_accessors() {
        let answered = Resolution::Answered {
            content: "a".to_string(),
            related_docs: None,
        };
        assert_eq!(answered.content(), "a");
        assert_eq!(answered.related_docs(), None);
        assert_eq!(answered.fallback_reason(), None);

        let fallback = Resolution::Fallback {
            reason: FallbackReason::Provider,
            content: "f".to_string(),
            related_docs: Some(vec!["doc".to_string()]),
        };
        assert_eq!(fallback.content(), "f");
        assert_eq!(fallback.related_docs(), Some(&["doc".to_string()][..]));
        assert_eq!(fallback.fallback_reason(), Some(FallbackReason::Provider));
    }

    #[test]
    fn test_has_provider() {
        assert!(!ResponseResolver::new(None).has_provider());
        let client = Arc::new(RecordingClient::answering("x"));
        assert!(ResponseResolver::new(Some(client as _)).has_provider());
    }
}
