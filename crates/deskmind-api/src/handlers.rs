//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/body parameters via axum extractors,
//! interacts with AppState services, and returns JSON responses.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};

use deskmind_catalog::{
    dashboard, documents, faq, ActivityEntry, Document, Faq, StatTile, ALL_CATEGORIES,
};
use deskmind_chat::{FallbackReason, Message};
use deskmind_core::i18n::Language;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranslationParams {
    pub lang: Option<String>,
}

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub flag: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub language: String,
    pub composing: bool,
    pub placeholder: String,
    pub messages: Vec<Message>,
}

/// Outcome of one submitted message.
///
/// `accepted` is false for the empty-input no-op, in which case no messages
/// were appended and the other fields are absent.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageSwitchResponse {
    pub language: String,
    pub greeting: Message,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentsResponse {
    pub documents: Vec<Document>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FaqsResponse {
    pub faqs: Vec<Faq>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: Vec<StatTile>,
    pub recent_activity: Vec<ActivityEntry>,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - liveness plus version and uptime.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /languages - the supported language configs, in picker order.
pub async fn languages() -> Json<Vec<LanguageInfo>> {
    let list = Language::ALL
        .iter()
        .map(|lang| LanguageInfo {
            code: lang.code().to_string(),
            name: lang.name().to_string(),
            flag: lang.flag().to_string(),
        })
        .collect();
    Json(list)
}

/// GET /conversation - the displayed message list and composing state.
pub async fn conversation(
    State(state): State<AppState>,
) -> Result<Json<ConversationResponse>, ApiError> {
    let language = state.orchestrator.language()?;
    Ok(Json(ConversationResponse {
        language: language.code().to_string(),
        composing: state.orchestrator.is_composing(),
        placeholder: language.placeholder().to_string(),
        messages: state.orchestrator.messages()?,
    }))
}

/// POST /conversation/message - run one chat turn.
pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    match state.orchestrator.submit(&request.text).await? {
        Some(turn) => Ok(Json(SubmitResponse {
            accepted: true,
            user: Some(turn.user),
            reply: Some(turn.reply),
            fallback: turn.fallback,
        })),
        None => Ok(Json(SubmitResponse {
            accepted: false,
            user: None,
            reply: None,
            fallback: None,
        })),
    }
}

/// PUT /conversation/language - switch language and reseed the greeting.
pub async fn put_language(
    State(state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> Result<Json<LanguageSwitchResponse>, ApiError> {
    let language = Language::from_code(&request.language);
    let greeting = state.orchestrator.set_language(language)?;
    Ok(Json(LanguageSwitchResponse {
        language: language.code().to_string(),
        greeting,
    }))
}

/// GET /documents - filtered document catalog.
pub async fn list_documents(Query(params): Query<CatalogParams>) -> Json<DocumentsResponse> {
    let query = params.q.unwrap_or_default();
    let category = params
        .category
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let all = documents::mock_documents();
    Json(DocumentsResponse {
        documents: documents::filter(&all, &query, &category),
        categories: documents::categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// GET /faqs - filtered FAQ catalog.
pub async fn list_faqs(Query(params): Query<CatalogParams>) -> Json<FaqsResponse> {
    let query = params.q.unwrap_or_default();
    let category = params
        .category
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let all = faq::mock_faqs();
    Json(FaqsResponse {
        faqs: faq::filter(&all, &query, &category),
        categories: faq::categories().into_iter().map(str::to_string).collect(),
    })
}

/// GET /dashboard - headline stats and the recent-activity feed.
pub async fn dashboard_figures() -> Json<DashboardResponse> {
    Json(DashboardResponse {
        stats: dashboard::stats(),
        recent_activity: dashboard::recent_activity(),
    })
}

/// GET /translations - console string table for a language.
pub async fn translations(Query(params): Query<TranslationParams>) -> Json<serde_json::Value> {
    let language = Language::from_code(params.lang.as_deref().unwrap_or("en"));
    let table: serde_json::Map<String, serde_json::Value> = language
        .translations()
        .iter()
        .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(*value)))
        .collect();
    Json(serde_json::Value::Object(table))
}

/// GET /ui - the embedded console.
pub async fn ui() -> impl IntoResponse {
    Html(deskmind_ui::CONSOLE_HTML)
}
