//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, a request body limit, and
//! all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS middleware: allow localhost origins for console access. Use the
    // configured port plus port+1 for a dev server.
    let port = state.config.general.port;
    let dev_port = port.saturating_add(1);
    let mut origins = Vec::new();
    for p in [port, dev_port] {
        for host in ["127.0.0.1", "localhost"] {
            if let Ok(origin) = format!("http://{}:{}", host, p).parse::<HeaderValue>() {
                origins.push(origin);
            }
        }
    }
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ui", get(handlers::ui))
        .route("/languages", get(handlers::languages))
        .route("/conversation", get(handlers::conversation))
        .route("/conversation/message", post(handlers::post_message))
        .route("/conversation/language", put(handlers::put_language))
        .route("/documents", get(handlers::list_documents))
        .route("/faqs", get(handlers::list_faqs))
        .route("/dashboard", get(handlers::dashboard_figures))
        .route("/translations", get(handlers::translations))
        .layer(DefaultBodyLimit::max(64 * 1024)) // 64KB for chat payloads
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
