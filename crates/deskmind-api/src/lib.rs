//! HTTP API for the Deskmind console.
//!
//! Exposes the chat conversation, the catalog surfaces, and the embedded
//! console over a localhost axum server.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
