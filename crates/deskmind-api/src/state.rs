//! Application state shared across all route handlers.
//!
//! AppState holds the conversation orchestrator and static configuration.
//! It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use deskmind_chat::TurnOrchestrator;
use deskmind_core::DeskmindConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks; mutable
/// conversation state lives inside the orchestrator.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (read-only after startup).
    pub config: Arc<DeskmindConfig>,
    /// The single conversation orchestrator.
    pub orchestrator: Arc<TurnOrchestrator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(config: DeskmindConfig, orchestrator: Arc<TurnOrchestrator>) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator,
            start_time: Instant::now(),
        }
    }
}
