//! Deskmind application binary - composition root.
//!
//! Ties together all Deskmind crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Resolve the provider credential (config file, then environment)
//! 3. Wire the response resolver and turn orchestrator
//! 4. Start the axum API server with the embedded console at /ui

mod cli;

use std::sync::Arc;

use clap::Parser;

use deskmind_api::{create_router, AppState};
use deskmind_chat::{ResponseResolver, TurnOrchestrator};
use deskmind_core::i18n::Language;
use deskmind_core::DeskmindConfig;
use deskmind_provider::{CompletionClient, OpenAiClient};

use cli::CliArgs;

/// Resolve the provider API key.
///
/// Priority: config file > DESKMIND_API_KEY > OPENAI_API_KEY. Absence is a
/// valid state that routes every turn to the local fallback.
fn resolve_api_key(config: &DeskmindConfig) -> Option<String> {
    config
        .provider
        .api_key
        .clone()
        .or_else(|| std::env::var("DESKMIND_API_KEY").ok())
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing: --log-level flag beats RUST_LOG beats "info".
    let filter = match args.resolve_log_level() {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Deskmind v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = DeskmindConfig::load_or_default(&config_file);
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // The resolved port feeds both the listener and the CORS allowlist.
    config.general.port = args.resolve_port(config.general.port);

    // Provider wiring.
    let client: Option<Arc<dyn CompletionClient>> = match resolve_api_key(&config) {
        Some(key) => {
            tracing::info!(
                model = %config.provider.model,
                base_url = %config.provider.base_url,
                "Completion provider configured"
            );
            Some(Arc::new(OpenAiClient::new(&config.provider, key)))
        }
        None => {
            tracing::info!("No API key configured — replies use the local fallback");
            None
        }
    };

    let language = Language::from_code(&config.chat.default_language);
    let orchestrator = Arc::new(TurnOrchestrator::new(
        ResponseResolver::new(client),
        language,
        config.chat.max_message_chars,
    ));

    // === API server ===

    let addr = format!("127.0.0.1:{}", config.general.port);
    let port = config.general.port;
    let state = AppState::new(config, orchestrator);
    let router = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind — is another instance running?");
            tracing::error!("Try: deskmind --port {}", port + 1);
            return Err(e.into());
        }
    };

    tracing::info!(addr = %addr, "API server listening");
    tracing::info!("Console at http://{}/ui", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
