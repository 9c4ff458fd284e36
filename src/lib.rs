pub mod api; // HTTP surface: router, server lifecycle, endpoints
pub mod config;
pub mod copilot; // Prompt construction + reply post-processing
pub mod history; // Bounded in-memory submission store
pub mod provider; // Hosted LLM client, gateway, degrade policy

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::server::start_server;
use crate::api::types::ApiContext;
use crate::history::HistoryStore;
use crate::provider::{LlmGateway, PerplexityClient};

/// Wire the gateway from configuration. No credential means the
/// unconfigured gateway; the service still starts and degrades.
fn build_gateway(config: &config::Config) -> LlmGateway {
    match &config.api_key {
        Some(key) => LlmGateway::new(
            Arc::new(PerplexityClient::new(key, &config.model)),
            &config.model,
        ),
        None => LlmGateway::unconfigured(&config.model),
    }
}

/// Run the service until ctrl-c.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let config = config::Config::from_env();

    tracing::info!(
        model = %config.model,
        configured = config.configured(),
        "{} starting v{}",
        config::APP_NAME,
        config::APP_VERSION
    );
    if !config.configured() {
        tracing::warn!("PERPLEXITY_API_KEY not set, provider calls degrade to placeholders");
    }

    let ctx = ApiContext::new(
        Arc::new(build_gateway(&config)),
        Arc::new(HistoryStore::new()),
    );

    let mut server = start_server(ctx, config.bind_addr).await?;
    tracing::info!(addr = %server.addr, "listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;

    server.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_wiring_follows_credential() {
        let configured = config::Config::from_lookup(|key| match key {
            "PERPLEXITY_API_KEY" => Some("pplx-key".into()),
            _ => None,
        });
        assert!(build_gateway(&configured).is_configured());

        let bare = config::Config::from_lookup(|_| None);
        let gateway = build_gateway(&bare);
        assert!(!gateway.is_configured());
        assert_eq!(gateway.model(), config::DEFAULT_MODEL);
    }
}
