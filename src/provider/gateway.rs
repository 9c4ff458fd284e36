//! Gateway over the chat client with the degrade policy.
//!
//! The service keeps serving 200s when the provider is absent or
//! failing: `complete_or_degrade` turns every provider fault into
//! placeholder content. Only input validation can fail a request.

use std::sync::Arc;

use super::types::{ChatClient, ProviderResult};
use super::ProviderError;

/// Placeholder content returned when no API credential is configured.
pub const UNCONFIGURED_MESSAGE: &str = "LLM not configured. Set PERPLEXITY_API_KEY to enable.";

/// Front door for chat completions.
///
/// Holds the client only when a credential was configured at startup.
/// `None` is a supported mode, not an error state.
pub struct LlmGateway {
    client: Option<Arc<dyn ChatClient>>,
    model: String,
}

impl LlmGateway {
    /// Gateway backed by a real client.
    pub fn new(client: Arc<dyn ChatClient>, model: &str) -> Self {
        Self {
            client: Some(client),
            model: model.to_string(),
        }
    }

    /// Gateway with no credential. Every call degrades to the
    /// unconfigured placeholder.
    pub fn unconfigured(model: &str) -> Self {
        Self {
            client: None,
            model: model.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One completion call with typed failures. `Unconfigured` when no
    /// credential is present; the provider is not contacted in that case.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<ProviderResult, ProviderError> {
        match &self.client {
            Some(client) => client.complete(system, user, temperature, max_tokens).await,
            None => Err(ProviderError::Unconfigured),
        }
    }

    /// Completion that never fails.
    ///
    /// An unconfigured gateway yields the fixed placeholder; any other
    /// fault is logged server-side and replaced by `API call failed: ...`
    /// content. Citations and usage are empty on both degraded paths.
    pub async fn complete_or_degrade(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> ProviderResult {
        match self.complete(system, user, temperature, max_tokens).await {
            Ok(result) => result,
            Err(ProviderError::Unconfigured) => ProviderResult::placeholder(UNCONFIGURED_MESSAGE),
            Err(e) => {
                tracing::error!(error = %e, "Perplexity API call failed");
                ProviderResult::placeholder(format!("API call failed: {e}"))
            }
        }
    }
}
