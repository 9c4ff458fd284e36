//! Provider seam: the chat-completion trait and its call result.

use async_trait::async_trait;

use super::ProviderError;

/// Outcome of one chat-completion call.
///
/// `citations` and `usage` are whatever the provider attached; both are
/// empty on degraded calls. Never persisted.
#[derive(Debug, Clone)]
pub struct ProviderResult {
    pub content: String,
    pub citations: Vec<String>,
    pub usage: serde_json::Map<String, serde_json::Value>,
}

impl ProviderResult {
    /// Placeholder result carrying only degraded content.
    pub fn placeholder(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            citations: Vec::new(),
            usage: serde_json::Map::new(),
        }
    }
}

/// One-shot chat completion against a hosted LLM.
///
/// Implemented by `PerplexityClient` and by the in-memory mock used in
/// tests. No retry or streaming; one request, one reply.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<ProviderResult, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_empty_citations_and_usage() {
        let result = ProviderResult::placeholder("degraded");
        assert_eq!(result.content, "degraded");
        assert!(result.citations.is_empty());
        assert!(result.usage.is_empty());
    }
}
