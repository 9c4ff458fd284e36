use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::{ChatClient, ProviderResult};
use super::ProviderError;

/// Chat-completions endpoint of the hosted API.
pub const PERPLEXITY_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";

/// Per-request timeout. The upstream call gets one minute; there is no
/// retry on top of it.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Perplexity HTTP client for hosted chat completions.
pub struct PerplexityClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl PerplexityClient {
    /// Create a client for the production endpoint.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_endpoint(PERPLEXITY_ENDPOINT, api_key, model, REQUEST_TIMEOUT_SECS)
    }

    /// Create a client against a specific endpoint. Used by tests.
    pub fn with_endpoint(endpoint: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }
}

/// Request body for the chat-completions API.
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from the chat-completions API. `citations` and `usage`
/// are not guaranteed to be present.
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    citations: Vec<String>,
    #[serde(default)]
    usage: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[async_trait]
impl ChatClient for PerplexityClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<ProviderResult, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::Connection(self.endpoint.clone())
                } else if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_secs)
                } else {
                    ProviderError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ResponseParsing(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::MalformedResponse("no choices in completion".into()))?;

        Ok(ProviderResult {
            content,
            citations: parsed.citations,
            usage: parsed.usage,
        })
    }
}

/// Mock chat client for testing — returns a configurable completion or
/// a configurable error.
pub struct MockChatClient {
    content: String,
    citations: Vec<String>,
    error: Option<ProviderError>,
}

impl MockChatClient {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            citations: Vec::new(),
            error: None,
        }
    }

    pub fn with_citations(mut self, citations: Vec<String>) -> Self {
        self.citations = citations;
        self
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            content: String::new(),
            citations: Vec::new(),
            error: Some(error),
        }
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _temperature: f64,
        _max_tokens: u32,
    ) -> Result<ProviderResult, ProviderError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(ProviderResult {
            content: self.content.clone(),
            citations: self.citations.clone(),
            usage: serde_json::Map::new(),
        })
    }
}
