pub mod gateway;
pub mod perplexity;
pub mod types;

pub use gateway::*;
pub use perplexity::*;
pub use types::*;

use thiserror::Error;

/// Failures from the hosted chat-completions API.
///
/// These stay internal: callers that face the HTTP boundary go through
/// `LlmGateway::complete_or_degrade`, which absorbs every variant into
/// placeholder content.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("no provider credential configured")]
    Unconfigured,

    #[error("cannot reach Perplexity at {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("Perplexity returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("response parsing error: {0}")]
    ResponseParsing(String),

    #[error("malformed completion: {0}")]
    MalformedResponse(String),
}
