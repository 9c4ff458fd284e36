use serde::Serialize;
use serde_json::Value;

use super::prompt::{
    build_extraction_prompt, EXTRACTION_MAX_TOKENS, EXTRACTION_SYSTEM_PROMPT,
    EXTRACTION_TEMPERATURE,
};
use super::ExtractionError;
use crate::provider::LlmGateway;

/// Placeholder `raw` when the provider is not configured. Shorter than
/// the narrative placeholder; the two are distinct on the wire.
pub const EXTRACTION_UNCONFIGURED: &str = "LLM not configured.";

/// Placeholder `raw` when the reply cannot be interpreted.
pub const EXTRACTION_FAILED: &str = "Failed";

/// Parsed condition-extraction outcome, serialized into the assistant
/// response as `extracted_conditions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionExtraction {
    pub conditions: Vec<String>,
    pub raw: String,
}

impl ConditionExtraction {
    pub fn unconfigured() -> Self {
        Self {
            conditions: Vec::new(),
            raw: EXTRACTION_UNCONFIGURED.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            conditions: Vec::new(),
            raw: EXTRACTION_FAILED.to_string(),
        }
    }
}

/// Strip an optional fenced code block from a model reply.
///
/// Takes the segment after the first ``` marker up to the next one (or
/// the end of text when unclosed) and drops a leading `json` language
/// tag. Replies without fences pass through trimmed.
fn strip_code_fence(reply: &str) -> String {
    let trimmed = reply.trim();
    let start = match trimmed.find("```") {
        Some(start) => start,
        None => return trimmed.to_string(),
    };

    let after = &trimmed[start + 3..];
    let inner = match after.find("```") {
        Some(end) => &after[..end],
        None => after,
    };

    let inner = inner.trim();
    inner.strip_prefix("json").unwrap_or(inner).trim().to_string()
}

/// Parse the extraction reply into a condition list.
///
/// The reply must contain a JSON object; a missing `conditions` key
/// yields an empty list and non-string items are skipped. `raw` carries
/// the fence-stripped text that was parsed.
pub fn parse_conditions(reply: &str) -> Result<ConditionExtraction, ExtractionError> {
    let raw = strip_code_fence(reply);
    let value: Value = serde_json::from_str(&raw)?;
    let object = value.as_object().ok_or(ExtractionError::NotAnObject)?;

    let conditions = match object.get("conditions") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };

    Ok(ConditionExtraction { conditions, raw })
}

/// Run the condition-extraction call and interpret its reply.
///
/// Never fails: an unconfigured provider yields the unconfigured
/// placeholder without a call, and any provider or parse fault yields
/// the `Failed` placeholder.
pub async fn extract_conditions(gateway: &LlmGateway, note_text: &str) -> ConditionExtraction {
    if !gateway.is_configured() {
        return ConditionExtraction::unconfigured();
    }

    let user_prompt = build_extraction_prompt(note_text);
    let reply = match gateway
        .complete(
            EXTRACTION_SYSTEM_PROMPT,
            &user_prompt,
            EXTRACTION_TEMPERATURE,
            EXTRACTION_MAX_TOKENS,
        )
        .await
    {
        Ok(result) => result.content,
        Err(e) => {
            tracing::warn!(error = %e, "condition extraction call failed");
            return ConditionExtraction::failed();
        }
    };

    match parse_conditions(&reply) {
        Ok(extraction) => extraction,
        Err(e) => {
            tracing::warn!(error = %e, "condition extraction reply unusable");
            ConditionExtraction::failed()
        }
    }
}
