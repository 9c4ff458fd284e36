use chrono::{DateTime, Utc};
use serde::Serialize;

use super::prompt::{
    build_analysis_prompt, PatientContext, ANALYSIS_MAX_TOKENS, ANALYSIS_SYSTEM_PROMPT,
    ANALYSIS_TEMPERATURE,
};
use super::DISCLAIMER;
use crate::provider::LlmGateway;

/// Tag prefix on analysis ids.
pub const ANALYSIS_ID_PREFIX: &str = "PPLX";

/// Narrative analysis of one clinical note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteAnalysis {
    pub llm_analysis: String,
    pub citations: Vec<String>,
    pub disclaimer: &'static str,
}

/// Run the narrative analysis call.
///
/// Degrades instead of failing: whatever `complete_or_degrade` returns
/// becomes `llm_analysis`, placeholder or not.
pub async fn analyze_note(
    gateway: &LlmGateway,
    note_text: &str,
    patient: &PatientContext,
) -> NoteAnalysis {
    let user_prompt = build_analysis_prompt(note_text, patient);
    let result = gateway
        .complete_or_degrade(
            ANALYSIS_SYSTEM_PROMPT,
            &user_prompt,
            ANALYSIS_TEMPERATURE,
            ANALYSIS_MAX_TOKENS,
        )
        .await;

    NoteAnalysis {
        llm_analysis: result.content,
        citations: result.citations,
        disclaimer: DISCLAIMER,
    }
}

/// Second-resolution analysis id, e.g. `PPLX-20260824143015`.
///
/// Two submissions within the same second share an id; entries are
/// identified by `created_at`, the id is a display tag.
pub fn analysis_id(now: DateTime<Utc>) -> String {
    format!("{}-{}", ANALYSIS_ID_PREFIX, now.format("%Y%m%d%H%M%S"))
}
