//! Clinical note analysis endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::copilot::{self, ConditionExtraction, PatientContext};
use crate::history::UserIdentity;

#[derive(Deserialize)]
pub struct AssistantRequest {
    pub note_text: Option<String>,
    /// Legacy alias for `note_text`, kept for older clients.
    pub prompt: Option<String>,
    #[serde(default)]
    pub patient: PatientContext,
    pub user: Option<UserIdentity>,
}

impl AssistantRequest {
    /// First non-empty of `note_text`, `prompt`. Whitespace-only input
    /// counts as present.
    fn effective_note(&self) -> Option<&str> {
        [self.note_text.as_deref(), self.prompt.as_deref()]
            .into_iter()
            .flatten()
            .find(|note| !note.is_empty())
    }
}

#[derive(Serialize)]
pub struct AssistantResponse {
    pub analysis_id: String,
    pub created_at: String,
    pub llm_analysis: String,
    pub citations: Vec<String>,
    pub disclaimer: &'static str,
    pub extracted_conditions: ConditionExtraction,
    pub user: UserIdentity,
}

/// `POST /api/assistant` — analyze a clinical note.
///
/// Runs the narrative call and the condition-extraction call
/// sequentially, then records the submission. Provider faults degrade
/// inside the copilot layer; the only client error is missing input,
/// which records nothing.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(req): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, ApiError> {
    let note_text = req.effective_note().ok_or(ApiError::MissingInput)?;
    let user = req.user.clone().unwrap_or_default();

    let analysis = copilot::analyze_note(&ctx.gateway, note_text, &req.patient).await;
    let extraction = copilot::extract_conditions(&ctx.gateway, note_text).await;

    let entry = ctx
        .history
        .record(note_text, extraction.conditions.clone(), user.clone())?;

    Ok(Json(AssistantResponse {
        analysis_id: copilot::analysis_id(chrono::Utc::now()),
        created_at: entry.created_at,
        llm_analysis: analysis.llm_analysis,
        citations: analysis.citations,
        disclaimer: analysis.disclaimer,
        extracted_conditions: extraction,
        user,
    }))
}
