//! Recent-submissions endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::history::HistoryEntry;

#[derive(Serialize)]
pub struct HistoryResponse {
    pub items: Vec<HistoryEntry>,
}

/// `GET /api/history` — recent submissions, newest first, at most 50.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<HistoryResponse>, ApiError> {
    let items = ctx.history.recent()?;
    Ok(Json(HistoryResponse { items }))
}
