//! Health and status endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: &'static str,
    pub model: String,
    pub configured: bool,
}

/// `GET /` — service status and provider configuration.
///
/// `configured` reflects whether a credential was present at startup,
/// not whether the provider is currently reachable.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        provider: config::PROVIDER_NAME,
        model: ctx.gateway.model().to_string(),
        configured: ctx.gateway.is_configured(),
    })
}
