//! Shared state for the API layer.

use std::sync::Arc;

use crate::history::HistoryStore;
use crate::provider::LlmGateway;

/// Shared context for all API routes.
/// Wraps the provider gateway plus the in-memory history store; each
/// router owns the stores handed to it here.
#[derive(Clone)]
pub struct ApiContext {
    pub gateway: Arc<LlmGateway>,
    pub history: Arc<HistoryStore>,
}

impl ApiContext {
    pub fn new(gateway: Arc<LlmGateway>, history: Arc<HistoryStore>) -> Self {
        Self { gateway, history }
    }
}
