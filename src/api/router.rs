//! Service router.
//!
//! Health probe at `/`, the assistant API nested under `/api/`. The
//! API routes carry a permissive CORS layer for browser clients; the
//! health route does not need one.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the service router.
pub fn service_router(ctx: ApiContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/assistant", post(endpoints::assistant::analyze))
        .route("/history", get(endpoints::history::list))
        .layer(cors);

    Router::new()
        .route("/", get(endpoints::health::check))
        .nest("/api", api)
        .with_state(ctx)
}
