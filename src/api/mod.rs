//! HTTP surface of the service.
//!
//! Three routes: a health probe at `/`, the assistant endpoint and the
//! history listing under `/api/`. The router is composable —
//! `service_router()` returns a `Router` that can be mounted on any
//! axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::service_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
