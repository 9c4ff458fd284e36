//! HTTP server lifecycle — binds the listener and runs the service
//! router on axum in a background task.
//!
//! Pattern: bind → spawn → return handle with shutdown channel. The
//! handle owns the oneshot sender; dropping it without calling
//! `shutdown` leaves the server running until the process exits.

use std::net::SocketAddr;

use tokio::sync::oneshot;

use crate::api::router::service_router;
use crate::api::types::ApiContext;

/// Handle to a running API server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }
}

/// Start the API server on `addr`.
///
/// Port 0 picks an ephemeral port; the bound address is reported on the
/// returned handle. The axum server runs in a background tokio task
/// until the shutdown channel fires.
pub async fn start_server(ctx: ApiContext, addr: SocketAddr) -> Result<ApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind API server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = service_router(ctx);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;

    use crate::history::HistoryStore;
    use crate::provider::LlmGateway;

    fn test_ctx() -> ApiContext {
        ApiContext::new(
            Arc::new(LlmGateway::unconfigured("sonar-pro")),
            Arc::new(HistoryStore::new()),
        )
    }

    fn localhost() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let mut server = start_server(test_ctx(), localhost())
            .await
            .expect("server should start");

        assert!(server.port() > 0);

        let url = format!("http://127.0.0.1:{}/", server.port());
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["configured"], false);

        server.shutdown();
        // Give server time to stop
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn server_serves_api_routes() {
        let mut server = start_server(test_ctx(), localhost())
            .await
            .expect("server should start");
        let port = server.port();

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/api/history"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert!(json["items"].as_array().unwrap().is_empty());

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/nonexistent"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_server(test_ctx(), localhost())
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown(); // Second call should be safe
    }
}
