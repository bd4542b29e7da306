//! Axum-based RPC server.

use crate::error::RpcError;
use crate::handlers;
use axum::routing::{get, post};
use axum::Router;
use fairdraw_session::SessionState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the RPC server.
///
/// Each entry in the registry is one independent session's record; entries
/// never share anything, so a plain mutex around the map is all the
/// coordination the API needs.
pub struct AppState {
    pub sessions: Mutex<HashMap<String, SessionState>>,
    /// Pause applied before audit responses. Presentation pacing only —
    /// it must never influence a computed outcome.
    pub audit_delay: Duration,
}

impl AppState {
    pub fn new(audit_delay: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            audit_delay,
        }
    }
}

/// The RPC server, configured with a bind address and shared state.
pub struct RpcServer {
    bind: String,
    port: u16,
    state: Arc<AppState>,
}

impl RpcServer {
    pub fn new(bind: &str, port: u16) -> Self {
        Self {
            bind: bind.to_string(),
            port,
            state: Arc::new(AppState::new(Duration::ZERO)),
        }
    }

    pub fn with_audit_delay(mut self, delay: Duration) -> Self {
        self.state = Arc::new(AppState::new(delay));
        self
    }

    /// Build the router. Exposed separately so tests can drive the API
    /// without binding a socket.
    pub fn router(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/v1/commit", post(handlers::commit))
            .route("/v1/entropy", post(handlers::entropy))
            .route("/v1/derive", post(handlers::derive))
            .route("/v1/audit", post(handlers::audit))
            .route("/v1/session/:id", get(handlers::session_state))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start serving. Runs until the process is shut down.
    pub async fn start(&self) -> Result<(), RpcError> {
        let app = Self::router(self.state.clone());
        let addr = format!("{}:{}", self.bind, self.port);
        info!("RPC server listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(format!("bind {addr}: {e}")))?;
        axum::serve(listener, app)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        Ok(())
    }
}
