//! HTTP surface of the clicker.
//!
//! ```text
//! GET    /                - control panel
//! POST   /api/start       - start clicking with {mode, min_interval, max_interval}
//! POST   /api/stop        - stop clicking
//! GET    /api/status      - running flag, log size and active interval
//! GET    /api/log         - click timestamps
//! DELETE /api/log         - clear the click log
//! POST   /api/test_click  - one manual click
//! ```

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::click_log::ClickLogEntry;
use crate::clicker::{Clicker, ClickerStatus};
use crate::interval::IntervalConfig;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Body of every mutating endpoint. Rejections still answer 200 with `status: "error"`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub status: ActionStatus,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Json<Self> {
        Json(Self { status: ActionStatus::Success, message: message.into() })
    }

    fn error(message: impl Into<String>) -> Json<Self> {
        Json(Self { status: ActionStatus::Error, message: message.into() })
    }
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub log: Vec<ClickLogEntry>,
}

pub fn router(clicker: Arc<Clicker>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/start", post(start_clicking))
        .route("/api/stop", post(stop_clicking))
        .route("/api/status", get(get_status))
        .route("/api/log", get(get_log).delete(clear_log))
        .route("/api/test_click", post(test_click))
        .layer(TraceLayer::new_for_http())
        .with_state(clicker)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn start_clicking(
    State(clicker): State<Arc<Clicker>>,
    Json(config): Json<IntervalConfig>,
) -> Json<ActionResponse> {
    match clicker.start(config) {
        Ok(()) => ActionResponse::success("Clicker started."),
        Err(e) => ActionResponse::error(e.to_string()),
    }
}

async fn stop_clicking(State(clicker): State<Arc<Clicker>>) -> Json<ActionResponse> {
    match clicker.stop() {
        Ok(()) => ActionResponse::success("Clicker stopped."),
        Err(e) => ActionResponse::error(e.to_string()),
    }
}

async fn get_status(State(clicker): State<Arc<Clicker>>) -> Json<ClickerStatus> {
    Json(clicker.status())
}

async fn get_log(State(clicker): State<Arc<Clicker>>) -> Json<LogResponse> {
    Json(LogResponse { log: clicker.read_log() })
}

async fn test_click(State(clicker): State<Arc<Clicker>>) -> Json<ActionResponse> {
    // Input injection blocks; keep it off the async workers
    match tokio::task::spawn_blocking(move || clicker.test_click()).await {
        Ok(Ok(())) => ActionResponse::success("Test click performed."),
        Ok(Err(e)) => {
            error!("Test click failed: {e}");
            ActionResponse::error(e.to_string())
        }
        Err(e) => {
            error!("Test click task failed: {e}");
            ActionResponse::error(e.to_string())
        }
    }
}

async fn clear_log(State(clicker): State<Arc<Clicker>>) -> Json<ActionResponse> {
    clicker.clear_log();
    ActionResponse::success("Log cleared.")
}

/// Listen address of the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8000 }
    }
}

/// Serves the API until Ctrl-C.
pub async fn serve(config: &ServerConfig, clicker: Arc<Clicker>) -> anyhow::Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(clicker))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_config_new() {
        let config = ServerConfig::new("127.0.0.1", 3000);
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_action_response_serialize() {
        let Json(resp) = ActionResponse::error("Clicker is not running.");
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Clicker is not running.");
    }

    #[test]
    fn test_index_is_embedded() {
        assert!(INDEX_HTML.contains("/api/start"));
    }
}
