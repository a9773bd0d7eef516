//! The three ways the alert tool is exposed. Each one only moves bytes;
//! all weather logic lives in `weather-alert-core`.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use clap::ValueEnum;
use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        },
    },
};
use tokio::net::TcpListener;

use crate::server::AlertServer;

pub const MCP_PATH: &str = "/mcp";
const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// MCP over stdin/stdout.
    Stdio,
    /// Stateless streamable HTTP mounted at `/mcp`.
    Http,
    /// Stateful sessions at `/mcp`, responses streamed as server-sent events.
    Sse,
}

pub async fn serve(server: AlertServer, transport: Transport, host: &str, port: u16) -> Result<()> {
    match transport {
        Transport::Stdio => serve_stdio(server).await,
        Transport::Http | Transport::Sse => serve_http(server, transport, host, port).await,
    }
}

async fn serve_stdio(server: AlertServer) -> Result<()> {
    tracing::info!("serving MCP on stdio");

    let service = server
        .serve(stdio())
        .await
        .context("Failed to start stdio transport")?;
    let reason = service
        .waiting()
        .await
        .context("stdio transport terminated abnormally")?;

    tracing::info!(?reason, "stdio session closed");
    Ok(())
}

/// HTTP app: `/health` plus the MCP service mounted at [`MCP_PATH`].
pub fn router(server: AlertServer, transport: Transport) -> Router {
    let config = StreamableHttpServerConfig {
        stateful_mode: transport == Transport::Sse,
        sse_keep_alive: Some(SSE_KEEP_ALIVE),
        ..Default::default()
    };

    let mcp = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        config,
    );

    Router::new()
        .route("/health", get(health))
        .nest_service(MCP_PATH, mcp)
}

async fn health() -> &'static str {
    "ok"
}

async fn serve_http(server: AlertServer, transport: Transport, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    tracing::info!(%addr, ?transport, "MCP endpoint at http://{addr}{MCP_PATH}");

    axum::serve(listener, router(server, transport))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C; shutting down");
        return;
    }
    tracing::info!("received shutdown signal");
}
