// ABOUTME: Server lifecycle management for the HTTP and stdio transports
// ABOUTME: Binds the axum listener with graceful shutdown and runs the newline-delimited stdio loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::mcp_request_processor::McpRequestProcessor;
use super::resources::ServerResources;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use anyhow::Result;
use hevy_core::constants::errors::MSG_PARSE_ERROR;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Manages server startup and transport coordination
pub struct ServerLifecycle {
    resources: Arc<ServerResources>,
}

impl ServerLifecycle {
    /// Create a new server lifecycle manager
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Serve the HTTP router until SIGINT or SIGTERM
    ///
    /// # Errors
    /// Returns an error if the listener cannot bind or the server fails
    #[cfg(feature = "transport-http")]
    pub async fn run_http_server(self) -> Result<()> {
        use anyhow::Context;

        let http = &self.resources.config.http;
        let address = format!("{}:{}", http.host, http.port);
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;

        info!("HTTP transport listening on http://{address}");
        info!("   MCP endpoint:  POST http://{address}/mcp");
        info!("   Health check:  GET  http://{address}/health");

        let router = crate::routes::router(Arc::clone(&self.resources));
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP transport stopped");
        Ok(())
    }

    /// Run stdio transport for MCP communication
    ///
    /// # Errors
    /// Returns an error if reading stdin or writing stdout fails
    #[cfg(feature = "transport-stdio")]
    pub async fn run_stdio_transport(self) -> Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = Arc::new(Mutex::new(tokio::io::stdout()));
        info!("MCP stdio transport ready - listening on stdin/stdout");

        tokio::select! {
            result = serve_lines(&self.resources, stdin, &stdout) => result,
            () = shutdown_signal() => Ok(()),
        }
    }
}

/// Answer newline-delimited JSON-RPC messages until the reader is exhausted
///
/// # Errors
/// Returns an error if reading or writing fails
pub async fn serve_lines<R, W>(
    resources: &Arc<ServerResources>,
    reader: R,
    writer: &Arc<Mutex<W>>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let processor = McpRequestProcessor::new(Arc::clone(resources));
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => processor.handle_request(request).await,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {e}");
                Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    MSG_PARSE_ERROR,
                ))
            }
        };

        if let Some(response) = response {
            write_response(&response, writer).await?;
        }
    }

    debug!("stdin closed");
    Ok(())
}

/// Write one response line and flush
async fn write_response<W>(response: &JsonRpcResponse, writer: &Arc<Mutex<W>>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response_json = serde_json::to_string(response)?;
    debug!("Sending MCP response: {response_json}");

    let mut writer_lock = writer.lock().await;
    writer_lock.write_all(response_json.as_bytes()).await?;
    writer_lock.write_all(b"\n").await?;
    writer_lock.flush().await?;
    drop(writer_lock);

    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
