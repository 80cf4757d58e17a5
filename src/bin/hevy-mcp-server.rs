// ABOUTME: Server binary for the single-user Hevy MCP server
// ABOUTME: Parses CLI overrides, loads configuration, and runs the HTTP or stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Hevy MCP Server Binary
//!
//! Reads `HEVY_API_KEY` and friends from the environment and serves the Hevy
//! tool catalog over streamable HTTP (default) or stdio.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hevy_mcp_server::{
    config::ServerConfig,
    logging::{self, LogOutput},
    mcp::{ServerLifecycle, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

/// Transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// Streamable HTTP on `/mcp`
    Http,
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
}

#[derive(Parser)]
#[command(name = "hevy-mcp-server")]
#[command(about = "Hevy MCP Server - single-user MCP bridge to the Hevy fitness API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override HTTP bind address
    #[arg(long)]
    host: Option<String>,

    /// Transport to serve
    #[arg(long, value_enum, default_value_t = Transport::Http)]
    transport: Transport,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let output = match args.transport {
        Transport::Http => LogOutput::Stdout,
        Transport::Stdio => LogOutput::Stderr,
    };
    logging::init_from_env(output)?;

    let config = ServerConfig::from_env()
        .context("Failed to load configuration")?
        .with_http_overrides(args.host, args.http_port);
    config.validate()?;

    info!("Starting Hevy MCP Server (single-user mode)");
    info!("{}", config.summary());

    let resources = Arc::new(
        ServerResources::from_config(Arc::new(config))
            .context("Failed to initialize Hevy API client")?,
    );
    let lifecycle = ServerLifecycle::new(resources);

    let outcome = run(lifecycle, args.transport).await;
    if let Err(e) = &outcome {
        error!("Server error: {e:#}");
    }
    outcome
}

async fn run(lifecycle: ServerLifecycle, transport: Transport) -> Result<()> {
    match transport {
        #[cfg(feature = "transport-http")]
        Transport::Http => lifecycle.run_http_server().await,
        #[cfg(feature = "transport-stdio")]
        Transport::Stdio => lifecycle.run_stdio_transport().await,
        #[allow(unreachable_patterns)]
        other => anyhow::bail!("Transport {other:?} is not enabled in this build"),
    }
}
