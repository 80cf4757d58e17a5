// ABOUTME: Main library entry point for the Hevy MCP server
// ABOUTME: Exposes Hevy workouts, routines, templates, and folders as MCP tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hevy MCP Server
//!
//! A single-user Model Context Protocol (MCP) server in front of the Hevy
//! fitness tracking API. Seventeen tools cover workouts, routines, exercise
//! templates, exercise history, and routine folders.
//!
//! ## Architecture
//!
//! - **Tools**: validation, payload transformation, dispatch, formatting,
//!   and error classification for every tool call
//! - **Providers**: the `HevyApi` trait and its `reqwest` client
//! - **MCP**: catalog, JSON-RPC request processing, and transports
//! - **Routes**: the `axum` HTTP surface (`/mcp`, `/health`, `/stats`)
//! - **Config**: environment-driven settings read once at startup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hevy_mcp_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Hevy MCP Server configured on port {}", config.http.port);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Error types shared with `hevy-core`
pub mod errors {
    pub use hevy_core::errors::*;
}

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// MCP catalog, request processing, and transports
pub mod mcp;

/// Hevy data models and payloads
pub mod models;

/// Hevy API trait and HTTP client
pub mod providers;

/// HTTP routes
#[cfg(feature = "transport-http")]
pub mod routes;

/// Tool pipeline
pub mod tools;

/// Shared helpers
pub mod utils;
