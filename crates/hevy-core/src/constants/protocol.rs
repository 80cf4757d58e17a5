// ABOUTME: MCP protocol constants for version and server identification
// ABOUTME: Pure compile-time constants without runtime configuration dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Protocol constants for MCP and JSON-RPC
//!
//! The negotiated MCP version is runtime-configurable and lives in the main
//! crate's `ServerConfig`; this module only carries its default.

/// JSON-RPC version (standard, not configurable)
pub const JSONRPC_VERSION: &str = "2.0";

/// Name advertised in `serverInfo`
pub const SERVER_NAME: &str = "hevy-mcp-server";

/// MCP protocol version used when `MCP_PROTOCOL_VERSION` is unset
pub const DEFAULT_MCP_PROTOCOL_VERSION: &str = "2025-06-18";

/// Instructions returned from `initialize`
pub const SERVER_INSTRUCTIONS: &str = "Tools for reading and logging Hevy workouts, routines, \
routine folders, and exercise templates. List tools are paginated; page_size caps differ per resource.";
