// ABOUTME: Model Context Protocol (MCP) implementation for AI assistant integration
// ABOUTME: Single-user MCP server exposing the Hevy tool catalog over HTTP and stdio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC method routing
pub mod mcp_request_processor;
/// Shared dependency container
pub mod resources;
/// Catalog and protocol payload types
pub mod schema;
/// Transport startup and the stdio loop
pub mod server_lifecycle;

pub use mcp_request_processor::McpRequestProcessor;
pub use resources::ServerResources;
pub use server_lifecycle::ServerLifecycle;
