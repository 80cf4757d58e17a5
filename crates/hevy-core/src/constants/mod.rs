// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for tool names, pagination limits, and protocol identification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// JSON-RPC error codes and messages
pub mod errors;
/// Per-resource page-size limits
pub mod pagination;
/// Protocol-specific constants for MCP
pub mod protocol;
/// Tool identifiers
pub mod tools;

pub use errors::*;
pub use pagination::PageLimits;
// Note: protocol and tools are kept as modules so call sites read `tools::GET_WORKOUTS`

/// Hevy API defaults
pub mod hevy_api {
    /// Production API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.hevyapp.com";
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "api-key";
    /// Request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Connection timeout
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8787;
}

/// HTTP routes
pub mod routes {
    /// MCP endpoint
    pub const MCP: &str = "/mcp";
    /// Health route
    pub const HEALTH: &str = "/health";
    /// Stats route
    pub const STATS: &str = "/stats";
}
