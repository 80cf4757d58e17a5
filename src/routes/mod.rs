// ABOUTME: Route module organization for the Hevy MCP server HTTP endpoints
// ABOUTME: Assembles the MCP, health, and stats routes with CORS and request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Hevy MCP server

/// Health check and stats routes
pub mod health;
/// Model Context Protocol (MCP) endpoint
pub mod mcp;

pub use health::HealthRoutes;
pub use mcp::McpRoutes;

use crate::mcp::ServerResources;
use axum::http::{header::CONTENT_TYPE, Method, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Complete HTTP router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(McpRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .fallback(not_found)
        .layer(setup_cors())
        .layer(TraceLayer::new_for_http())
}

/// Permissive CORS for browser-based MCP clients
fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
