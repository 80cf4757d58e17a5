// ABOUTME: Health check and stats route handlers for service monitoring
// ABOUTME: Reports liveness, version, and the single-user deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use hevy_core::constants::routes;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "mode": "single-user",
                "transport": "streamable-http",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn stats_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "mode": "single-user",
                "users": 1,
                "message": "Running in single-user mode"
            }))
        }

        Router::new()
            .route(routes::HEALTH, get(health_handler))
            .route(routes::STATS, get(stats_handler))
    }
}
