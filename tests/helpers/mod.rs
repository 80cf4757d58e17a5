// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the recording Hevy API mock, axum request helpers, and server fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod mock_hevy_api;

use hevy_mcp_server::config::ServerConfig;
use hevy_mcp_server::mcp::ServerResources;
use mock_hevy_api::MockHevyApi;
use std::sync::Arc;

/// Configuration that never touches the process environment
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "HEVY_API_KEY" => Some("test-api-key".to_owned()),
        "HEVY_API_BASE_URL" => Some("http://127.0.0.1:9".to_owned()),
        "ENVIRONMENT" => Some("testing".to_owned()),
        _ => None,
    })
    .expect("test configuration must be valid")
}

/// Server resources around a shared mock
pub fn resources_with(mock: &Arc<MockHevyApi>) -> Arc<ServerResources> {
    let api: Arc<dyn hevy_mcp_server::providers::HevyApi> = mock.clone();
    Arc::new(ServerResources::new(Arc::new(test_config()), api))
}
