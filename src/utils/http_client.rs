// ABOUTME: Shared HTTP client construction with connection pooling and timeout configuration
// ABOUTME: Builds the reqwest client used to reach the Hevy API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HevyApiConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("hevy-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails (TLS backend unavailable).
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Create the client used for Hevy API calls
#[must_use]
pub fn api_client(config: &HevyApiConfig) -> Client {
    create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs)
}
