// ABOUTME: Centralized resource container for dependency injection in the MCP server
// ABOUTME: Holds the configuration, the Hevy API collaborator, and the tool dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc` by every transport.
//! Tests inject a mock `HevyApi` through [`ServerResources::new`].

use crate::config::ServerConfig;
use crate::providers::{HevyApi, HevyClient};
use crate::tools::ToolDispatcher;
use hevy_core::errors::AppResult;
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Startup configuration
    pub config: Arc<ServerConfig>,
    /// Remote collaborator
    pub hevy_api: Arc<dyn HevyApi>,
    /// `tools/call` entry point
    pub dispatcher: ToolDispatcher,
}

impl ServerResources {
    /// Wire resources around an existing collaborator
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, hevy_api: Arc<dyn HevyApi>) -> Self {
        let dispatcher = ToolDispatcher::new(Arc::clone(&hevy_api));
        Self {
            config,
            hevy_api,
            dispatcher,
        }
    }

    /// Wire resources around the HTTP client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the Hevy API base URL is unusable
    pub fn from_config(config: Arc<ServerConfig>) -> AppResult<Self> {
        let client = HevyClient::new(&config.hevy_api)?;
        Ok(Self::new(config, Arc::new(client)))
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
