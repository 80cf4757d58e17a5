// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads the Hevy credential, HTTP bind address, timeouts, and protocol version from env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration, read once at startup

use anyhow::{bail, Context, Result};
use hevy_core::constants::{hevy_api, ports, protocol};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;
use url::Url;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

/// Hevy API client settings
#[derive(Clone, PartialEq, Eq)]
pub struct HevyApiConfig {
    /// Credential sent in the `api-key` header
    pub api_key: String,
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for HevyApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HevyApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// MCP protocol identification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Version answered from `initialize`
    pub mcp_version: String,
    /// `serverInfo.name`
    pub server_name: String,
    /// `serverInfo.version`
    pub server_version: String,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// HTTP listener
    pub http: HttpConfig,
    /// Hevy API client
    pub hevy_api: HevyApiConfig,
    /// MCP protocol identification
    pub protocol: ProtocolConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HEVY_API_KEY` is missing or any value fails to parse or validate
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if `HEVY_API_KEY` is missing or any value fails to parse or validate
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let api_key = lookup("HEVY_API_KEY")
            .context("HEVY_API_KEY environment variable is required")?;

        let port = match lookup("HTTP_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid HTTP_PORT/PORT value: {raw}"))?,
            None => ports::DEFAULT_HTTP_PORT,
        };

        let config = Self {
            environment: Environment::from_str_or_default(&var_or("ENVIRONMENT", "development")),
            http: HttpConfig {
                host: var_or("HOST", "0.0.0.0"),
                port,
            },
            hevy_api: HevyApiConfig {
                api_key,
                base_url: var_or("HEVY_API_BASE_URL", hevy_api::DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                timeout_secs: var_or(
                    "HEVY_API_TIMEOUT_SECS",
                    &hevy_api::DEFAULT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid HEVY_API_TIMEOUT_SECS value")?,
                connect_timeout_secs: var_or(
                    "HEVY_API_CONNECT_TIMEOUT_SECS",
                    &hevy_api::DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid HEVY_API_CONNECT_TIMEOUT_SECS value")?,
            },
            protocol: ProtocolConfig {
                mcp_version: var_or(
                    "MCP_PROTOCOL_VERSION",
                    protocol::DEFAULT_MCP_PROTOCOL_VERSION,
                ),
                server_name: protocol::SERVER_NAME.to_owned(),
                server_version: env!("CARGO_PKG_VERSION").to_owned(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.hevy_api.api_key.trim().is_empty() {
            bail!("HEVY_API_KEY must not be empty");
        }
        if self.http.port == 0 {
            bail!("HTTP port must be greater than 0");
        }
        if self.hevy_api.timeout_secs == 0 || self.hevy_api.connect_timeout_secs == 0 {
            bail!("Hevy API timeouts must be greater than 0 seconds");
        }
        Url::parse(&self.hevy_api.base_url)
            .with_context(|| format!("Invalid HEVY_API_BASE_URL: {}", self.hevy_api.base_url))?;
        Ok(())
    }

    /// Override the HTTP bind settings from the command line
    #[must_use]
    pub fn with_http_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Hevy MCP Server Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}:{}\n\
             - Hevy API: {}\n\
             - API Key: [REDACTED, {} chars]\n\
             - Timeouts: {}s request, {}s connect\n\
             - Protocol Version: {}",
            self.environment,
            self.http.host,
            self.http.port,
            self.hevy_api.base_url,
            self.hevy_api.api_key.len(),
            self.hevy_api.timeout_secs,
            self.hevy_api.connect_timeout_secs,
            self.protocol.mcp_version
        )
    }
}
