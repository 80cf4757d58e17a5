// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Hevy MCP Server

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, HevyApiConfig, HttpConfig, ProtocolConfig, ServerConfig};
