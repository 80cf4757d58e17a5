// ABOUTME: Core types and constants for the Hevy MCP server
// ABOUTME: Foundation crate with error handling, tool identifiers, and pagination limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hevy Core
//!
//! Foundation crate providing shared types and constants for the Hevy MCP
//! server. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   validation and remote-provider failure types
//! - **constants**: Tool identifiers, pagination limits, and protocol constants

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
