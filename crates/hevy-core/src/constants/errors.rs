// ABOUTME: Error code constants for JSON-RPC and MCP protocol errors
// ABOUTME: Defines standard error codes and corresponding error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error codes for JSON-RPC and MCP protocols

/// Invalid JSON was received
pub const ERROR_PARSE: i32 = -32700;

/// The JSON sent is not a valid request object
pub const ERROR_INVALID_REQUEST: i32 = -32600;

/// Method not found
pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

/// Invalid parameters
pub const ERROR_INVALID_PARAMS: i32 = -32602;

/// Internal error
pub const ERROR_INTERNAL_ERROR: i32 = -32603;

/// Implementation-defined server error (HTTP method not allowed)
pub const ERROR_SERVER: i32 = -32000;

/// Common error messages
pub const MSG_PARSE_ERROR: &str = "Parse error";
/// Invalid request message
pub const MSG_INVALID_REQUEST: &str = "Invalid Request";
/// Method not found message
pub const MSG_METHOD_NOT_FOUND: &str = "Method not found";
/// Invalid params message
pub const MSG_INVALID_PARAMS: &str = "Invalid parameters";
/// Internal error message
pub const MSG_INTERNAL_ERROR: &str = "Internal error";
/// Wrong HTTP method on the MCP endpoint
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed.";
