// ABOUTME: MCP request processing and protocol handling for the Hevy server
// ABOUTME: Validates, routes, and answers JSON-RPC requests; tools/call goes to the dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::resources::ServerResources;
use super::schema::{get_tools, InitializeResponse, ToolCall};
use crate::jsonrpc::{error_codes, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use hevy_core::constants::protocol::JSONRPC_VERSION;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Processes MCP protocol requests with validation, routing, and execution
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle an MCP request; notifications yield `None`
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();

        Self::log_request(&request);

        if request.is_notification() {
            Self::handle_notification(&request);
            Self::log_completion("notification", start_time);
            return None;
        }

        let response = match self.process_request(&request).await {
            Ok(result) => JsonRpcResponse::success(request.id.clone(), result),
            Err(e) => Self::create_error_response(&request, e),
        };

        Self::log_completion("request", start_time);
        Some(response)
    }

    fn create_error_response(request: &JsonRpcRequest, e: JsonRpcError) -> JsonRpcResponse {
        error!(
            code = e.code,
            method = %request.method,
            id = ?request.id,
            "Failed to process MCP request: {}",
            e.message
        );

        JsonRpcResponse {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(e),
            id: request.id.clone(),
        }
    }

    /// Route a validated request to its handler
    async fn process_request(&self, request: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        Self::validate_request(request)?;

        match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "ping" => Ok(Self::handle_ping()),
            "tools/list" => Ok(Self::handle_tools_list()),
            "tools/call" => self.handle_tools_call(request).await,
            method => Err(Self::handle_unknown_method(method)),
        }
    }

    /// Validate JSON-RPC envelope fields
    fn validate_request(request: &JsonRpcRequest) -> Result<(), JsonRpcError> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(JsonRpcError::new(
                error_codes::INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{JSONRPC_VERSION}'",
                    request.jsonrpc
                ),
            ));
        }

        if request.method.is_empty() {
            return Err(JsonRpcError::new(
                error_codes::INVALID_REQUEST,
                "Missing method",
            ));
        }

        Ok(())
    }

    fn handle_initialize(&self) -> Result<Value, JsonRpcError> {
        debug!("Handling initialize request");

        let protocol = &self.resources.config.protocol;
        let response = InitializeResponse::new(
            protocol.mcp_version.clone(),
            protocol.server_name.clone(),
            protocol.server_version.clone(),
        );
        serde_json::to_value(response).map_err(|e| {
            JsonRpcError::new(
                error_codes::INTERNAL_ERROR,
                format!("Failed to serialize initialize result: {e}"),
            )
        })
    }

    fn handle_ping() -> Value {
        debug!("Handling ping request");
        json!({})
    }

    fn handle_tools_list() -> Value {
        debug!("Handling tools/list request");
        json!({ "tools": get_tools() })
    }

    /// `tools/call`: tool failures come back as results with `isError`
    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        debug!("Handling tools/call request");

        let params = request.params.clone().ok_or_else(|| {
            JsonRpcError::new(
                error_codes::INVALID_PARAMS,
                "Missing parameters for tools/call",
            )
        })?;
        let call: ToolCall = serde_json::from_value(params).map_err(|e| {
            JsonRpcError::new(
                error_codes::INVALID_PARAMS,
                format!("Invalid tools/call parameters: {e}"),
            )
        })?;

        let response = self
            .resources
            .dispatcher
            .dispatch(&call.name, call.arguments)
            .await;

        serde_json::to_value(response).map_err(|e| {
            JsonRpcError::new(
                error_codes::INTERNAL_ERROR,
                format!("Failed to serialize tool result: {e}"),
            )
        })
    }

    fn handle_unknown_method(method: &str) -> JsonRpcError {
        warn!("Unknown MCP method: {method}");
        JsonRpcError::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Unknown method: {method}"),
        )
    }

    fn handle_notification(request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => debug!("Client initialized"),
            "notifications/cancelled" => debug!("Request cancelled notification received"),
            method => debug!("Unhandled notification: {method}"),
        }
    }

    /// Log incoming request with params truncated
    fn log_request(request: &JsonRpcRequest) {
        debug!(
            mcp_method = %request.method,
            mcp_id = ?request.id,
            mcp_params_preview = ?request.params.as_ref().map(|p| truncate(&p.to_string(), 100)),
            "Received MCP request"
        );
    }

    /// Log request completion with timing
    fn log_completion(request_type: &str, start_time: Instant) {
        let duration = start_time.elapsed();
        debug!(
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(0),
            "Completed MCP {request_type} processing"
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...[truncated]", &text[..cut]),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 100), "short");
        let long = "é".repeat(150);
        let cut = truncate(&long, 100);
        assert!(cut.ends_with("...[truncated]"));
        assert_eq!(cut.chars().filter(|c| *c == 'é').count(), 100);
    }
}
