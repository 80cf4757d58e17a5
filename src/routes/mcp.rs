// ABOUTME: Streamable HTTP endpoint for MCP in stateless single-user mode
// ABOUTME: POST carries one JSON-RPC message; GET and DELETE are rejected since there are no sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP protocol route

use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::{McpRequestProcessor, ServerResources};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use hevy_core::constants::errors::{MSG_METHOD_NOT_ALLOWED, MSG_PARSE_ERROR};
use hevy_core::constants::routes;
use std::sync::Arc;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

/// Correlation header, honored when the client sends one
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// MCP routes implementation
pub struct McpRoutes;

impl McpRoutes {
    /// `/mcp` with POST handling and 405 for GET/DELETE
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::MCP,
                post(Self::handle_message)
                    .get(Self::method_not_allowed)
                    .delete(Self::method_not_allowed),
            )
            .with_state(resources)
    }

    async fn handle_message(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let request_id = Self::request_id(&headers);
        let span = info_span!("mcp_request", request_id = %request_id);

        let mut response = Self::process_body(resources, &body).instrument(span).await;
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }

    async fn process_body(resources: Arc<ServerResources>, body: &[u8]) -> Response {
        let request = match serde_json::from_slice::<JsonRpcRequest>(body) {
            Ok(request) => request,
            Err(e) => {
                warn!("Invalid JSON-RPC body on /mcp: {e}");
                let response =
                    JsonRpcResponse::error(None, error_codes::PARSE_ERROR, MSG_PARSE_ERROR);
                return (StatusCode::BAD_REQUEST, Json(response)).into_response();
            }
        };

        let processor = McpRequestProcessor::new(resources);
        match processor.handle_request(request).await {
            Some(response) => Json(response).into_response(),
            None => StatusCode::ACCEPTED.into_response(),
        }
    }

    fn request_id(headers: &HeaderMap) -> String {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map_or_else(
                || format!("req_{}", Uuid::new_v4().simple()),
                ToOwned::to_owned,
            )
    }

    async fn method_not_allowed() -> Response {
        let response =
            JsonRpcResponse::error(None, error_codes::SERVER_ERROR, MSG_METHOD_NOT_ALLOWED);
        (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            Json(response),
        )
            .into_response()
    }
}
