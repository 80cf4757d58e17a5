// ABOUTME: Closed failure set for tool dispatch and the classifier that renders it
// ABOUTME: Every failure path ends as a single-block tool response flagged isError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Error Types
//!
//! Each pipeline stage returns its own error type; they meet in
//! [`ToolFailure`], and [`classify`] turns any variant into a
//! [`ToolResponse`] without further failure.
//!
//! | Variant        | Message                                       |
//! |----------------|-----------------------------------------------|
//! | `Validation`   | `Validation error: <message>`                 |
//! | `Remote`       | `Hevy API error (<status>): <message>[ hint]` |
//! |                | `Hevy API request failed: <message>`          |
//! | `UnknownTool`  | `Unknown tool: <name>`                        |
//! | `Unclassified` | `Error: <message>`                            |

use crate::mcp::schema::ToolResponse;
use hevy_core::errors::{ErrorCode, ProviderError, ValidationError};

/// Any failure that can stop a tool call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolFailure {
    /// Arguments rejected before any remote call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote collaborator failed
    #[error(transparent)]
    Remote(#[from] ProviderError),

    /// Name not in the routing table
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Anything else, message preserved
    #[error("{0}")]
    Unclassified(String),
}

impl ToolFailure {
    /// Wrap an arbitrary error, keeping its message
    pub fn unclassified(error: impl std::fmt::Display) -> Self {
        Self::Unclassified(error.to_string())
    }

    /// Unified error code, for log lines
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation(error) => ErrorCode::from(error.kind),
            Self::Remote(error) => error.error_code(),
            Self::UnknownTool(_) => ErrorCode::ResourceNotFound,
            Self::Unclassified(_) => ErrorCode::InternalError,
        }
    }
}

impl From<serde_json::Error> for ToolFailure {
    fn from(error: serde_json::Error) -> Self {
        Self::unclassified(error)
    }
}

/// Render a failure as a tool response
#[must_use]
pub fn classify(failure: &ToolFailure) -> ToolResponse {
    ToolResponse::error(failure_message(failure))
}

/// The single text line shown to the caller
#[must_use]
pub fn failure_message(failure: &ToolFailure) -> String {
    match failure {
        ToolFailure::Validation(error) => format!("Validation error: {error}"),
        ToolFailure::Remote(error) => remote_message(error),
        ToolFailure::UnknownTool(name) => format!("Unknown tool: {name}"),
        ToolFailure::Unclassified(message) => format!("Error: {message}"),
    }
}

fn remote_message(error: &ProviderError) -> String {
    let Some(status) = error.status() else {
        return format!("Hevy API request failed: {error}");
    };
    match status_hint(status) {
        Some(hint) => format!("Hevy API error ({status}): {error}. {hint}"),
        None => format!("Hevy API error ({status}): {error}"),
    }
}

const fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        401 | 403 => Some("Check that HEVY_API_KEY is valid and has API access."),
        404 => Some("The requested resource was not found."),
        429 => Some("Rate limited by Hevy, try again later."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_text(response: &ToolResponse) -> &str {
        assert!(response.is_error);
        let texts = response.texts();
        assert_eq!(texts.len(), 1);
        texts[0]
    }

    #[test]
    fn test_validation_message() {
        let failure = ToolFailure::from(ValidationError::out_of_range(
            "page_size",
            "page_size must be between 1 and 10",
        ));
        let response = classify(&failure);
        assert_eq!(
            single_text(&response),
            "Validation error: page_size must be between 1 and 10"
        );
        assert_eq!(failure.error_code(), ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_remote_messages() {
        let not_found = ToolFailure::from(ProviderError::Api {
            status: 404,
            message: "Workout not found".to_owned(),
        });
        assert_eq!(
            single_text(&classify(&not_found)),
            "Hevy API error (404): Workout not found. The requested resource was not found."
        );

        let unauthorized = ToolFailure::from(ProviderError::Api {
            status: 401,
            message: "Invalid api-key".to_owned(),
        });
        assert!(single_text(&classify(&unauthorized)).contains("HEVY_API_KEY"));

        let server = ToolFailure::from(ProviderError::Api {
            status: 500,
            message: "boom".to_owned(),
        });
        assert_eq!(single_text(&classify(&server)), "Hevy API error (500): boom");

        let network = ToolFailure::from(ProviderError::Network("connection refused".to_owned()));
        assert_eq!(
            single_text(&classify(&network)),
            "Hevy API request failed: connection refused"
        );
        assert_eq!(network.error_code(), ErrorCode::ExternalServiceUnavailable);
    }

    #[test]
    fn test_unknown_and_unclassified() {
        assert_eq!(
            single_text(&classify(&ToolFailure::UnknownTool("delete_everything".to_owned()))),
            "Unknown tool: delete_everything"
        );
        assert_eq!(
            single_text(&classify(&ToolFailure::unclassified("disk on fire"))),
            "Error: disk on fire"
        );
    }
}
