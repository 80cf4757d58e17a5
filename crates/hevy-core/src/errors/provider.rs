// ABOUTME: Remote API failure type surfaced by the Hevy client
// ABOUTME: Distinguishes upstream HTTP rejections, transport failures, and undecodable bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;

/// Failure reported by the remote collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The API answered with a non-success status
    #[error("{message}")]
    Api {
        /// Upstream HTTP status
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Upstream status, when the API answered
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Map to the unified error code
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Api { status: 401 | 403, .. } => ErrorCode::ExternalAuthFailed,
            Self::Api { status: 404, .. } => ErrorCode::ResourceNotFound,
            Self::Api { status: 429, .. } => ErrorCode::ExternalRateLimited,
            Self::Api { .. } | Self::Decode(_) => ErrorCode::ExternalServiceError,
            Self::Network(_) => ErrorCode::ExternalServiceUnavailable,
        }
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::Decode(error.to_string());
        }
        match error.status() {
            Some(status) => Self::Api {
                status: status.as_u16(),
                message: error.to_string(),
            },
            None => Self::Network(error.to_string()),
        }
    }
}
