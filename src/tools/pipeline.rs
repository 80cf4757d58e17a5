// ABOUTME: The validate, transform, invoke, format capability every tool implements
// ABOUTME: run_pipeline composes the four stages without letting a failure escape untyped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool pipeline
//!
//! Each tool is a zero-sized type implementing [`ToolPipeline`]. The
//! associated types make the request that leaves validation, the payload
//! that leaves transformation, and the remote output distinct per tool.
//!
//! ```text
//! ToolArguments ─validate─▶ Request ─transform─▶ Payload ─invoke─▶ Output ─format─▶ ToolResponse
//!                   │                                       │
//!                   └──────────── ToolFailure ◀─────────────┘
//! ```

use super::errors::ToolFailure;
use super::registry::ToolId;
use super::validation::ToolArguments;
use crate::mcp::schema::ToolResponse;
use crate::providers::{HevyApi, ProviderResult};
use async_trait::async_trait;
use hevy_core::errors::ValidationError;
use tracing::debug;

/// One tool's four stages
#[async_trait]
pub trait ToolPipeline: Send + Sync {
    /// Typed arguments after validation
    type Request: Send + Sync;
    /// What the remote call consumes
    type Payload: Send;
    /// What the remote call returns
    type Output: Send;

    /// Identifier this pipeline serves
    fn id(&self) -> ToolId;

    /// Check raw arguments; never touches the network
    ///
    /// # Errors
    ///
    /// Returns the first violated rule
    fn validate(&self, args: &ToolArguments) -> Result<Self::Request, ValidationError>;

    /// Reshape the validated request for the remote API
    fn transform(&self, request: &Self::Request) -> Self::Payload;

    /// Call the remote collaborator
    async fn invoke(&self, api: &dyn HevyApi, payload: Self::Payload)
        -> ProviderResult<Self::Output>;

    /// Render the remote output
    ///
    /// # Errors
    ///
    /// Returns an unclassified failure if the output cannot be serialized
    fn format(
        &self,
        request: &Self::Request,
        output: &Self::Output,
    ) -> Result<ToolResponse, ToolFailure>;
}

/// Run all four stages, stopping at the first failure
///
/// # Errors
///
/// Returns the failure of whichever stage stopped the run
pub async fn run_pipeline<P: ToolPipeline>(
    tool: &P,
    api: &dyn HevyApi,
    args: &ToolArguments,
) -> Result<ToolResponse, ToolFailure> {
    let request = tool.validate(args)?;
    debug!(tool = %tool.id(), "Arguments validated");
    let payload = tool.transform(&request);
    let output = tool.invoke(api, payload).await?;
    tool.format(&request, &output)
}
