// ABOUTME: Hevy tool layer: validation, transformation, dispatch, formatting, and error classification
// ABOUTME: Turns a tools/call name and raw arguments into a ToolResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! A call flows `ToolDispatcher` → `ToolPipeline::validate` →
//! `transform` → `invoke` (the only network step) → `format`. Any failure
//! short-circuits into [`errors::classify`].
//!
//! ## Modules
//!
//! - `registry` - `ToolId`, the closed set of tool names
//! - `validation` - argument rules; no network access
//! - `transforms` - drafts to Hevy payloads
//! - `formatting` - success responses
//! - `errors` - `ToolFailure` and the classifier
//! - `pipeline` - the four-stage trait
//! - `implementations` - one pipeline per tool
//! - `dispatcher` - name lookup and routing

/// Name lookup and routing
pub mod dispatcher;
/// Failure set and classifier
pub mod errors;
/// Success response formatting
pub mod formatting;
/// Per-tool pipelines
pub mod implementations;
/// Four-stage tool trait
pub mod pipeline;
/// Tool identifiers
pub mod registry;
/// Draft to payload mapping
pub mod transforms;
/// Argument validation
pub mod validation;

pub use dispatcher::ToolDispatcher;
pub use errors::{classify, ToolFailure};
pub use pipeline::{run_pipeline, ToolPipeline};
pub use registry::ToolId;
pub use validation::ToolArguments;
