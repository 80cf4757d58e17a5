// ABOUTME: Routes a tool name and raw arguments to the matching pipeline
// ABOUTME: Always answers with a ToolResponse; failures go through the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::{classify, ToolFailure};
use super::implementations::exercise_templates::{
    CreateExerciseTemplateTool, GetExerciseHistoryTool, GetExerciseTemplateTool,
    GetExerciseTemplatesTool,
};
use super::implementations::routine_folders::{
    CreateRoutineFolderTool, GetRoutineFolderTool, GetRoutineFoldersTool,
};
use super::implementations::routines::{
    CreateRoutineTool, GetRoutineTool, GetRoutinesTool, UpdateRoutineTool,
};
use super::implementations::workouts::{
    CreateWorkoutTool, GetWorkoutEventsTool, GetWorkoutTool, GetWorkoutsCountTool,
    GetWorkoutsTool, UpdateWorkoutTool,
};
use super::pipeline::run_pipeline;
use super::registry::ToolId;
use super::validation::ToolArguments;
use crate::logging::AppLogger;
use crate::mcp::schema::ToolResponse;
use crate::providers::HevyApi;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info_span, warn, Instrument};

/// Entry point for `tools/call`
#[derive(Clone)]
pub struct ToolDispatcher {
    api: Arc<dyn HevyApi>,
}

impl ToolDispatcher {
    /// Dispatcher over a remote collaborator
    #[must_use]
    pub fn new(api: Arc<dyn HevyApi>) -> Self {
        Self { api }
    }

    /// Run one tool call; never fails
    pub async fn dispatch(&self, name: &str, arguments: Option<Value>) -> ToolResponse {
        let span = info_span!("tool_call", tool = %name);
        let started = Instant::now();

        let outcome = self.execute(name, arguments).instrument(span.clone()).await;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let _entered = span.enter();
        AppLogger::log_mcp_tool_call(name, outcome.is_ok(), duration_ms);
        outcome.unwrap_or_else(|failure| {
            warn!(
                error.code = ?failure.error_code(),
                error.message = %failure,
                "Tool call failed"
            );
            classify(&failure)
        })
    }

    async fn execute(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolResponse, ToolFailure> {
        let tool =
            ToolId::from_name(name).ok_or_else(|| ToolFailure::UnknownTool(name.to_owned()))?;
        debug!(mutation = tool.is_mutation(), "Routing tool call");
        let args = ToolArguments::from_value(arguments)?;
        execute_tool(tool, self.api.as_ref(), &args).await
    }
}

/// Exhaustive routing table
async fn execute_tool(
    tool: ToolId,
    api: &dyn HevyApi,
    args: &ToolArguments,
) -> Result<ToolResponse, ToolFailure> {
    match tool {
        ToolId::GetWorkouts => run_pipeline(&GetWorkoutsTool, api, args).await,
        ToolId::GetWorkout => run_pipeline(&GetWorkoutTool, api, args).await,
        ToolId::CreateWorkout => run_pipeline(&CreateWorkoutTool, api, args).await,
        ToolId::UpdateWorkout => run_pipeline(&UpdateWorkoutTool, api, args).await,
        ToolId::GetWorkoutsCount => run_pipeline(&GetWorkoutsCountTool, api, args).await,
        ToolId::GetWorkoutEvents => run_pipeline(&GetWorkoutEventsTool, api, args).await,
        ToolId::GetRoutines => run_pipeline(&GetRoutinesTool, api, args).await,
        ToolId::GetRoutine => run_pipeline(&GetRoutineTool, api, args).await,
        ToolId::CreateRoutine => run_pipeline(&CreateRoutineTool, api, args).await,
        ToolId::UpdateRoutine => run_pipeline(&UpdateRoutineTool, api, args).await,
        ToolId::GetExerciseTemplates => run_pipeline(&GetExerciseTemplatesTool, api, args).await,
        ToolId::GetExerciseTemplate => run_pipeline(&GetExerciseTemplateTool, api, args).await,
        ToolId::CreateExerciseTemplate => {
            run_pipeline(&CreateExerciseTemplateTool, api, args).await
        }
        ToolId::GetExerciseHistory => run_pipeline(&GetExerciseHistoryTool, api, args).await,
        ToolId::GetRoutineFolders => run_pipeline(&GetRoutineFoldersTool, api, args).await,
        ToolId::GetRoutineFolder => run_pipeline(&GetRoutineFolderTool, api, args).await,
        ToolId::CreateRoutineFolder => run_pipeline(&CreateRoutineFolderTool, api, args).await,
    }
}
