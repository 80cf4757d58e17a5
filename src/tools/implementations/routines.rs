// ABOUTME: Routine tools: list, fetch, create, and update workout routines
// ABOUTME: Routine bodies share set rules with workouts but carry rep ranges instead of RPE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use hevy_core::constants::pagination::ROUTINES;
use hevy_core::errors::ValidationError;

use crate::mcp::schema::ToolResponse;
use crate::models::{PageQuery, Routine, RoutineDraft, RoutinePayload, RoutinesPage};
use crate::providers::{HevyApi, ProviderResult};
use crate::tools::errors::ToolFailure;
use crate::tools::formatting::{self, Saved};
use crate::tools::pipeline::ToolPipeline;
use crate::tools::registry::ToolId;
use crate::tools::transforms;
use crate::tools::validation::{self, ToolArguments};

/// `get_routines`
pub struct GetRoutinesTool;

#[async_trait]
impl ToolPipeline for GetRoutinesTool {
    type Request = PageQuery;
    type Payload = PageQuery;
    type Output = RoutinesPage;

    fn id(&self) -> ToolId {
        ToolId::GetRoutines
    }

    fn validate(&self, args: &ToolArguments) -> Result<PageQuery, ValidationError> {
        validation::validate_pagination(args, ROUTINES)
    }

    fn transform(&self, request: &PageQuery) -> PageQuery {
        *request
    }

    async fn invoke(&self, api: &dyn HevyApi, query: PageQuery) -> ProviderResult<RoutinesPage> {
        api.get_routines(query).await
    }

    fn format(
        &self,
        request: &PageQuery,
        output: &RoutinesPage,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::routines_page(output, *request)
    }
}

/// `get_routine`
pub struct GetRoutineTool;

#[async_trait]
impl ToolPipeline for GetRoutineTool {
    type Request = String;
    type Payload = String;
    type Output = Routine;

    fn id(&self) -> ToolId {
        ToolId::GetRoutine
    }

    fn validate(&self, args: &ToolArguments) -> Result<String, ValidationError> {
        validation::validate_id(args, "routine_id")
    }

    fn transform(&self, request: &String) -> String {
        request.clone()
    }

    async fn invoke(&self, api: &dyn HevyApi, routine_id: String) -> ProviderResult<Routine> {
        api.get_routine(&routine_id).await
    }

    fn format(&self, _request: &String, output: &Routine) -> Result<ToolResponse, ToolFailure> {
        formatting::routine_detail(output)
    }
}

/// `create_routine`
pub struct CreateRoutineTool;

#[async_trait]
impl ToolPipeline for CreateRoutineTool {
    type Request = RoutineDraft;
    type Payload = RoutinePayload;
    type Output = Routine;

    fn id(&self) -> ToolId {
        ToolId::CreateRoutine
    }

    fn validate(&self, args: &ToolArguments) -> Result<RoutineDraft, ValidationError> {
        validation::validate_routine_draft(args)
    }

    fn transform(&self, draft: &RoutineDraft) -> RoutinePayload {
        transforms::routine_payload(draft.clone())
    }

    async fn invoke(&self, api: &dyn HevyApi, payload: RoutinePayload) -> ProviderResult<Routine> {
        api.create_routine(&payload).await
    }

    fn format(&self, draft: &RoutineDraft, output: &Routine) -> Result<ToolResponse, ToolFailure> {
        formatting::routine_saved(output, Saved::Created, &draft.title)
    }
}

/// Validated `update_routine` arguments
#[derive(Debug, Clone)]
pub struct RoutineUpdate {
    /// Routine to replace
    pub routine_id: String,
    /// Replacement content
    pub draft: RoutineDraft,
}

/// `update_routine`
pub struct UpdateRoutineTool;

#[async_trait]
impl ToolPipeline for UpdateRoutineTool {
    type Request = RoutineUpdate;
    type Payload = (String, RoutinePayload);
    type Output = Routine;

    fn id(&self) -> ToolId {
        ToolId::UpdateRoutine
    }

    fn validate(&self, args: &ToolArguments) -> Result<RoutineUpdate, ValidationError> {
        Ok(RoutineUpdate {
            routine_id: validation::validate_id(args, "routine_id")?,
            draft: validation::validate_routine_draft(args)?,
        })
    }

    fn transform(&self, update: &RoutineUpdate) -> (String, RoutinePayload) {
        (
            update.routine_id.clone(),
            transforms::routine_payload(update.draft.clone()),
        )
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        payload: (String, RoutinePayload),
    ) -> ProviderResult<Routine> {
        let (routine_id, body) = payload;
        api.update_routine(&routine_id, &body).await
    }

    fn format(
        &self,
        update: &RoutineUpdate,
        output: &Routine,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::routine_saved(output, Saved::Updated, &update.draft.title)
    }
}
