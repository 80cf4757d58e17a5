// ABOUTME: Workout tools: list, fetch, log, update, count, and change events
// ABOUTME: Each tool is a ToolPipeline over the Hevy workouts endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Tools
//!
//! - `GetWorkoutsTool` - paginated list, page size capped at 10
//! - `GetWorkoutTool` - one workout by id
//! - `CreateWorkoutTool` - log a workout with exercises and sets
//! - `UpdateWorkoutTool` - replace an existing workout
//! - `GetWorkoutsCountTool` - total count
//! - `GetWorkoutEventsTool` - update/delete events for syncing

use async_trait::async_trait;
use hevy_core::constants::pagination::WORKOUTS;
use hevy_core::errors::ValidationError;

use crate::mcp::schema::ToolResponse;
use crate::models::{
    EventsQuery, PageQuery, Workout, WorkoutCount, WorkoutDraft, WorkoutEventsPage,
    WorkoutPayload, WorkoutsPage,
};
use crate::providers::{HevyApi, ProviderResult};
use crate::tools::errors::ToolFailure;
use crate::tools::pipeline::ToolPipeline;
use crate::tools::registry::ToolId;
use crate::tools::validation::{self, ToolArguments};
use crate::tools::{formatting, transforms};

// ============================================================================
// GetWorkoutsTool
// ============================================================================

/// `get_workouts`
pub struct GetWorkoutsTool;

#[async_trait]
impl ToolPipeline for GetWorkoutsTool {
    type Request = PageQuery;
    type Payload = PageQuery;
    type Output = WorkoutsPage;

    fn id(&self) -> ToolId {
        ToolId::GetWorkouts
    }

    fn validate(&self, args: &ToolArguments) -> Result<PageQuery, ValidationError> {
        validation::validate_pagination(args, WORKOUTS)
    }

    fn transform(&self, request: &PageQuery) -> PageQuery {
        *request
    }

    async fn invoke(&self, api: &dyn HevyApi, query: PageQuery) -> ProviderResult<WorkoutsPage> {
        api.get_workouts(query).await
    }

    fn format(
        &self,
        request: &PageQuery,
        output: &WorkoutsPage,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::workouts_page(output, *request)
    }
}

// ============================================================================
// GetWorkoutTool
// ============================================================================

/// `get_workout`
pub struct GetWorkoutTool;

#[async_trait]
impl ToolPipeline for GetWorkoutTool {
    type Request = String;
    type Payload = String;
    type Output = Workout;

    fn id(&self) -> ToolId {
        ToolId::GetWorkout
    }

    fn validate(&self, args: &ToolArguments) -> Result<String, ValidationError> {
        validation::validate_id(args, "workout_id")
    }

    fn transform(&self, request: &String) -> String {
        request.clone()
    }

    async fn invoke(&self, api: &dyn HevyApi, workout_id: String) -> ProviderResult<Workout> {
        api.get_workout(&workout_id).await
    }

    fn format(&self, _request: &String, output: &Workout) -> Result<ToolResponse, ToolFailure> {
        formatting::workout_detail(output)
    }
}

// ============================================================================
// CreateWorkoutTool
// ============================================================================

/// `create_workout`
pub struct CreateWorkoutTool;

#[async_trait]
impl ToolPipeline for CreateWorkoutTool {
    type Request = WorkoutDraft;
    type Payload = WorkoutPayload;
    type Output = Workout;

    fn id(&self) -> ToolId {
        ToolId::CreateWorkout
    }

    fn validate(&self, args: &ToolArguments) -> Result<WorkoutDraft, ValidationError> {
        validation::validate_workout_draft(args)
    }

    fn transform(&self, draft: &WorkoutDraft) -> WorkoutPayload {
        transforms::workout_payload(draft.clone())
    }

    async fn invoke(&self, api: &dyn HevyApi, payload: WorkoutPayload) -> ProviderResult<Workout> {
        api.create_workout(&payload).await
    }

    fn format(&self, draft: &WorkoutDraft, output: &Workout) -> Result<ToolResponse, ToolFailure> {
        formatting::workout_logged(output, &draft.title, &draft.start_time)
    }
}

// ============================================================================
// UpdateWorkoutTool
// ============================================================================

/// Validated `update_workout` arguments
#[derive(Debug, Clone)]
pub struct WorkoutUpdate {
    /// Workout to replace
    pub workout_id: String,
    /// Replacement content
    pub draft: WorkoutDraft,
}

/// `update_workout`
pub struct UpdateWorkoutTool;

#[async_trait]
impl ToolPipeline for UpdateWorkoutTool {
    type Request = WorkoutUpdate;
    type Payload = (String, WorkoutPayload);
    type Output = Workout;

    fn id(&self) -> ToolId {
        ToolId::UpdateWorkout
    }

    fn validate(&self, args: &ToolArguments) -> Result<WorkoutUpdate, ValidationError> {
        Ok(WorkoutUpdate {
            workout_id: validation::validate_id(args, "workout_id")?,
            draft: validation::validate_workout_draft(args)?,
        })
    }

    fn transform(&self, update: &WorkoutUpdate) -> (String, WorkoutPayload) {
        (
            update.workout_id.clone(),
            transforms::workout_payload(update.draft.clone()),
        )
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        payload: (String, WorkoutPayload),
    ) -> ProviderResult<Workout> {
        let (workout_id, body) = payload;
        api.update_workout(&workout_id, &body).await
    }

    fn format(
        &self,
        update: &WorkoutUpdate,
        output: &Workout,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::workout_updated(output, &update.draft.title)
    }
}

// ============================================================================
// GetWorkoutsCountTool
// ============================================================================

/// `get_workouts_count`
pub struct GetWorkoutsCountTool;

#[async_trait]
impl ToolPipeline for GetWorkoutsCountTool {
    type Request = ();
    type Payload = ();
    type Output = WorkoutCount;

    fn id(&self) -> ToolId {
        ToolId::GetWorkoutsCount
    }

    fn validate(&self, _args: &ToolArguments) -> Result<(), ValidationError> {
        Ok(())
    }

    fn transform(&self, _request: &()) {}

    async fn invoke(&self, api: &dyn HevyApi, _payload: ()) -> ProviderResult<WorkoutCount> {
        api.get_workouts_count().await
    }

    fn format(&self, _request: &(), output: &WorkoutCount) -> Result<ToolResponse, ToolFailure> {
        formatting::workout_count(output)
    }
}

// ============================================================================
// GetWorkoutEventsTool
// ============================================================================

/// `get_workout_events`
pub struct GetWorkoutEventsTool;

#[async_trait]
impl ToolPipeline for GetWorkoutEventsTool {
    type Request = EventsQuery;
    type Payload = EventsQuery;
    type Output = WorkoutEventsPage;

    fn id(&self) -> ToolId {
        ToolId::GetWorkoutEvents
    }

    fn validate(&self, args: &ToolArguments) -> Result<EventsQuery, ValidationError> {
        validation::validate_events_query(args)
    }

    fn transform(&self, request: &EventsQuery) -> EventsQuery {
        request.clone()
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        query: EventsQuery,
    ) -> ProviderResult<WorkoutEventsPage> {
        api.get_workout_events(query).await
    }

    fn format(
        &self,
        request: &EventsQuery,
        output: &WorkoutEventsPage,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::workout_events(output, request)
    }
}
