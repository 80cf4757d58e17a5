// ABOUTME: Remote collaborator trait for the Hevy fitness API
// ABOUTME: One async method per remote operation; implemented by the HTTP client and test mocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Hevy API contract
//!
//! The tool pipeline only talks to the remote service through [`HevyApi`].
//! Implementations are stateless apart from read-only credentials and may be
//! called concurrently from many dispatches.
//!
//! ```rust,no_run
//! use hevy_mcp_server::providers::HevyApi;
//! use hevy_mcp_server::models::PageQuery;
//!
//! # async fn example(api: &dyn HevyApi) -> Result<(), hevy_core::errors::ProviderError> {
//! let page = api.get_workouts(PageQuery { page: 1, page_size: 10 }).await?;
//! println!("{} workouts", page.workouts.len());
//! # Ok(())
//! # }
//! ```

use crate::models::{
    CreatedExerciseTemplate, EventsQuery, ExerciseHistory, ExerciseTemplate,
    ExerciseTemplatePayload, ExerciseTemplatesPage, HistoryQuery, PageQuery, Routine,
    RoutineFolder, RoutineFolderPayload, RoutineFoldersPage, RoutinePayload, RoutinesPage, Workout,
    WorkoutCount, WorkoutEventsPage, WorkoutPayload, WorkoutsPage,
};
use async_trait::async_trait;
use hevy_core::errors::ProviderError;

/// Result alias for remote calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Async access to every Hevy resource the tools expose
#[async_trait]
pub trait HevyApi: Send + Sync {
    // Workouts

    /// `GET /v1/workouts`
    async fn get_workouts(&self, query: PageQuery) -> ProviderResult<WorkoutsPage>;

    /// `GET /v1/workouts/{id}`
    async fn get_workout(&self, workout_id: &str) -> ProviderResult<Workout>;

    /// `POST /v1/workouts`
    async fn create_workout(&self, payload: &WorkoutPayload) -> ProviderResult<Workout>;

    /// `PUT /v1/workouts/{id}`
    async fn update_workout(
        &self,
        workout_id: &str,
        payload: &WorkoutPayload,
    ) -> ProviderResult<Workout>;

    /// `GET /v1/workouts/count`
    async fn get_workouts_count(&self) -> ProviderResult<WorkoutCount>;

    /// `GET /v1/workouts/events`
    async fn get_workout_events(&self, query: EventsQuery) -> ProviderResult<WorkoutEventsPage>;

    // Routines

    /// `GET /v1/routines`
    async fn get_routines(&self, query: PageQuery) -> ProviderResult<RoutinesPage>;

    /// `GET /v1/routines/{id}`
    async fn get_routine(&self, routine_id: &str) -> ProviderResult<Routine>;

    /// `POST /v1/routines`
    async fn create_routine(&self, payload: &RoutinePayload) -> ProviderResult<Routine>;

    /// `PUT /v1/routines/{id}`
    async fn update_routine(
        &self,
        routine_id: &str,
        payload: &RoutinePayload,
    ) -> ProviderResult<Routine>;

    // Exercise templates

    /// `GET /v1/exercise_templates`
    async fn get_exercise_templates(&self, query: PageQuery)
        -> ProviderResult<ExerciseTemplatesPage>;

    /// `GET /v1/exercise_templates/{id}`
    async fn get_exercise_template(&self, template_id: &str) -> ProviderResult<ExerciseTemplate>;

    /// `POST /v1/exercise_templates`
    async fn create_exercise_template(
        &self,
        payload: &ExerciseTemplatePayload,
    ) -> ProviderResult<CreatedExerciseTemplate>;

    /// `GET /v1/exercise_history/{id}`
    async fn get_exercise_history(
        &self,
        template_id: &str,
        query: HistoryQuery,
    ) -> ProviderResult<ExerciseHistory>;

    // Routine folders

    /// `GET /v1/routine_folders`
    async fn get_routine_folders(&self, query: PageQuery) -> ProviderResult<RoutineFoldersPage>;

    /// `GET /v1/routine_folders/{id}`
    async fn get_routine_folder(&self, folder_id: &str) -> ProviderResult<RoutineFolder>;

    /// `POST /v1/routine_folders`
    async fn create_routine_folder(
        &self,
        payload: &RoutineFolderPayload,
    ) -> ProviderResult<RoutineFolder>;
}
