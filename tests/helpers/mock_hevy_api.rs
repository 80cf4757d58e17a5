// ABOUTME: Recording mock of the Hevy API trait for integration tests
// ABOUTME: Returns canned JSON per method and keeps a log of every remote call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use hevy_core::errors::ProviderError;
use hevy_mcp_server::models::{
    CreatedExerciseTemplate, EventsQuery, ExerciseHistory, ExerciseTemplate,
    ExerciseTemplatePayload, ExerciseTemplatesPage, HistoryQuery, PageQuery, Routine,
    RoutineFolder, RoutineFolderPayload, RoutineFoldersPage, RoutinePayload, RoutinesPage, Workout,
    WorkoutCount, WorkoutEventsPage, WorkoutPayload, WorkoutsPage,
};
use hevy_mcp_server::providers::{HevyApi, ProviderResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// One remote invocation seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub args: Value,
}

/// Canned-response Hevy API
#[derive(Default)]
pub struct MockHevyApi {
    calls: Mutex<Vec<RecordedCall>>,
    responses: HashMap<&'static str, Result<Value, ProviderError>>,
}

impl MockHevyApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method` with `body`
    pub fn with_response(mut self, method: &'static str, body: Value) -> Self {
        self.responses.insert(method, Ok(body));
        self
    }

    /// Fail `method` with `error`
    pub fn with_error(mut self, method: &'static str, error: ProviderError) -> Self {
        self.responses.insert(method, Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Arguments of the only recorded call
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one remote call: {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn respond<T: DeserializeOwned>(&self, method: &'static str, args: Value) -> ProviderResult<T> {
        self.calls.lock().unwrap().push(RecordedCall { method, args });
        match self.responses.get(method) {
            Some(Ok(body)) => Ok(serde_json::from_value(body.clone()).unwrap()),
            Some(Err(error)) => Err(error.clone()),
            None => Err(ProviderError::Network(format!(
                "no canned response for {method}"
            ))),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

#[async_trait]
impl HevyApi for MockHevyApi {
    async fn get_workouts(&self, query: PageQuery) -> ProviderResult<WorkoutsPage> {
        self.respond("get_workouts", to_json(&query))
    }

    async fn get_workout(&self, workout_id: &str) -> ProviderResult<Workout> {
        self.respond("get_workout", json!({ "id": workout_id }))
    }

    async fn create_workout(&self, payload: &WorkoutPayload) -> ProviderResult<Workout> {
        self.respond("create_workout", to_json(payload))
    }

    async fn update_workout(
        &self,
        workout_id: &str,
        payload: &WorkoutPayload,
    ) -> ProviderResult<Workout> {
        self.respond(
            "update_workout",
            json!({ "id": workout_id, "payload": to_json(payload) }),
        )
    }

    async fn get_workouts_count(&self) -> ProviderResult<WorkoutCount> {
        self.respond("get_workouts_count", Value::Null)
    }

    async fn get_workout_events(&self, query: EventsQuery) -> ProviderResult<WorkoutEventsPage> {
        self.respond("get_workout_events", to_json(&query))
    }

    async fn get_routines(&self, query: PageQuery) -> ProviderResult<RoutinesPage> {
        self.respond("get_routines", to_json(&query))
    }

    async fn get_routine(&self, routine_id: &str) -> ProviderResult<Routine> {
        self.respond("get_routine", json!({ "id": routine_id }))
    }

    async fn create_routine(&self, payload: &RoutinePayload) -> ProviderResult<Routine> {
        self.respond("create_routine", to_json(payload))
    }

    async fn update_routine(
        &self,
        routine_id: &str,
        payload: &RoutinePayload,
    ) -> ProviderResult<Routine> {
        self.respond(
            "update_routine",
            json!({ "id": routine_id, "payload": to_json(payload) }),
        )
    }

    async fn get_exercise_templates(
        &self,
        query: PageQuery,
    ) -> ProviderResult<ExerciseTemplatesPage> {
        self.respond("get_exercise_templates", to_json(&query))
    }

    async fn get_exercise_template(&self, template_id: &str) -> ProviderResult<ExerciseTemplate> {
        self.respond("get_exercise_template", json!({ "id": template_id }))
    }

    async fn create_exercise_template(
        &self,
        payload: &ExerciseTemplatePayload,
    ) -> ProviderResult<CreatedExerciseTemplate> {
        self.respond("create_exercise_template", to_json(payload))
    }

    async fn get_exercise_history(
        &self,
        template_id: &str,
        query: HistoryQuery,
    ) -> ProviderResult<ExerciseHistory> {
        self.respond(
            "get_exercise_history",
            json!({ "id": template_id, "query": to_json(&query) }),
        )
    }

    async fn get_routine_folders(&self, query: PageQuery) -> ProviderResult<RoutineFoldersPage> {
        self.respond("get_routine_folders", to_json(&query))
    }

    async fn get_routine_folder(&self, folder_id: &str) -> ProviderResult<RoutineFolder> {
        self.respond("get_routine_folder", json!({ "id": folder_id }))
    }

    async fn create_routine_folder(
        &self,
        payload: &RoutineFolderPayload,
    ) -> ProviderResult<RoutineFolder> {
        self.respond("create_routine_folder", to_json(payload))
    }
}
