// ABOUTME: reqwest implementation of the Hevy API contract
// ABOUTME: Adds the api-key header, maps non-2xx answers to ProviderError, and unwraps envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::core::{HevyApi, ProviderResult};
use crate::config::HevyApiConfig;
use crate::logging::AppLogger;
use crate::models::{
    CreatedExerciseTemplate, EventsQuery, ExerciseHistory, ExerciseTemplate,
    ExerciseTemplatePayload, ExerciseTemplatesPage, HistoryQuery, PageQuery, Routine,
    RoutineFolder, RoutineFolderPayload, RoutineFoldersPage, RoutinePayload, RoutinesPage, Workout,
    WorkoutCount, WorkoutEventsPage, WorkoutPayload, WorkoutsPage,
};
use crate::utils::http_client;
use async_trait::async_trait;
use hevy_core::constants::hevy_api::API_KEY_HEADER;
use hevy_core::errors::{AppError, AppResult, ProviderError};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;
use url::Url;

const API_VERSION_SEGMENT: &str = "v1";

/// HTTP client for `api.hevyapp.com`
#[derive(Clone)]
pub struct HevyClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for HevyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HevyClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HevyClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL cannot be parsed or cannot carry a path
    pub fn new(config: &HevyApiConfig) -> AppResult<Self> {
        Self::with_client(
            http_client::api_client(config),
            &config.base_url,
            config.api_key.clone(),
        )
    }

    /// Build a client around an existing `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL cannot be parsed or cannot carry a path
    pub fn with_client(client: Client, base_url: &str, api_key: String) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::config_invalid(format!("Invalid Hevy API base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config_invalid(format!(
                "Hevy API base URL cannot carry a path: {base_url}"
            )));
        }
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// `{base}/v1/{segments...}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> ProviderResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ProviderError::Network(format!("Invalid request URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(API_VERSION_SEGMENT)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ProviderResult<RequestBuilder> {
        Ok(self
            .client
            .request(method, self.endpoint(segments)?)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json"))
    }

    async fn execute(&self, request: RequestBuilder) -> ProviderResult<Value> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_owned();
        let started = Instant::now();

        let result = self.client.execute(request).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                AppLogger::log_provider_request(method.as_str(), &path, None, duration_ms);
                return Err(ProviderError::from(e));
            }
        };

        let status = response.status();
        AppLogger::log_provider_request(method.as_str(), &path, Some(status.as_u16()), duration_ms);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> ProviderResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        let mut request = self.request(Method::GET, segments)?;
        if let Some(query) = query {
            request = request.query(query);
        }
        decode(self.execute(request).await?)
    }

    async fn send<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
        envelope: &str,
    ) -> ProviderResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let request = self.request(method, segments)?.json(body);
        let value = self.execute(request).await?;
        decode(unwrap_envelope(value, envelope)?)
    }

    async fn get_single<T>(&self, segments: &[&str], envelope: &str) -> ProviderResult<T>
    where
        T: DeserializeOwned,
    {
        let value = self.get::<Value, ()>(segments, None).await?;
        decode(unwrap_envelope(value, envelope)?)
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str, reason: Option<&str>) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_owned))
    });
    from_json
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .unwrap_or_else(|| reason.unwrap_or("Unknown error").to_owned())
}

/// Accept `{key: {...}}`, `{key: [{...}]}`, or the bare document
fn unwrap_envelope(value: Value, key: &str) -> ProviderResult<Value> {
    match value {
        Value::Object(mut map) if map.contains_key(key) => match map.remove(key) {
            Some(Value::Array(items)) => items.into_iter().next().ok_or_else(|| {
                ProviderError::Decode(format!("Empty `{key}` array in response"))
            }),
            Some(inner) => Ok(inner),
            None => Ok(Value::Object(map)),
        },
        other => Ok(other),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ProviderResult<T> {
    serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "Hevy API response did not match the expected shape");
        ProviderError::Decode(e.to_string())
    })
}

#[async_trait]
impl HevyApi for HevyClient {
    async fn get_workouts(&self, query: PageQuery) -> ProviderResult<WorkoutsPage> {
        self.get(&["workouts"], Some(&query)).await
    }

    async fn get_workout(&self, workout_id: &str) -> ProviderResult<Workout> {
        self.get_single(&["workouts", workout_id], "workout").await
    }

    async fn create_workout(&self, payload: &WorkoutPayload) -> ProviderResult<Workout> {
        self.send(Method::POST, &["workouts"], payload, "workout")
            .await
    }

    async fn update_workout(
        &self,
        workout_id: &str,
        payload: &WorkoutPayload,
    ) -> ProviderResult<Workout> {
        self.send(Method::PUT, &["workouts", workout_id], payload, "workout")
            .await
    }

    async fn get_workouts_count(&self) -> ProviderResult<WorkoutCount> {
        self.get::<_, ()>(&["workouts", "count"], None).await
    }

    async fn get_workout_events(&self, query: EventsQuery) -> ProviderResult<WorkoutEventsPage> {
        self.get(&["workouts", "events"], Some(&query)).await
    }

    async fn get_routines(&self, query: PageQuery) -> ProviderResult<RoutinesPage> {
        self.get(&["routines"], Some(&query)).await
    }

    async fn get_routine(&self, routine_id: &str) -> ProviderResult<Routine> {
        self.get_single(&["routines", routine_id], "routine").await
    }

    async fn create_routine(&self, payload: &RoutinePayload) -> ProviderResult<Routine> {
        self.send(Method::POST, &["routines"], payload, "routine")
            .await
    }

    async fn update_routine(
        &self,
        routine_id: &str,
        payload: &RoutinePayload,
    ) -> ProviderResult<Routine> {
        self.send(Method::PUT, &["routines", routine_id], payload, "routine")
            .await
    }

    async fn get_exercise_templates(
        &self,
        query: PageQuery,
    ) -> ProviderResult<ExerciseTemplatesPage> {
        self.get(&["exercise_templates"], Some(&query)).await
    }

    async fn get_exercise_template(&self, template_id: &str) -> ProviderResult<ExerciseTemplate> {
        self.get_single(&["exercise_templates", template_id], "exercise_template")
            .await
    }

    async fn create_exercise_template(
        &self,
        payload: &ExerciseTemplatePayload,
    ) -> ProviderResult<CreatedExerciseTemplate> {
        self.send(Method::POST, &["exercise_templates"], payload, "exercise_template")
            .await
    }

    async fn get_exercise_history(
        &self,
        template_id: &str,
        query: HistoryQuery,
    ) -> ProviderResult<ExerciseHistory> {
        self.get(&["exercise_history", template_id], Some(&query))
            .await
    }

    async fn get_routine_folders(&self, query: PageQuery) -> ProviderResult<RoutineFoldersPage> {
        self.get(&["routine_folders"], Some(&query)).await
    }

    async fn get_routine_folder(&self, folder_id: &str) -> ProviderResult<RoutineFolder> {
        self.get_single(&["routine_folders", folder_id], "routine_folder")
            .await
    }

    async fn create_routine_folder(
        &self,
        payload: &RoutineFolderPayload,
    ) -> ProviderResult<RoutineFolder> {
        self.send(Method::POST, &["routine_folders"], payload, "routine_folder")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_json_fields() {
        assert_eq!(
            error_message(r#"{"error":"Invalid api-key"}"#, Some("Unauthorized")),
            "Invalid api-key"
        );
        assert_eq!(
            error_message(r#"{"message":"Slow down"}"#, None),
            "Slow down"
        );
        assert_eq!(error_message("plain failure", None), "plain failure");
        assert_eq!(error_message("", Some("Not Found")), "Not Found");
    }

    #[test]
    fn test_unwrap_envelope_variants() {
        let doc = json!({"id": "r-1"});
        assert_eq!(
            unwrap_envelope(json!({"routine": doc.clone()}), "routine").unwrap(),
            doc
        );
        assert_eq!(
            unwrap_envelope(json!({"routine": [doc.clone()]}), "routine").unwrap(),
            doc
        );
        assert_eq!(unwrap_envelope(doc.clone(), "routine").unwrap(), doc);
        assert!(unwrap_envelope(json!({"routine": []}), "routine").is_err());
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client =
            HevyClient::with_client(Client::new(), "https://api.example.com/", "k".to_owned())
                .unwrap();
        let url = client.endpoint(&["workouts", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/workouts/a%20b%2Fc");
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(HevyClient::with_client(Client::new(), "mailto:x@y.z", "k".to_owned()).is_err());
    }
}
