// ABOUTME: Workout models: remote workout documents, change events, drafts, and API payloads
// ABOUTME: Drafts come out of the validator, payloads out of the transformer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExtraFields;
use serde::{Deserialize, Serialize};
use serde_json::Number;

// ================================================================================================
// Remote shapes
// ================================================================================================

/// A logged workout as returned by the Hevy API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Workout id (UUID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO 8601 start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// ISO 8601 end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Last modification time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Exercises in order
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One exercise inside a workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Position within the workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Exercise title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Template the exercise instantiates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_template_id: Option<String>,
    /// Superset grouping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superset_id: Option<i64>,
    /// Sets in order
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One set inside a workout exercise
///
/// Numeric metrics keep their JSON representation so `10` is not re-emitted as `10.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Position within the exercise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// `warmup`, `normal`, `failure` or `dropset`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    /// Load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<Number>,
    /// Repetitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<Number>,
    /// Distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<Number>,
    /// Duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<Number>,
    /// Rate of perceived exertion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<Number>,
    /// Custom metric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metric: Option<Number>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `GET /v1/workouts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutsPage {
    /// Current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Workouts on this page
    #[serde(default)]
    pub workouts: Vec<Workout>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `GET /v1/workouts/count`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutCount {
    /// Total workouts in the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_count: Option<u64>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A change to a workout since some timestamp
///
/// Any `type` other than `deleted` is read as an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEvent {
    /// `updated`, `deleted`, or whatever the API sends next
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Workout after the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<Workout>,
    /// Removed workout id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Deletion time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl WorkoutEvent {
    /// Whether the event removes a workout
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.event_type.as_deref() == Some("deleted")
    }
}

/// `GET /v1/workouts/events`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEventsPage {
    /// Current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Events on this page
    #[serde(default)]
    pub events: Vec<WorkoutEvent>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

// ================================================================================================
// Validated drafts
// ================================================================================================

/// Set classification accepted by Hevy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    /// Warm-up set
    Warmup,
    /// Working set
    #[default]
    Normal,
    /// Set taken to failure
    Failure,
    /// Drop set
    Dropset,
}

impl SetType {
    /// Parse the wire name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "warmup" => Some(Self::Warmup),
            "normal" => Some(Self::Normal),
            "failure" => Some(Self::Failure),
            "dropset" => Some(Self::Dropset),
            _ => None,
        }
    }
}

/// Workout arguments after validation
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    /// Non-empty title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Valid ISO 8601 start, as given
    pub start_time: String,
    /// Valid ISO 8601 end, as given
    pub end_time: String,
    /// Privacy flag when supplied
    pub is_private: Option<bool>,
    /// Non-empty exercise list
    pub exercises: Vec<WorkoutExerciseDraft>,
}

/// Exercise arguments after validation
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExerciseDraft {
    /// Template id
    pub exercise_template_id: String,
    /// Superset grouping
    pub superset_id: Option<i64>,
    /// Notes
    pub notes: Option<String>,
    /// Non-empty set list
    pub sets: Vec<WorkoutSetDraft>,
}

/// Set arguments after validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutSetDraft {
    /// Set type when supplied
    pub set_type: Option<SetType>,
    /// Load, >= 0
    pub weight_kg: Option<f64>,
    /// Repetitions
    pub reps: Option<u32>,
    /// Distance, >= 0
    pub distance_meters: Option<f64>,
    /// Duration
    pub duration_seconds: Option<u32>,
    /// Custom metric, >= 0
    pub custom_metric: Option<f64>,
    /// RPE in [6, 10]
    pub rpe: Option<f64>,
}

// ================================================================================================
// Canonical payloads
// ================================================================================================

/// Body of `POST /v1/workouts` and `PUT /v1/workouts/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPayload {
    /// Envelope
    pub workout: WorkoutBody,
}

/// Workout fields as Hevy expects them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBody {
    /// Title
    pub title: String,
    /// Description, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO 8601 start
    pub start_time: String,
    /// ISO 8601 end
    pub end_time: String,
    /// Privacy flag
    pub is_private: bool,
    /// Exercises
    pub exercises: Vec<WorkoutExerciseBody>,
}

/// Exercise entry in a workout payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExerciseBody {
    /// Template id
    pub exercise_template_id: String,
    /// Superset grouping, `null` when absent
    pub superset_id: Option<i64>,
    /// Notes, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Sets
    pub sets: Vec<WorkoutSetBody>,
}

/// Set entry in a workout payload; absent metrics are sent as `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSetBody {
    /// Set type
    #[serde(rename = "type")]
    pub set_type: SetType,
    /// Load
    pub weight_kg: Option<f64>,
    /// Repetitions
    pub reps: Option<u32>,
    /// Distance
    pub distance_meters: Option<f64>,
    /// Duration
    pub duration_seconds: Option<u32>,
    /// Custom metric
    pub custom_metric: Option<f64>,
    /// RPE
    pub rpe: Option<f64>,
}
