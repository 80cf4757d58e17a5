// ABOUTME: Exercise template and exercise history models
// ABOUTME: Covers built-in and custom templates plus the template creation payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExtraFields, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Default `exercise_type` for new custom templates
pub const DEFAULT_EXERCISE_TYPE: &str = "weight_reps";

/// An exercise template as returned by the Hevy API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    /// Template id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Metric kind (`weight_reps`, `duration`, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    /// Primary muscle group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_muscle_group: Option<String>,
    /// Secondary muscle groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_muscle_groups: Option<Vec<String>>,
    /// Whether the user created it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `GET /v1/exercise_templates`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTemplatesPage {
    /// Current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Templates on this page
    #[serde(default)]
    pub exercise_templates: Vec<ExerciseTemplate>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `POST /v1/exercise_templates` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedExerciseTemplate {
    /// Id of the new template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One historical set of an exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    /// Workout the set belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    /// Workout title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_title: Option<String>,
    /// Workout start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_start_time: Option<String>,
    /// Workout end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_end_time: Option<String>,
    /// Template id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_template_id: Option<String>,
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
    /// RPE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<Number>,
    /// Custom metric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metric: Option<Number>,
    /// Set type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `GET /v1/exercise_history/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistory {
    /// Sets, newest first
    #[serde(default)]
    pub exercise_history: Vec<ExerciseHistoryEntry>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Exercise template arguments after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTemplateDraft {
    /// Name
    pub title: String,
    /// Metric kind when supplied
    pub exercise_type: Option<String>,
    /// Equipment category
    pub equipment_category: String,
    /// Primary muscle group
    pub primary_muscle_group: String,
    /// Secondary muscle groups when supplied
    pub secondary_muscle_groups: Option<Vec<String>>,
    /// Unilateral flag when supplied
    pub is_unilateral: Option<bool>,
}

/// Body of `POST /v1/exercise_templates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplatePayload {
    /// Envelope
    pub exercise: ExerciseTemplateBody,
}

/// Template fields as Hevy expects them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplateBody {
    /// Name
    pub title: String,
    /// Metric kind
    pub exercise_type: String,
    /// Equipment category
    pub equipment_category: String,
    /// Primary muscle group
    pub muscle_group: String,
    /// Secondary muscle groups
    pub other_muscles: Vec<String>,
    /// Unilateral flag, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unilateral: Option<bool>,
}
