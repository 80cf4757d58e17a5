// ABOUTME: Routine models: remote routine documents, validated drafts, and API payloads
// ABOUTME: Routine sets carry optional rep ranges instead of RPE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::workout::SetType;
use super::{ExtraFields, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A routine as returned by the Hevy API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    /// Routine id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Containing folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<ResourceId>,
    /// Last modification time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Exercises in order
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One exercise inside a routine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutineExercise {
    /// Exercise title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Template the exercise instantiates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_template_id: Option<String>,
    /// Rest between sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<Number>,
    /// Sets in order; shapes vary, so kept raw
    #[serde(default)]
    pub sets: Vec<serde_json::Value>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `GET /v1/routines`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutinesPage {
    /// Current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Routines on this page
    #[serde(default)]
    pub routines: Vec<Routine>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Inclusive repetition target range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lower bound
    pub start: u32,
    /// Upper bound, >= start
    pub end: u32,
}

/// Routine arguments after validation
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineDraft {
    /// Non-empty title
    pub title: String,
    /// Target folder
    pub folder_id: Option<ResourceId>,
    /// Notes
    pub notes: Option<String>,
    /// Non-empty exercise list
    pub exercises: Vec<RoutineExerciseDraft>,
}

/// Routine exercise arguments after validation
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineExerciseDraft {
    /// Template id
    pub exercise_template_id: String,
    /// Superset grouping
    pub superset_id: Option<i64>,
    /// Rest between sets
    pub rest_seconds: Option<u32>,
    /// Notes
    pub notes: Option<String>,
    /// Non-empty set list
    pub sets: Vec<RoutineSetDraft>,
}

/// Routine set arguments after validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutineSetDraft {
    /// Set type when supplied
    pub set_type: Option<SetType>,
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
    /// Target repetition range
    pub rep_range: Option<RepRange>,
}

/// Body of `POST /v1/routines` and `PUT /v1/routines/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutinePayload {
    /// Envelope
    pub routine: RoutineBody,
}

/// Routine fields as Hevy expects them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineBody {
    /// Title
    pub title: String,
    /// Folder, omitted entirely when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<ResourceId>,
    /// Notes, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Exercises
    pub exercises: Vec<RoutineExerciseBody>,
}

/// Exercise entry in a routine payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineExerciseBody {
    /// Template id
    pub exercise_template_id: String,
    /// Superset grouping, `null` when absent
    pub superset_id: Option<i64>,
    /// Rest between sets, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Notes, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Sets
    pub sets: Vec<RoutineSetBody>,
}

/// Set entry in a routine payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineSetBody {
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
    /// Target range, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_range: Option<RepRange>,
}
