// ABOUTME: Hevy API data models and transformer payloads
// ABOUTME: Response shapes keep unknown fields so raw dumps stay verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models
//!
//! Two families live here:
//!
//! - **Remote shapes** returned by the Hevy API (`Workout`, `RoutinesPage`, ...).
//!   Every field the formatters read is optional and anything else is kept in
//!   a flattened `extra` map, so re-serializing yields the upstream document.
//! - **Payloads and queries** produced by the transformer and sent upstream
//!   (`WorkoutPayload`, `PageQuery`, ...).

/// Exercise templates and exercise history
pub mod exercise_template;
/// Pagination and filter queries
pub mod query;
/// Routines and routine payloads
pub mod routine;
/// Routine folders
pub mod routine_folder;
/// Workouts, workout events, and workout payloads
pub mod workout;

pub use exercise_template::{
    CreatedExerciseTemplate, ExerciseHistory, ExerciseHistoryEntry, ExerciseTemplate,
    ExerciseTemplateBody, ExerciseTemplateDraft, ExerciseTemplatePayload, ExerciseTemplatesPage,
};
pub use query::{EventsQuery, HistoryQuery, PageQuery};
pub use routine::{
    RepRange, Routine, RoutineBody, RoutineDraft, RoutineExercise, RoutineExerciseBody,
    RoutineExerciseDraft, RoutinePayload, RoutineSetBody, RoutineSetDraft, RoutinesPage,
};
pub use routine_folder::{
    RoutineFolder, RoutineFolderBody, RoutineFolderDraft, RoutineFolderPayload, RoutineFoldersPage,
};
pub use workout::{
    SetType, Workout, WorkoutBody, WorkoutCount, WorkoutDraft, WorkoutEvent, WorkoutEventsPage,
    WorkoutExercise, WorkoutExerciseBody, WorkoutExerciseDraft, WorkoutPayload, WorkoutSet,
    WorkoutSetBody, WorkoutSetDraft, WorkoutsPage,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unknown fields preserved from upstream documents
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Identifier that Hevy encodes as either a number or a string
///
/// Routine folders use integer ids; everything else uses strings. Callers
/// may pass either form, so both round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric id
    Number(i64),
    /// String id
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}
