// ABOUTME: Type-safe tool identifiers replacing string-based routing
// ABOUTME: The closed set of 17 Hevy tools shared by the catalog and the dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use hevy_core::constants::tools::{
    CREATE_EXERCISE_TEMPLATE, CREATE_ROUTINE, CREATE_ROUTINE_FOLDER, CREATE_WORKOUT,
    GET_EXERCISE_HISTORY, GET_EXERCISE_TEMPLATE, GET_EXERCISE_TEMPLATES, GET_ROUTINE,
    GET_ROUTINES, GET_ROUTINE_FOLDER, GET_ROUTINE_FOLDERS, GET_WORKOUT, GET_WORKOUTS,
    GET_WORKOUTS_COUNT, GET_WORKOUT_EVENTS, UPDATE_ROUTINE, UPDATE_WORKOUT,
};
use std::fmt;

/// Type-safe tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    // Workouts
    /// Paginated workout list
    GetWorkouts,
    /// One workout by id
    GetWorkout,
    /// Log a new workout
    CreateWorkout,
    /// Replace an existing workout
    UpdateWorkout,
    /// Total workout count
    GetWorkoutsCount,
    /// Update/delete events since a date
    GetWorkoutEvents,

    // Routines
    /// Paginated routine list
    GetRoutines,
    /// One routine by id
    GetRoutine,
    /// Create a routine
    CreateRoutine,
    /// Replace an existing routine
    UpdateRoutine,

    // Exercise templates
    /// Paginated template list
    GetExerciseTemplates,
    /// One template by id
    GetExerciseTemplate,
    /// Create a custom template
    CreateExerciseTemplate,
    /// Past sets for a template
    GetExerciseHistory,

    // Routine folders
    /// Paginated folder list
    GetRoutineFolders,
    /// One folder by id
    GetRoutineFolder,
    /// Create a folder
    CreateRoutineFolder,
}

impl ToolId {
    /// Every tool, in catalog order
    pub const ALL: [Self; 17] = [
        Self::GetWorkouts,
        Self::GetWorkout,
        Self::CreateWorkout,
        Self::UpdateWorkout,
        Self::GetWorkoutsCount,
        Self::GetWorkoutEvents,
        Self::GetRoutines,
        Self::GetRoutine,
        Self::CreateRoutine,
        Self::UpdateRoutine,
        Self::GetExerciseTemplates,
        Self::GetExerciseTemplate,
        Self::CreateExerciseTemplate,
        Self::GetExerciseHistory,
        Self::GetRoutineFolders,
        Self::GetRoutineFolder,
        Self::CreateRoutineFolder,
    ];

    /// Convert from string tool name to strongly-typed ID
    /// Returns None for unknown tool names
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Wire name used by `tools/list` and `tools/call`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetWorkouts => GET_WORKOUTS,
            Self::GetWorkout => GET_WORKOUT,
            Self::CreateWorkout => CREATE_WORKOUT,
            Self::UpdateWorkout => UPDATE_WORKOUT,
            Self::GetWorkoutsCount => GET_WORKOUTS_COUNT,
            Self::GetWorkoutEvents => GET_WORKOUT_EVENTS,
            Self::GetRoutines => GET_ROUTINES,
            Self::GetRoutine => GET_ROUTINE,
            Self::CreateRoutine => CREATE_ROUTINE,
            Self::UpdateRoutine => UPDATE_ROUTINE,
            Self::GetExerciseTemplates => GET_EXERCISE_TEMPLATES,
            Self::GetExerciseTemplate => GET_EXERCISE_TEMPLATE,
            Self::CreateExerciseTemplate => CREATE_EXERCISE_TEMPLATE,
            Self::GetExerciseHistory => GET_EXERCISE_HISTORY,
            Self::GetRoutineFolders => GET_ROUTINE_FOLDERS,
            Self::GetRoutineFolder => GET_ROUTINE_FOLDER,
            Self::CreateRoutineFolder => CREATE_ROUTINE_FOLDER,
        }
    }

    /// Human-readable description published in the catalog
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::GetWorkouts => "Get a paginated list of workouts with details",
            Self::GetWorkout => "Get a single workout by ID with full details",
            Self::CreateWorkout => "Log a new workout with exercises and sets",
            Self::UpdateWorkout => "Update an existing workout",
            Self::GetWorkoutsCount => "Get the total number of workouts in your account",
            Self::GetWorkoutEvents => {
                "Get workout change events (updates/deletes) since a date for syncing"
            }
            Self::GetRoutines => "Get a paginated list of workout routines",
            Self::GetRoutine => "Get a single routine by ID with full exercise details",
            Self::CreateRoutine => "Create a new workout routine/program",
            Self::UpdateRoutine => "Update an existing routine",
            Self::GetExerciseTemplates => {
                "Get available exercise templates (both built-in and custom)"
            }
            Self::GetExerciseTemplate => {
                "Get detailed information about a specific exercise template"
            }
            Self::CreateExerciseTemplate => "Create a custom exercise template",
            Self::GetExerciseHistory => "Get exercise history for tracking progress over time",
            Self::GetRoutineFolders => "Get routine organization folders",
            Self::GetRoutineFolder => "Get details of a specific routine folder",
            Self::CreateRoutineFolder => "Create a new routine folder",
        }
    }

    /// Whether the tool writes to the remote account
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::CreateWorkout
                | Self::UpdateWorkout
                | Self::CreateRoutine
                | Self::UpdateRoutine
                | Self::CreateExerciseTemplate
                | Self::CreateRoutineFolder
        )
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_round_trip() {
        for tool in ToolId::ALL {
            assert_eq!(ToolId::from_name(tool.name()), Some(tool));
        }
        assert_eq!(ToolId::from_name("delete_workout"), None);
        assert_eq!(ToolId::from_name("GET_WORKOUTS"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ToolId::ALL.iter().map(ToolId::name).collect();
        assert_eq!(names.len(), ToolId::ALL.len());
    }

    #[test]
    fn test_mutations() {
        let mutations: Vec<_> = ToolId::ALL
            .into_iter()
            .filter(ToolId::is_mutation)
            .collect();
        assert_eq!(mutations.len(), 6);
        assert!(!ToolId::GetWorkoutsCount.is_mutation());
    }
}
