// ABOUTME: MCP tool identifier constants to eliminate hardcoded tool names
// ABOUTME: Provides centralized tool name constants organized by resource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP tool identifier constants

// Workouts
/// List workouts
pub const GET_WORKOUTS: &str = "get_workouts";
/// Fetch one workout
pub const GET_WORKOUT: &str = "get_workout";
/// Log a new workout
pub const CREATE_WORKOUT: &str = "create_workout";
/// Replace an existing workout
pub const UPDATE_WORKOUT: &str = "update_workout";
/// Count all workouts
pub const GET_WORKOUTS_COUNT: &str = "get_workouts_count";
/// Workout update/delete events
pub const GET_WORKOUT_EVENTS: &str = "get_workout_events";

// Routines
/// List routines
pub const GET_ROUTINES: &str = "get_routines";
/// Fetch one routine
pub const GET_ROUTINE: &str = "get_routine";
/// Create a routine
pub const CREATE_ROUTINE: &str = "create_routine";
/// Replace an existing routine
pub const UPDATE_ROUTINE: &str = "update_routine";

// Exercise templates
/// List exercise templates
pub const GET_EXERCISE_TEMPLATES: &str = "get_exercise_templates";
/// Fetch one exercise template
pub const GET_EXERCISE_TEMPLATE: &str = "get_exercise_template";
/// Create a custom exercise template
pub const CREATE_EXERCISE_TEMPLATE: &str = "create_exercise_template";
/// Past sets for one exercise template
pub const GET_EXERCISE_HISTORY: &str = "get_exercise_history";

// Routine folders
/// List routine folders
pub const GET_ROUTINE_FOLDERS: &str = "get_routine_folders";
/// Fetch one routine folder
pub const GET_ROUTINE_FOLDER: &str = "get_routine_folder";
/// Create a routine folder
pub const CREATE_ROUTINE_FOLDER: &str = "create_routine_folder";
