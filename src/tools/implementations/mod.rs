// ABOUTME: Module containing all Hevy tool implementations organized by resource.
// ABOUTME: Each submodule holds the ToolPipeline types for one Hevy resource.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `workouts` - get_workouts, get_workout, create_workout, update_workout,
//!   get_workouts_count, get_workout_events
//! - `routines` - get_routines, get_routine, create_routine, update_routine
//! - `exercise_templates` - get_exercise_templates, get_exercise_template,
//!   create_exercise_template, get_exercise_history
//! - `routine_folders` - get_routine_folders, get_routine_folder,
//!   create_routine_folder

pub mod exercise_templates;
/// Routine folder tools
pub mod routine_folders;
/// Routine tools
pub mod routines;
pub mod workouts;
