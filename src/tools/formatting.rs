// ABOUTME: Success formatting for tool results: summary, listing, and raw JSON blocks
// ABOUTME: Collections yield three text blocks, single items and counts yield two
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::ToolFailure;
use crate::mcp::schema::ToolResponse;
use crate::models::{
    CreatedExerciseTemplate, EventsQuery, ExerciseHistory, ExerciseHistoryEntry,
    ExerciseTemplate, ExerciseTemplatesPage, PageQuery, ResourceId, Routine, RoutineFolder,
    RoutineFoldersPage, RoutinesPage, Workout, WorkoutCount, WorkoutEventsPage,
    WorkoutsPage,
};
use serde::Serialize;
use serde_json::Number;

type FormatResult = Result<ToolResponse, ToolFailure>;

const UNTITLED: &str = "Untitled";
const NOT_AVAILABLE: &str = "N/A";

/// Whether a routine was created or replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    /// `create_routine`
    Created,
    /// `update_routine`
    Updated,
}

impl Saved {
    const fn verb(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

fn dump<T: Serialize + ?Sized>(value: &T) -> Result<String, ToolFailure> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Mutation result: confirmation and detail share the first block
fn confirmed<T: Serialize>(confirmation: &str, detail: &str, value: &T) -> FormatResult {
    Ok(ToolResponse::success([
        format!("{confirmation}\n{detail}"),
        dump(value)?,
    ]))
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn title(value: Option<&str>) -> &str {
    value.filter(|t| !t.is_empty()).unwrap_or(UNTITLED)
}

fn number(value: Option<&Number>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), ToString::to_string)
}

fn resource_id(value: Option<&ResourceId>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), ToString::to_string)
}

fn yes_no(value: Option<bool>) -> &'static str {
    if value.unwrap_or(false) {
        "Yes"
    } else {
        "No"
    }
}

/// `(page X of Y)`; the current page falls back to the requested one
fn position(page: Option<u32>, page_count: Option<u32>, requested: u32) -> String {
    let page = page.unwrap_or(requested);
    format!("(page {page} of {})", page_count.unwrap_or(page))
}

fn listing<T>(
    items: &[T],
    empty: &str,
    separator: &str,
    render: impl Fn(usize, &T) -> String,
) -> String {
    if items.is_empty() {
        return empty.to_owned();
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| render(index + 1, item))
        .collect::<Vec<_>>()
        .join(separator)
}

// ================================================================================================
// Workouts
// ================================================================================================

/// `get_workouts`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn workouts_page(result: &WorkoutsPage, query: PageQuery) -> FormatResult {
    let summary = format!(
        "Retrieved {} workouts {}",
        result.workouts.len(),
        position(result.page, result.page_count, query.page)
    );
    let items = listing(&result.workouts, "No workouts found", "\n", |i, workout| {
        format!(
            "Workout {i}: {}\n  ID: {}\n  Date: {}",
            title(workout.title.as_deref()),
            text(workout.id.as_deref()),
            text(workout.start_time.as_deref())
        )
    });
    Ok(ToolResponse::success([summary, items, dump(result)?]))
}

/// `get_workout`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn workout_detail(workout: &Workout) -> FormatResult {
    let summary = format!(
        "Workout: {}\nID: {}\nExercises: {}",
        title(workout.title.as_deref()),
        text(workout.id.as_deref()),
        workout.exercises.len()
    );
    Ok(ToolResponse::success([summary, dump(workout)?]))
}

/// `create_workout`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn workout_logged(workout: &Workout, requested_title: &str, start_time: &str) -> FormatResult {
    let confirmation = format!(
        "✓ Successfully logged workout: {}",
        workout.title.as_deref().unwrap_or(requested_title)
    );
    let detail = format!(
        "Workout ID: {}\nExercises: {}\nStarted: {start_time}",
        text(workout.id.as_deref()),
        workout.exercises.len()
    );
    confirmed(&confirmation, &detail, workout)
}

/// `update_workout`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn workout_updated(workout: &Workout, requested_title: &str) -> FormatResult {
    let confirmation = format!(
        "✓ Successfully updated workout: {}",
        workout.title.as_deref().unwrap_or(requested_title)
    );
    let detail = format!(
        "Workout ID: {}\nExercises: {}",
        text(workout.id.as_deref()),
        workout.exercises.len()
    );
    confirmed(&confirmation, &detail, workout)
}

/// `get_workouts_count`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn workout_count(count: &WorkoutCount) -> FormatResult {
    let summary = format!("Total workouts: {}", count.workout_count.unwrap_or(0));
    Ok(ToolResponse::success([summary, dump(count)?]))
}

/// `get_workout_events`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn workout_events(result: &WorkoutEventsPage, query: &EventsQuery) -> FormatResult {
    let summary = format!(
        "Retrieved {} workout events {}",
        result.events.len(),
        position(result.page, result.page_count, query.page)
    );
    let items = listing(&result.events, "No events found", "\n", |i, event| {
        if event.is_deleted() {
            format!(
                "{i}. DELETED - Workout ID: {}\n   Deleted at: {}",
                text(event.id.as_deref()),
                text(event.deleted_at.as_deref())
            )
        } else {
            let workout = event.workout.as_ref();
            format!(
                "{i}. UPDATED - {}\n   Workout ID: {}\n   Updated: {}",
                title(workout.and_then(|w| w.title.as_deref())),
                text(workout.and_then(|w| w.id.as_deref())),
                text(workout.and_then(|w| w.updated_at.as_deref()))
            )
        }
    });
    Ok(ToolResponse::success([summary, items, dump(result)?]))
}

// ================================================================================================
// Routines
// ================================================================================================

/// `get_routines`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn routines_page(result: &RoutinesPage, query: PageQuery) -> FormatResult {
    let summary = format!(
        "Retrieved {} routines {}",
        result.routines.len(),
        position(result.page, result.page_count, query.page)
    );
    let items = listing(&result.routines, "No routines found", "\n", |i, routine| {
        format!(
            "Routine {i}: {}\n  Exercises: {}\n  ID: {}",
            title(routine.title.as_deref()),
            routine.exercises.len(),
            text(routine.id.as_deref())
        )
    });
    Ok(ToolResponse::success([summary, items, dump(result)?]))
}

/// `get_routine`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn routine_detail(routine: &Routine) -> FormatResult {
    let summary = format!(
        "Routine: {}\nID: {}\nExercises: {}",
        title(routine.title.as_deref()),
        text(routine.id.as_deref()),
        routine.exercises.len()
    );
    Ok(ToolResponse::success([summary, dump(routine)?]))
}

/// `create_routine` / `update_routine`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn routine_saved(routine: &Routine, saved: Saved, requested_title: &str) -> FormatResult {
    let confirmation = format!(
        "✓ Successfully {} routine: {}",
        saved.verb(),
        routine.title.as_deref().unwrap_or(requested_title)
    );
    let detail = format!(
        "Routine ID: {}\nExercises: {}",
        text(routine.id.as_deref()),
        routine.exercises.len()
    );
    confirmed(&confirmation, &detail, routine)
}

// ================================================================================================
// Exercise templates
// ================================================================================================

/// `get_exercise_templates`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn exercise_templates_page(result: &ExerciseTemplatesPage, query: PageQuery) -> FormatResult {
    let summary = format!(
        "Retrieved {} exercise templates {}",
        result.exercise_templates.len(),
        position(result.page, result.page_count, query.page)
    );
    let items = listing(
        &result.exercise_templates,
        "No exercise templates found",
        "\n",
        |i, template| {
            format!(
                "{i}. {} ({})\n   ID: {}\n   Primary: {}\n   Custom: {}",
                title(template.title.as_deref()),
                text(template.exercise_type.as_deref()),
                text(template.id.as_deref()),
                text(template.primary_muscle_group.as_deref()),
                yes_no(template.is_custom)
            )
        },
    );
    Ok(ToolResponse::success([summary, items, dump(result)?]))
}

/// `get_exercise_template`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn exercise_template_detail(template: &ExerciseTemplate) -> FormatResult {
    let summary = format!(
        "Exercise: {}\nType: {}\nPrimary Muscle: {}\nCustom: {}",
        title(template.title.as_deref()),
        text(template.exercise_type.as_deref()),
        text(template.primary_muscle_group.as_deref()),
        yes_no(template.is_custom)
    );
    Ok(ToolResponse::success([summary, dump(template)?]))
}

/// `create_exercise_template`; the API answers with little more than the id
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn exercise_template_created(
    created: &CreatedExerciseTemplate,
    requested_title: &str,
) -> FormatResult {
    let confirmation =
        format!("✓ Successfully created custom exercise template: {requested_title}");
    let detail = format!(
        "Exercise Template ID: {}",
        resource_id(created.id.as_ref())
    );
    confirmed(&confirmation, &detail, created)
}

/// `get_exercise_history`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn exercise_history(history: &ExerciseHistory) -> FormatResult {
    let entries = &history.exercise_history;
    let summary = format!("Retrieved {} exercise history entries", entries.len());
    let items = listing(entries, "No exercise history found", "\n", history_entry);
    Ok(ToolResponse::success([summary, items, dump(history)?]))
}

fn history_entry(index: usize, entry: &ExerciseHistoryEntry) -> String {
    format!(
        "{index}. {} ({})\n   Weight: {}kg, Reps: {}, RPE: {}\n   Set Type: {}",
        title(entry.workout_title.as_deref()),
        text(entry.workout_start_time.as_deref()),
        number(entry.weight_kg.as_ref()),
        number(entry.reps.as_ref()),
        number(entry.rpe.as_ref()),
        text(entry.set_type.as_deref())
    )
}

// ================================================================================================
// Routine folders
// ================================================================================================

/// `get_routine_folders`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn routine_folders_page(result: &RoutineFoldersPage, query: PageQuery) -> FormatResult {
    let summary = format!(
        "Retrieved {} routine folders {}",
        result.routine_folders.len(),
        position(result.page, result.page_count, query.page)
    );
    let items = listing(
        &result.routine_folders,
        "No routine folders found",
        "\n",
        |i, folder| {
            format!(
                "{i}. {}\n   ID: {}\n   Index: {}",
                title(folder.title.as_deref()),
                resource_id(folder.id.as_ref()),
                folder_index(folder)
            )
        },
    );
    Ok(ToolResponse::success([summary, items, dump(result)?]))
}

fn folder_index(folder: &RoutineFolder) -> String {
    folder
        .index
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |index| index.to_string())
}

/// `get_routine_folder`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn routine_folder_detail(folder: &RoutineFolder) -> FormatResult {
    let summary = format!(
        "Folder: {}\nID: {}\nIndex: {}",
        title(folder.title.as_deref()),
        resource_id(folder.id.as_ref()),
        folder_index(folder)
    );
    Ok(ToolResponse::success([summary, dump(folder)?]))
}

/// `create_routine_folder`
///
/// # Errors
///
/// Fails only if the result cannot be serialized
pub fn routine_folder_created(folder: &RoutineFolder, requested_title: &str) -> FormatResult {
    let confirmation = format!(
        "✓ Successfully created routine folder: {}",
        folder.title.as_deref().unwrap_or(requested_title)
    );
    let detail = format!(
        "Folder ID: {}\nIndex: {}",
        resource_id(folder.id.as_ref()),
        folder_index(folder)
    );
    confirmed(&confirmation, &detail, folder)
}
