// ABOUTME: Argument validation for every Hevy tool, run before any remote call
// ABOUTME: Turns loosely typed JSON arguments into typed drafts or a ValidationError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validator
//!
//! Pure functions from raw tool arguments to typed requests. The first
//! violated rule wins and is reported as a [`ValidationError`] naming the
//! field. `null` is treated exactly like an absent key.

use crate::models::{
    EventsQuery, ExerciseTemplateDraft, HistoryQuery, PageQuery, RepRange, ResourceId,
    RoutineDraft, RoutineExerciseDraft, RoutineFolderDraft, RoutineSetDraft, SetType,
    WorkoutDraft, WorkoutExerciseDraft, WorkoutSetDraft,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use hevy_core::constants::pagination::{PageLimits, DEFAULT_PAGE, WORKOUT_EVENTS};
use hevy_core::errors::{ValidationError, ValidationKind};
use serde_json::{Map, Value};

type Fields = Map<String, Value>;
type ValidationResult<T> = Result<T, ValidationError>;

const RPE_MIN: f64 = 6.0;
const RPE_MAX: f64 = 10.0;
/// Largest float that still holds every integer exactly
const MAX_SAFE_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Raw `tools/call` arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments(Fields);

impl ToolArguments {
    /// Accept an absent or `null` value as no arguments, reject anything but an object
    ///
    /// # Errors
    ///
    /// Returns a validation error when `value` is neither absent nor an object
    pub fn from_value(value: Option<Value>) -> ValidationResult<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(fields)) => Ok(Self(fields)),
            Some(_) => Err(ValidationError::invalid_type(
                "arguments",
                "arguments must be an object",
            )),
        }
    }

    /// Value of `key`, with `null` reported as absent
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        present(&self.0, key)
    }

    fn fields(&self) -> &Fields {
        &self.0
    }
}

impl From<Fields> for ToolArguments {
    fn from(fields: Fields) -> Self {
        Self(fields)
    }
}

// ================================================================================================
// Pagination and dates
// ================================================================================================

/// `page` and `page_size` with per-resource default and cap
///
/// # Errors
///
/// Fails when either value is not an integer or falls outside its range
pub fn validate_pagination(
    args: &ToolArguments,
    limits: PageLimits,
) -> ValidationResult<PageQuery> {
    let page = match args.get("page") {
        None => DEFAULT_PAGE,
        Some(value) => bounded_integer(
            value,
            "page",
            1,
            u32::MAX,
            "page must be an integer greater than or equal to 1",
        )?,
    };
    let page_size = match args.get("page_size") {
        None => limits.default_page_size,
        Some(value) => bounded_integer(
            value,
            "page_size",
            1,
            limits.max_page_size,
            &format!("page_size must be between 1 and {}", limits.max_page_size),
        )?,
    };
    Ok(PageQuery { page, page_size })
}

/// Parse an ISO 8601 date or date-time
///
/// Accepts RFC 3339, offsets without a colon, date-times without an offset
/// (read as UTC), fractional seconds, and bare `YYYY-MM-DD` dates.
#[must_use]
pub fn parse_iso8601(input: &str) -> Option<DateTime<Utc>> {
    const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
    {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// A JSON value that must be an ISO 8601 string
///
/// # Errors
///
/// Fails for non-strings and strings that do not parse
pub fn validate_iso8601(value: &Value, field: &str) -> ValidationResult<DateTime<Utc>> {
    value.as_str().and_then(parse_iso8601).ok_or_else(|| {
        ValidationError::invalid_format(
            field,
            format!("{field} must be a valid ISO 8601 date (e.g. 2024-01-01T00:00:00Z)"),
        )
    })
}

/// `get_workout_events` arguments
///
/// # Errors
///
/// Fails on bad pagination or a malformed `since`
pub fn validate_events_query(args: &ToolArguments) -> ValidationResult<EventsQuery> {
    let PageQuery { page, page_size } = validate_pagination(args, WORKOUT_EVENTS)?;
    let since = optional_date(args.fields(), "since")?.map(|(raw, _)| raw);
    Ok(EventsQuery {
        page,
        page_size,
        since,
    })
}

/// `get_exercise_history` arguments: the template id and an optional range
///
/// # Errors
///
/// Fails on a missing id, malformed dates, or `end_date` not after `start_date`
pub fn validate_history_query(args: &ToolArguments) -> ValidationResult<(String, HistoryQuery)> {
    let template_id = require_id(args.fields(), "exercise_template_id")?;
    let start = optional_date(args.fields(), "start_date")?;
    let end = optional_date(args.fields(), "end_date")?;

    if let (Some((_, start)), Some((_, end))) = (&start, &end) {
        if end <= start {
            return Err(ValidationError::ordering(
                "end_date",
                "end_date must be after start_date",
            ));
        }
    }

    Ok((
        template_id,
        HistoryQuery {
            start_date: start.map(|(raw, _)| raw),
            end_date: end.map(|(raw, _)| raw),
        },
    ))
}

// ================================================================================================
// Identifiers
// ================================================================================================

/// A required identifier: non-empty string or non-negative integer
///
/// # Errors
///
/// Fails with `<field> is required` when absent, empty, or of another type
pub fn validate_id(args: &ToolArguments, field: &str) -> ValidationResult<String> {
    require_id(args.fields(), field)
}

/// `routine_folder_id`, also accepted as `folder_id`
///
/// # Errors
///
/// Fails with `routine_folder_id is required` when neither key holds an id
pub fn validate_routine_folder_id(args: &ToolArguments) -> ValidationResult<String> {
    const FIELD: &str = "routine_folder_id";
    match (args.get(FIELD), args.get("folder_id")) {
        (None, Some(alias)) => id_value(alias, FIELD),
        _ => require_id(args.fields(), FIELD),
    }
}

fn require_id(fields: &Fields, field: &str) -> ValidationResult<String> {
    present(fields, field)
        .ok_or_else(|| ValidationError::missing(field))
        .and_then(|value| id_value(value, field))
}

fn id_value(value: &Value, field: &str) -> ValidationResult<String> {
    match value {
        Value::String(id) if !id.trim().is_empty() => Ok(id.clone()),
        Value::String(_) => Err(ValidationError::missing(field)),
        Value::Number(number) => number
            .as_u64()
            .map(|id| id.to_string())
            .ok_or_else(|| invalid_id(field)),
        _ => Err(invalid_id(field)),
    }
}

fn invalid_id(field: &str) -> ValidationError {
    ValidationError::new(
        field,
        ValidationKind::InvalidType,
        format!("{field} is required"),
    )
}

// ================================================================================================
// Drafts
// ================================================================================================

/// `create_workout` / `update_workout` body
///
/// # Errors
///
/// Fails on the first rule the arguments violate
pub fn validate_workout_draft(args: &ToolArguments) -> ValidationResult<WorkoutDraft> {
    let fields = args.fields();
    Ok(WorkoutDraft {
        title: required_string(fields, "title")?,
        description: optional_string(fields, "description")?,
        start_time: required_date(fields, "start_time")?,
        end_time: required_date(fields, "end_time")?,
        is_private: optional_bool(fields, "is_private")?,
        exercises: each_entry(fields, "exercises", "exercise", workout_exercise)?,
    })
}

/// `create_routine` / `update_routine` body
///
/// # Errors
///
/// Fails on the first rule the arguments violate
pub fn validate_routine_draft(args: &ToolArguments) -> ValidationResult<RoutineDraft> {
    let fields = args.fields();
    Ok(RoutineDraft {
        title: required_string(fields, "title")?,
        folder_id: optional_resource_id(fields, "folder_id")?,
        notes: optional_string(fields, "notes")?,
        exercises: each_entry(fields, "exercises", "exercise", routine_exercise)?,
    })
}

/// `create_exercise_template` body
///
/// # Errors
///
/// Fails on a missing required string or a mistyped optional
pub fn validate_exercise_template_draft(
    args: &ToolArguments,
) -> ValidationResult<ExerciseTemplateDraft> {
    let fields = args.fields();
    Ok(ExerciseTemplateDraft {
        title: required_string(fields, "title")?,
        exercise_type: optional_string(fields, "exercise_type")?,
        equipment_category: required_string(fields, "equipment_category")?,
        primary_muscle_group: required_string(fields, "primary_muscle_group")?,
        secondary_muscle_groups: optional_string_list(fields, "secondary_muscle_groups")?,
        is_unilateral: optional_bool(fields, "is_unilateral")?,
    })
}

/// `create_routine_folder` body
///
/// # Errors
///
/// Fails when `title` is not a non-empty string
pub fn validate_routine_folder_draft(args: &ToolArguments) -> ValidationResult<RoutineFolderDraft> {
    Ok(RoutineFolderDraft {
        title: required_string(args.fields(), "title")?,
    })
}

fn workout_exercise(fields: &Fields) -> ValidationResult<WorkoutExerciseDraft> {
    Ok(WorkoutExerciseDraft {
        exercise_template_id: require_id(fields, "exercise_template_id")?,
        superset_id: optional_integer(fields, "superset_id")?,
        notes: optional_string(fields, "notes")?,
        sets: each_entry(fields, "sets", "set", workout_set)?,
    })
}

fn routine_exercise(fields: &Fields) -> ValidationResult<RoutineExerciseDraft> {
    Ok(RoutineExerciseDraft {
        exercise_template_id: require_id(fields, "exercise_template_id")?,
        superset_id: optional_integer(fields, "superset_id")?,
        rest_seconds: optional_count(fields, "rest_seconds")?,
        notes: optional_string(fields, "notes")?,
        sets: each_entry(fields, "sets", "set", routine_set)?,
    })
}

/// Fields shared by workout and routine sets
struct SetMetrics {
    set_type: Option<SetType>,
    weight_kg: Option<f64>,
    reps: Option<u32>,
    distance_meters: Option<f64>,
    duration_seconds: Option<u32>,
    custom_metric: Option<f64>,
    rpe: Option<f64>,
}

fn set_metrics(fields: &Fields) -> ValidationResult<SetMetrics> {
    let set_type = match present(fields, "type") {
        None => None,
        Some(value) => Some(value.as_str().and_then(SetType::from_name).ok_or_else(|| {
            ValidationError::invalid_format(
                "type",
                "type must be one of warmup, normal, failure, dropset",
            )
        })?),
    };
    let rpe = optional_number(fields, "rpe")?;
    if let Some(rpe) = rpe {
        if !(RPE_MIN..=RPE_MAX).contains(&rpe) {
            return Err(ValidationError::out_of_range(
                "rpe",
                "rpe must be between 6 and 10",
            ));
        }
    }
    Ok(SetMetrics {
        set_type,
        weight_kg: optional_measure(fields, "weight_kg")?,
        reps: optional_count(fields, "reps")?,
        distance_meters: optional_measure(fields, "distance_meters")?,
        duration_seconds: optional_count(fields, "duration_seconds")?,
        custom_metric: optional_measure(fields, "custom_metric")?,
        rpe,
    })
}

fn workout_set(fields: &Fields) -> ValidationResult<WorkoutSetDraft> {
    let metrics = set_metrics(fields)?;
    Ok(WorkoutSetDraft {
        set_type: metrics.set_type,
        weight_kg: metrics.weight_kg,
        reps: metrics.reps,
        distance_meters: metrics.distance_meters,
        duration_seconds: metrics.duration_seconds,
        custom_metric: metrics.custom_metric,
        rpe: metrics.rpe,
    })
}

fn routine_set(fields: &Fields) -> ValidationResult<RoutineSetDraft> {
    let metrics = set_metrics(fields)?;
    Ok(RoutineSetDraft {
        set_type: metrics.set_type,
        weight_kg: metrics.weight_kg,
        reps: metrics.reps,
        distance_meters: metrics.distance_meters,
        duration_seconds: metrics.duration_seconds,
        custom_metric: metrics.custom_metric,
        rep_range: rep_range(fields)?,
    })
}

fn rep_range(fields: &Fields) -> ValidationResult<Option<RepRange>> {
    let Some(value) = present(fields, "rep_range") else {
        return Ok(None);
    };
    let range = value
        .as_object()
        .ok_or_else(|| ValidationError::invalid_type("rep_range", "rep_range must be an object"))?;
    let bound = |name: &str| {
        optional_count(range, name)
            .and_then(|value| value.ok_or_else(|| ValidationError::missing(name)))
            .map_err(|e| e.nested_under("rep_range"))
    };
    let start = bound("start")?;
    let end = bound("end")?;
    if start > end {
        return Err(ValidationError::ordering(
            "rep_range",
            "rep_range start must not exceed end",
        ));
    }
    Ok(Some(RepRange { start, end }))
}

/// Required non-empty array whose object entries are validated by `validate`
fn each_entry<T>(
    fields: &Fields,
    field: &str,
    entry_name: &str,
    validate: fn(&Fields) -> ValidationResult<T>,
) -> ValidationResult<Vec<T>> {
    let entries = present(fields, field)
        .ok_or_else(|| ValidationError::missing(field))?
        .as_array()
        .ok_or_else(|| {
            ValidationError::invalid_type(field, format!("{field} must be an array"))
        })?;
    if entries.is_empty() {
        return Err(ValidationError::new(
            field,
            ValidationKind::Missing,
            format!("{field} must contain at least one {entry_name}"),
        ));
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let path = format!("{field}[{index}]");
            let object = entry.as_object().ok_or_else(|| {
                ValidationError::invalid_type(path.clone(), format!("{path} must be an object"))
            })?;
            validate(object).map_err(|e| e.nested_under(&path))
        })
        .collect()
}

// ================================================================================================
// Field primitives
// ================================================================================================

fn present<'a>(fields: &'a Fields, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

/// Integral value of a JSON number; `2.0` counts, `2.5` does not
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        let float = number.as_f64()?;
        let integral = float.is_finite() && float.fract().abs() < f64::EPSILON;
        (integral && float.abs() < MAX_SAFE_FLOAT).then_some(float as i64)
    })
}

fn bounded_integer(
    value: &Value,
    field: &str,
    min: u32,
    max: u32,
    message: &str,
) -> ValidationResult<u32> {
    let integer = as_integer(value).ok_or_else(|| ValidationError::invalid_type(field, message))?;
    u32::try_from(integer)
        .ok()
        .filter(|n| (min..=max).contains(n))
        .ok_or_else(|| ValidationError::out_of_range(field, message))
}

fn required_string(fields: &Fields, field: &str) -> ValidationResult<String> {
    match present(fields, field) {
        None => Err(ValidationError::missing(field)),
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(ValidationError::new(
            field,
            ValidationKind::Missing,
            format!("{field} must be a non-empty string"),
        )),
        Some(_) => Err(ValidationError::invalid_type(
            field,
            format!("{field} must be a string"),
        )),
    }
}

fn required_date(fields: &Fields, field: &str) -> ValidationResult<String> {
    let value = present(fields, field).ok_or_else(|| ValidationError::missing(field))?;
    validate_iso8601(value, field)?;
    Ok(value.as_str().unwrap_or_default().to_owned())
}

fn optional_date(
    fields: &Fields,
    field: &str,
) -> ValidationResult<Option<(String, DateTime<Utc>)>> {
    present(fields, field)
        .map(|value| {
            let parsed = validate_iso8601(value, field)?;
            Ok((value.as_str().unwrap_or_default().to_owned(), parsed))
        })
        .transpose()
}

fn optional_string(fields: &Fields, field: &str) -> ValidationResult<Option<String>> {
    present(fields, field)
        .map(|value| {
            value
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| {
                    ValidationError::invalid_type(field, format!("{field} must be a string"))
                })
        })
        .transpose()
}

fn optional_string_list(fields: &Fields, field: &str) -> ValidationResult<Option<Vec<String>>> {
    present(fields, field)
        .map(|value| {
            value
                .as_array()
                .and_then(|items| {
                    items
                        .iter()
                        .map(|item| item.as_str().map(str::to_owned))
                        .collect::<Option<Vec<_>>>()
                })
                .ok_or_else(|| {
                    ValidationError::invalid_type(
                        field,
                        format!("{field} must be an array of strings"),
                    )
                })
        })
        .transpose()
}

fn optional_bool(fields: &Fields, field: &str) -> ValidationResult<Option<bool>> {
    present(fields, field)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| {
                    ValidationError::invalid_type(field, format!("{field} must be a boolean"))
                })
        })
        .transpose()
}

fn optional_number(fields: &Fields, field: &str) -> ValidationResult<Option<f64>> {
    present(fields, field)
        .map(|value| {
            value
                .as_f64()
                .ok_or_else(|| {
                    ValidationError::invalid_type(field, format!("{field} must be a number"))
                })
        })
        .transpose()
}

/// Non-negative number (weights, distances)
fn optional_measure(fields: &Fields, field: &str) -> ValidationResult<Option<f64>> {
    let measure = optional_number(fields, field)?;
    if measure.is_some_and(|value| value < 0.0) {
        return Err(ValidationError::out_of_range(
            field,
            format!("{field} must be a non-negative number"),
        ));
    }
    Ok(measure)
}

/// Non-negative integer (reps, seconds)
fn optional_count(fields: &Fields, field: &str) -> ValidationResult<Option<u32>> {
    let message = format!("{field} must be a non-negative integer");
    present(fields, field)
        .map(|value| bounded_integer(value, field, 0, u32::MAX, &message))
        .transpose()
}

fn optional_integer(fields: &Fields, field: &str) -> ValidationResult<Option<i64>> {
    present(fields, field)
        .map(|value| {
            as_integer(value)
                .ok_or_else(|| {
                    ValidationError::invalid_type(field, format!("{field} must be an integer"))
                })
        })
        .transpose()
}

fn optional_resource_id(fields: &Fields, field: &str) -> ValidationResult<Option<ResourceId>> {
    let invalid = || {
        ValidationError::invalid_type(field, format!("{field} must be a string or an integer"))
    };
    present(fields, field)
        .map(|value| match value {
            Value::String(id) if !id.is_empty() => Ok(ResourceId::Text(id.clone())),
            Value::Number(_) => as_integer(value).map(ResourceId::Number).ok_or_else(invalid),
            _ => Err(invalid()),
        })
        .transpose()
}
