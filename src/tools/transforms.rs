// ABOUTME: Transformer from validated drafts to the payloads the Hevy API expects
// ABOUTME: Renames fields, nests bodies under their envelope key, and applies defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Transformer
//!
//! Total functions over validated drafts. Nothing here checks input again;
//! the validator already has.
//!
//! Defaults applied:
//! - workout `is_private` → `false`
//! - set `type` → `normal`
//! - template `exercise_type` → `weight_reps`, `other_muscles` → `[]`
//! - absent `superset_id` → `null`; absent routine `folder_id` is omitted

use crate::models::exercise_template::DEFAULT_EXERCISE_TYPE;
use crate::models::{
    ExerciseTemplateBody, ExerciseTemplateDraft, ExerciseTemplatePayload, RoutineBody,
    RoutineDraft, RoutineExerciseBody, RoutineExerciseDraft, RoutineFolderBody,
    RoutineFolderDraft, RoutineFolderPayload, RoutinePayload, RoutineSetBody, RoutineSetDraft,
    WorkoutBody, WorkoutDraft, WorkoutExerciseBody, WorkoutExerciseDraft, WorkoutPayload,
    WorkoutSetBody, WorkoutSetDraft,
};

/// `create_workout` / `update_workout` body
#[must_use]
pub fn workout_payload(draft: WorkoutDraft) -> WorkoutPayload {
    WorkoutPayload {
        workout: WorkoutBody {
            title: draft.title,
            description: draft.description,
            start_time: draft.start_time,
            end_time: draft.end_time,
            is_private: draft.is_private.unwrap_or(false),
            exercises: draft.exercises.into_iter().map(workout_exercise).collect(),
        },
    }
}

fn workout_exercise(exercise: WorkoutExerciseDraft) -> WorkoutExerciseBody {
    WorkoutExerciseBody {
        exercise_template_id: exercise.exercise_template_id,
        superset_id: exercise.superset_id,
        notes: exercise.notes,
        sets: exercise.sets.into_iter().map(workout_set).collect(),
    }
}

fn workout_set(set: WorkoutSetDraft) -> WorkoutSetBody {
    WorkoutSetBody {
        set_type: set.set_type.unwrap_or_default(),
        weight_kg: set.weight_kg,
        reps: set.reps,
        distance_meters: set.distance_meters,
        duration_seconds: set.duration_seconds,
        custom_metric: set.custom_metric,
        rpe: set.rpe,
    }
}

/// `create_routine` / `update_routine` body
#[must_use]
pub fn routine_payload(draft: RoutineDraft) -> RoutinePayload {
    RoutinePayload {
        routine: RoutineBody {
            title: draft.title,
            folder_id: draft.folder_id,
            notes: draft.notes,
            exercises: draft.exercises.into_iter().map(routine_exercise).collect(),
        },
    }
}

fn routine_exercise(exercise: RoutineExerciseDraft) -> RoutineExerciseBody {
    RoutineExerciseBody {
        exercise_template_id: exercise.exercise_template_id,
        superset_id: exercise.superset_id,
        rest_seconds: exercise.rest_seconds,
        notes: exercise.notes,
        sets: exercise.sets.into_iter().map(routine_set).collect(),
    }
}

fn routine_set(set: RoutineSetDraft) -> RoutineSetBody {
    RoutineSetBody {
        set_type: set.set_type.unwrap_or_default(),
        weight_kg: set.weight_kg,
        reps: set.reps,
        distance_meters: set.distance_meters,
        duration_seconds: set.duration_seconds,
        custom_metric: set.custom_metric,
        rep_range: set.rep_range,
    }
}

/// `create_exercise_template` body
#[must_use]
pub fn exercise_template_payload(draft: ExerciseTemplateDraft) -> ExerciseTemplatePayload {
    ExerciseTemplatePayload {
        exercise: ExerciseTemplateBody {
            title: draft.title,
            exercise_type: draft
                .exercise_type
                .unwrap_or_else(|| DEFAULT_EXERCISE_TYPE.to_owned()),
            equipment_category: draft.equipment_category,
            muscle_group: draft.primary_muscle_group,
            other_muscles: draft.secondary_muscle_groups.unwrap_or_default(),
            is_unilateral: draft.is_unilateral,
        },
    }
}

/// `create_routine_folder` body
#[must_use]
pub fn routine_folder_payload(draft: RoutineFolderDraft) -> RoutineFolderPayload {
    RoutineFolderPayload {
        routine_folder: RoutineFolderBody { title: draft.title },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RepRange, ResourceId, SetType};
    use serde_json::json;

    fn leg_day() -> WorkoutDraft {
        WorkoutDraft {
            title: "Leg Day".to_owned(),
            description: None,
            start_time: "2024-01-01T10:00:00Z".to_owned(),
            end_time: "2024-01-01T11:00:00Z".to_owned(),
            is_private: None,
            exercises: vec![WorkoutExerciseDraft {
                exercise_template_id: "abc".to_owned(),
                superset_id: None,
                notes: None,
                sets: vec![WorkoutSetDraft {
                    weight_kg: Some(100.0),
                    reps: Some(5),
                    ..WorkoutSetDraft::default()
                }],
            }],
        }
    }

    #[test]
    fn test_workout_defaults_and_wire_shape() {
        let payload = workout_payload(leg_day());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "workout": {
                    "title": "Leg Day",
                    "start_time": "2024-01-01T10:00:00Z",
                    "end_time": "2024-01-01T11:00:00Z",
                    "is_private": false,
                    "exercises": [{
                        "exercise_template_id": "abc",
                        "superset_id": null,
                        "sets": [{
                            "type": "normal",
                            "weight_kg": 100.0,
                            "reps": 5,
                            "distance_meters": null,
                            "duration_seconds": null,
                            "custom_metric": null,
                            "rpe": null
                        }]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_workout_preserves_structure() {
        let mut draft = leg_day();
        draft.is_private = Some(true);
        draft.description = Some("Heavy".to_owned());
        draft.exercises.push(WorkoutExerciseDraft {
            exercise_template_id: "def".to_owned(),
            superset_id: Some(1),
            notes: Some("slow eccentric".to_owned()),
            sets: vec![
                WorkoutSetDraft {
                    set_type: Some(SetType::Warmup),
                    ..WorkoutSetDraft::default()
                },
                WorkoutSetDraft {
                    rpe: Some(8.5),
                    ..WorkoutSetDraft::default()
                },
            ],
        });

        let body = workout_payload(draft.clone()).workout;
        assert_eq!(body.title, draft.title);
        assert_eq!(body.start_time, draft.start_time);
        assert_eq!(body.end_time, draft.end_time);
        assert!(body.is_private);
        assert_eq!(body.exercises.len(), draft.exercises.len());
        for (sent, drafted) in body.exercises.iter().zip(&draft.exercises) {
            assert_eq!(sent.sets.len(), drafted.sets.len());
            assert_eq!(sent.exercise_template_id, drafted.exercise_template_id);
        }
        assert_eq!(body.exercises[1].sets[0].set_type, SetType::Warmup);
        assert_eq!(body.exercises[1].sets[1].rpe, Some(8.5));
    }

    #[test]
    fn test_routine_omits_absent_folder() {
        let draft = RoutineDraft {
            title: "Push".to_owned(),
            folder_id: None,
            notes: None,
            exercises: vec![RoutineExerciseDraft {
                exercise_template_id: "bench".to_owned(),
                superset_id: None,
                rest_seconds: Some(90),
                notes: None,
                sets: vec![RoutineSetDraft {
                    reps: Some(8),
                    rep_range: Some(RepRange { start: 8, end: 12 }),
                    ..RoutineSetDraft::default()
                }],
            }],
        };
        let value = serde_json::to_value(routine_payload(draft.clone())).unwrap();
        assert!(value["routine"].get("folder_id").is_none());
        assert_eq!(value["routine"]["exercises"][0]["rest_seconds"], 90);
        assert_eq!(
            value["routine"]["exercises"][0]["sets"][0]["rep_range"],
            json!({"start": 8, "end": 12})
        );

        let value = serde_json::to_value(routine_payload(RoutineDraft {
            folder_id: Some(ResourceId::Number(3)),
            ..draft
        }))
        .unwrap();
        assert_eq!(value["routine"]["folder_id"], 3);
    }

    #[test]
    fn test_exercise_template_renames() {
        let payload = exercise_template_payload(ExerciseTemplateDraft {
            title: "Zercher Squat".to_owned(),
            exercise_type: None,
            equipment_category: "barbell".to_owned(),
            primary_muscle_group: "quadriceps".to_owned(),
            secondary_muscle_groups: None,
            is_unilateral: None,
        });
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "exercise": {
                    "title": "Zercher Squat",
                    "exercise_type": "weight_reps",
                    "equipment_category": "barbell",
                    "muscle_group": "quadriceps",
                    "other_muscles": []
                }
            })
        );
    }

    #[test]
    fn test_routine_folder_envelope() {
        let payload = routine_folder_payload(RoutineFolderDraft {
            title: "Strength".to_owned(),
        });
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"routine_folder": {"title": "Strength"}})
        );
    }
}
