// ABOUTME: Integration tests for tool dispatch against a recording Hevy API mock
// ABOUTME: Covers success formatting, fail-fast validation, and error classification per tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use hevy_core::errors::ProviderError;
use hevy_mcp_server::tools::{ToolDispatcher, ToolId};
use helpers::mock_hevy_api::MockHevyApi;
use serde_json::{json, Value};
use std::sync::Arc;

fn dispatcher(mock: &Arc<MockHevyApi>) -> ToolDispatcher {
    ToolDispatcher::new(mock.clone())
}

fn leg_day() -> Value {
    json!({
        "title": "Leg Day",
        "start_time": "2024-01-01T10:00:00Z",
        "end_time": "2024-01-01T11:00:00Z",
        "exercises": [
            {"exercise_template_id": "abc", "sets": [{"weight_kg": 100, "reps": 5}]}
        ]
    })
}

fn workout(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "start_time": "2024-01-01T10:00:00Z",
        "end_time": "2024-01-01T11:00:00Z",
        "exercises": []
    })
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[tokio::test]
async fn test_get_workouts_summarizes_page_position() {
    let mock = Arc::new(MockHevyApi::new().with_response(
        "get_workouts",
        json!({
            "page": 1,
            "page_count": 3,
            "workouts": [workout("w1", "Push"), workout("w2", "Pull")]
        }),
    ));

    let response = dispatcher(&mock)
        .dispatch("get_workouts", Some(json!({"page": 1, "page_size": 10})))
        .await;

    assert!(!response.is_error);
    let texts = response.texts();
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[0], "Retrieved 2 workouts (page 1 of 3)");
    assert!(texts[1].contains("Push"));
    assert!(texts[1].contains("Pull"));
    let dump: Value = serde_json::from_str(texts[2]).unwrap();
    assert_eq!(dump["workouts"][1]["id"], "w2");

    let call = mock.single_call();
    assert_eq!(call.method, "get_workouts");
    assert_eq!(call.args, json!({"page": 1, "pageSize": 10}));
}

#[tokio::test]
async fn test_create_workout_logs_transformed_payload() {
    let mock = Arc::new(
        MockHevyApi::new().with_response("create_workout", workout("new-id", "Leg Day")),
    );

    let response = dispatcher(&mock)
        .dispatch("create_workout", Some(leg_day()))
        .await;

    assert!(!response.is_error, "{:?}", response.texts());
    assert!(response.texts()[0].starts_with("✓ Successfully logged workout: Leg Day"));

    let call = mock.single_call();
    assert_eq!(call.method, "create_workout");
    let body = &call.args["workout"];
    assert_eq!(body["title"], "Leg Day");
    assert_eq!(body["start_time"], "2024-01-01T10:00:00Z");
    assert_eq!(body["end_time"], "2024-01-01T11:00:00Z");
    assert_eq!(body["is_private"], false);
    assert_eq!(body["exercises"].as_array().unwrap().len(), 1);
    let set = &body["exercises"][0]["sets"][0];
    assert_eq!(set["type"], "normal");
    assert_eq!(set["weight_kg"].as_f64(), Some(100.0));
    assert_eq!(set["reps"], 5);
    assert_eq!(set["rpe"], Value::Null);
    assert_eq!(body["exercises"][0]["superset_id"], Value::Null);
}

#[tokio::test]
async fn test_history_with_inverted_range_never_calls_remote() {
    let mock = Arc::new(MockHevyApi::new());

    let response = dispatcher(&mock)
        .dispatch(
            "get_exercise_history",
            Some(json!({
                "exercise_template_id": "abc",
                "start_date": "2024-02-01",
                "end_date": "2024-01-01"
            })),
        )
        .await;

    assert!(response.is_error);
    assert_eq!(
        response.texts(),
        vec!["Validation error: end_date must be after start_date"]
    );
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_routines_page_size_over_cap_never_calls_remote() {
    let mock = Arc::new(MockHevyApi::new());

    let response = dispatcher(&mock)
        .dispatch("get_routines", Some(json!({"page_size": 999})))
        .await;

    assert!(response.is_error);
    assert_eq!(
        response.texts(),
        vec!["Validation error: page_size must be between 1 and 10"]
    );
    assert_eq!(mock.call_count(), 0);
}

// ============================================================================
// Fail-fast validation across every mutating tool
// ============================================================================

#[tokio::test]
async fn test_no_remote_call_on_any_validation_failure() {
    let cases = [
        ("get_workouts", json!({"page": 0})),
        ("get_workout", json!({})),
        ("create_workout", json!({"title": "", "exercises": []})),
        ("update_workout", leg_day()),
        ("get_workout_events", json!({"since": "yesterday"})),
        ("get_routine", json!({"routine_id": ""})),
        ("create_routine", json!({"title": "Push", "exercises": []})),
        ("update_routine", json!({"title": "Push"})),
        ("get_exercise_templates", json!({"page_size": 21})),
        ("get_exercise_template", json!({"exercise_template_id": true})),
        (
            "create_exercise_template",
            json!({"title": "Curl", "equipment_category": "dumbbell"}),
        ),
        ("get_exercise_history", json!({"exercise_template_id": "abc", "start_date": "2024-13-01"})),
        ("get_routine_folders", json!({"page": "2"})),
        ("get_routine_folder", json!({})),
        ("create_routine_folder", json!({"title": "   "})),
    ];

    for (tool, args) in cases {
        let mock = Arc::new(MockHevyApi::new());
        let response = dispatcher(&mock).dispatch(tool, Some(args)).await;
        assert!(response.is_error, "{tool} should fail validation");
        assert!(
            response.texts()[0].starts_with("Validation error: "),
            "{tool}: {:?}",
            response.texts()
        );
        assert_eq!(response.content.len(), 1);
        assert_eq!(mock.call_count(), 0, "{tool} reached the remote API");
    }
}

#[tokio::test]
async fn test_non_object_arguments_are_a_validation_error() {
    let mock = Arc::new(MockHevyApi::new());
    let response = dispatcher(&mock)
        .dispatch("get_workouts", Some(json!([1, 2])))
        .await;
    assert!(response.is_error);
    assert!(response.texts()[0].starts_with("Validation error: "));
    assert_eq!(mock.call_count(), 0);
}

// ============================================================================
// Unknown tools and remote failures
// ============================================================================

#[tokio::test]
async fn test_unknown_tool_is_classified() {
    let mock = Arc::new(MockHevyApi::new());
    let response = dispatcher(&mock)
        .dispatch("delete_everything", Some(json!({})))
        .await;
    assert!(response.is_error);
    assert_eq!(response.texts(), vec!["Unknown tool: delete_everything"]);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_remote_not_found_is_classified_with_status() {
    let mock = Arc::new(MockHevyApi::new().with_error(
        "get_workout",
        ProviderError::Api {
            status: 404,
            message: "Workout not found".to_owned(),
        },
    ));

    let response = dispatcher(&mock)
        .dispatch("get_workout", Some(json!({"workout_id": "missing"})))
        .await;

    assert!(response.is_error);
    assert_eq!(
        response.texts(),
        vec!["Hevy API error (404): Workout not found. The requested resource was not found."]
    );
    assert_eq!(mock.single_call().args, json!({"id": "missing"}));
}

#[tokio::test]
async fn test_remote_network_failure_is_classified_without_status() {
    let mock = Arc::new(MockHevyApi::new().with_error(
        "get_workouts_count",
        ProviderError::Network("connection refused".to_owned()),
    ));

    let response = dispatcher(&mock).dispatch("get_workouts_count", None).await;

    assert!(response.is_error);
    assert_eq!(
        response.texts(),
        vec!["Hevy API request failed: connection refused"]
    );
}

// ============================================================================
// Per-tool routing
// ============================================================================

#[tokio::test]
async fn test_defaults_applied_before_validation() {
    let mock = Arc::new(
        MockHevyApi::new()
            .with_response("get_routines", json!({"page": 1, "page_count": 1, "routines": []}))
            .with_response(
                "get_workout_events",
                json!({"page": 1, "page_count": 1, "events": []}),
            ),
    );
    let dispatcher = dispatcher(&mock);

    dispatcher.dispatch("get_routines", None).await;
    dispatcher
        .dispatch("get_workout_events", Some(json!({"page": null})))
        .await;

    let calls = mock.calls();
    assert_eq!(calls[0].args, json!({"page": 1, "pageSize": 5}));
    assert_eq!(calls[1].args, json!({"page": 1, "pageSize": 5}));
}

#[tokio::test]
async fn test_workout_events_forward_since() {
    let mock = Arc::new(MockHevyApi::new().with_response(
        "get_workout_events",
        json!({
            "page": 1,
            "page_count": 1,
            "events": [
                {"type": "deleted", "id": "w9", "deleted_at": "2024-03-01T00:00:00Z"}
            ]
        }),
    ));

    let response = dispatcher(&mock)
        .dispatch(
            "get_workout_events",
            Some(json!({"since": "2024-01-01T00:00:00Z", "page_size": 5})),
        )
        .await;

    assert!(!response.is_error, "{:?}", response.texts());
    assert_eq!(response.texts()[0], "Retrieved 1 workout events (page 1 of 1)");
    assert_eq!(
        mock.single_call().args,
        json!({"page": 1, "pageSize": 5, "since": "2024-01-01T00:00:00Z"})
    );
}

#[tokio::test]
async fn test_unrecognized_event_type_renders_as_update() {
    let mock = Arc::new(MockHevyApi::new().with_response(
        "get_workout_events",
        json!({
            "page": 1,
            "page_count": 1,
            "events": [
                {"type": "deleted", "id": "w9", "deleted_at": "2024-03-01T00:00:00Z"},
                {"type": "created", "workout": {"id": "w10", "title": "Core", "updated_at": "2024-03-02T00:00:00Z"}}
            ]
        }),
    ));

    let response = dispatcher(&mock).dispatch("get_workout_events", None).await;

    assert!(!response.is_error, "{:?}", response.texts());
    let texts = response.texts();
    assert_eq!(texts[0], "Retrieved 2 workout events (page 1 of 1)");
    assert_eq!(
        texts[1],
        "1. DELETED - Workout ID: w9\n   Deleted at: 2024-03-01T00:00:00Z\n\
         2. UPDATED - Core\n   Workout ID: w10\n   Updated: 2024-03-02T00:00:00Z"
    );
    let dump: Value = serde_json::from_str(texts[2]).unwrap();
    assert_eq!(dump["events"][1]["type"], "created");
}

#[tokio::test]
async fn test_update_workout_sends_id_and_payload() {
    let mut args = leg_day();
    args["workout_id"] = json!("w1");
    let mock = Arc::new(MockHevyApi::new().with_response("update_workout", workout("w1", "Leg Day")));

    let response = dispatcher(&mock).dispatch("update_workout", Some(args)).await;

    assert!(!response.is_error, "{:?}", response.texts());
    assert!(response.texts()[0].starts_with("✓ Successfully updated workout: Leg Day"));
    let call = mock.single_call();
    assert_eq!(call.args["id"], "w1");
    assert_eq!(call.args["payload"]["workout"]["title"], "Leg Day");
    assert!(call.args["payload"]["workout"].get("workout_id").is_none());
}

#[tokio::test]
async fn test_create_routine_omits_absent_folder() {
    let mock = Arc::new(MockHevyApi::new().with_response(
        "create_routine",
        json!({"id": "r1", "title": "Push", "folder_id": null, "exercises": []}),
    ));

    let response = dispatcher(&mock)
        .dispatch(
            "create_routine",
            Some(json!({
                "title": "Push",
                "exercises": [{
                    "exercise_template_id": "bench",
                    "rest_seconds": 90,
                    "sets": [{"weight_kg": 60, "rep_range": {"start": 8, "end": 12}}]
                }]
            })),
        )
        .await;

    assert!(!response.is_error, "{:?}", response.texts());
    let body = &mock.single_call().args["routine"];
    assert_eq!(body["title"], "Push");
    assert!(body.get("folder_id").is_none());
    assert_eq!(body["exercises"][0]["rest_seconds"], 90);
    assert_eq!(
        body["exercises"][0]["sets"][0]["rep_range"],
        json!({"start": 8, "end": 12})
    );
}

#[tokio::test]
async fn test_update_routine_sends_id_and_payload() {
    let mock = Arc::new(MockHevyApi::new().with_response(
        "update_routine",
        json!({"id": "r1", "title": "Pull", "exercises": []}),
    ));

    let response = dispatcher(&mock)
        .dispatch(
            "update_routine",
            Some(json!({
                "routine_id": "r1",
                "title": "Pull",
                "folder_id": 42,
                "exercises": [{"exercise_template_id": "row", "sets": [{"reps": 10}]}]
            })),
        )
        .await;

    assert!(!response.is_error, "{:?}", response.texts());
    let call = mock.single_call();
    assert_eq!(call.args["id"], "r1");
    assert_eq!(call.args["payload"]["routine"]["folder_id"], 42);
}

#[tokio::test]
async fn test_create_exercise_template_maps_muscle_groups() {
    let mock = Arc::new(
        MockHevyApi::new().with_response("create_exercise_template", json!({"id": 1234})),
    );

    let response = dispatcher(&mock)
        .dispatch(
            "create_exercise_template",
            Some(json!({
                "title": "Zercher Squat",
                "equipment_category": "barbell",
                "primary_muscle_group": "quadriceps",
                "secondary_muscle_groups": ["glutes"]
            })),
        )
        .await;

    assert!(!response.is_error, "{:?}", response.texts());
    assert_eq!(
        response.texts(),
        vec![
            "✓ Successfully created custom exercise template: Zercher Squat\n\
             Exercise Template ID: 1234",
            "{\n  \"id\": 1234\n}",
        ]
    );
    let body = &mock.single_call().args["exercise"];
    assert_eq!(body["exercise_type"], "weight_reps");
    assert_eq!(body["muscle_group"], "quadriceps");
    assert_eq!(body["other_muscles"], json!(["glutes"]));
}

#[tokio::test]
async fn test_exercise_history_forwards_present_bounds_only() {
    let mock = Arc::new(
        MockHevyApi::new().with_response("get_exercise_history", json!({"exercise_history": []})),
    );

    let response = dispatcher(&mock)
        .dispatch(
            "get_exercise_history",
            Some(json!({"exercise_template_id": "abc", "start_date": "2024-01-01"})),
        )
        .await;

    assert!(!response.is_error, "{:?}", response.texts());
    assert_eq!(response.texts()[0], "Retrieved 0 exercise history entries");
    assert_eq!(
        mock.single_call().args,
        json!({"id": "abc", "query": {"start_date": "2024-01-01"}})
    );
}

#[tokio::test]
async fn test_routine_folder_accepts_alias_and_numeric_id() {
    let mock = Arc::new(MockHevyApi::new().with_response(
        "get_routine_folder",
        json!({"id": 7, "index": 0, "title": "Strength"}),
    ));

    let response = dispatcher(&mock)
        .dispatch("get_routine_folder", Some(json!({"folder_id": 7})))
        .await;

    assert!(!response.is_error, "{:?}", response.texts());
    assert_eq!(response.texts().len(), 2);
    assert_eq!(mock.single_call().args, json!({"id": "7"}));
}

#[tokio::test]
async fn test_create_routine_folder() {
    let mock = Arc::new(MockHevyApi::new().with_response(
        "create_routine_folder",
        json!({"id": 9, "index": 0, "title": "Strength"}),
    ));

    let response = dispatcher(&mock)
        .dispatch("create_routine_folder", Some(json!({"title": "Strength"})))
        .await;

    let texts = response.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(
        texts[0],
        "✓ Successfully created routine folder: Strength\nFolder ID: 9\nIndex: 0"
    );
    assert_eq!(
        mock.single_call().args,
        json!({"routine_folder": {"title": "Strength"}})
    );
}

#[tokio::test]
async fn test_every_tool_routes_to_its_own_remote_method() {
    for tool in ToolId::ALL {
        let mock = Arc::new(MockHevyApi::new());
        let args = match tool {
            ToolId::GetWorkout | ToolId::UpdateWorkout => {
                let mut args = leg_day();
                args["workout_id"] = json!("w1");
                args
            }
            ToolId::CreateWorkout => leg_day(),
            ToolId::GetRoutine => json!({"routine_id": "r1"}),
            ToolId::CreateRoutine | ToolId::UpdateRoutine => json!({
                "routine_id": "r1",
                "title": "Push",
                "exercises": [{"exercise_template_id": "bench", "sets": [{"reps": 5}]}]
            }),
            ToolId::GetExerciseTemplate | ToolId::GetExerciseHistory => {
                json!({"exercise_template_id": "abc"})
            }
            ToolId::CreateExerciseTemplate => json!({
                "title": "Curl",
                "equipment_category": "dumbbell",
                "primary_muscle_group": "biceps"
            }),
            ToolId::GetRoutineFolder => json!({"routine_folder_id": 1}),
            ToolId::CreateRoutineFolder => json!({"title": "Folder"}),
            _ => json!({}),
        };

        // No canned response: the mock fails with a network error after recording the call
        let response = dispatcher(&mock).dispatch(tool.name(), Some(args)).await;
        assert!(response.is_error);
        assert!(
            response.texts()[0].starts_with("Hevy API request failed: "),
            "{tool}: {:?}",
            response.texts()
        );
        assert_eq!(mock.single_call().method, tool.name());
    }
}

#[tokio::test]
async fn test_concurrent_dispatches_are_independent() {
    let mock = Arc::new(MockHevyApi::new().with_response("get_workouts_count", json!({"workout_count": 42})));
    let dispatcher = dispatcher(&mock);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move { dispatcher.dispatch("get_workouts_count", None).await })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.texts()[0], "Total workouts: 42");
    }
    assert_eq!(mock.call_count(), 8);
}
