// ABOUTME: Integration tests for the tool catalog against the dispatcher's routing table
// ABOUTME: Every catalog entry dispatches and every routable name appears in the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use hevy_mcp_server::mcp::schema::get_tools;
use hevy_mcp_server::tools::{ToolDispatcher, ToolId};
use helpers::mock_hevy_api::MockHevyApi;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_catalog_and_tool_ids_are_a_bijection() {
    let catalog: Vec<String> = get_tools().into_iter().map(|tool| tool.name).collect();
    let unique: HashSet<&String> = catalog.iter().collect();
    assert_eq!(catalog.len(), 17);
    assert_eq!(unique.len(), 17, "duplicate catalog names");

    for name in &catalog {
        let tool = ToolId::from_name(name).unwrap_or_else(|| panic!("{name} has no route"));
        assert_eq!(tool.name(), name);
    }
    for tool in ToolId::ALL {
        assert!(catalog.iter().any(|name| name == tool.name()));
    }
}

#[test]
fn test_required_fields_match_tool_table() {
    let expected: [(&str, &[&str]); 17] = [
        ("get_workouts", &[]),
        ("get_workout", &["workout_id"]),
        ("create_workout", &["title", "start_time", "end_time", "exercises"]),
        (
            "update_workout",
            &["workout_id", "title", "start_time", "end_time", "exercises"],
        ),
        ("get_workouts_count", &[]),
        ("get_workout_events", &[]),
        ("get_routines", &[]),
        ("get_routine", &["routine_id"]),
        ("create_routine", &["title", "exercises"]),
        ("update_routine", &["routine_id", "title", "exercises"]),
        ("get_exercise_templates", &[]),
        ("get_exercise_template", &["exercise_template_id"]),
        (
            "create_exercise_template",
            &["title", "equipment_category", "primary_muscle_group"],
        ),
        ("get_exercise_history", &["exercise_template_id"]),
        ("get_routine_folders", &[]),
        ("get_routine_folder", &["routine_folder_id"]),
        ("create_routine_folder", &["title"]),
    ];

    let tools = get_tools();
    for (name, required) in expected {
        let schema = tools.iter().find(|tool| tool.name == name).unwrap();
        let value = serde_json::to_value(schema).unwrap();
        let listed: HashSet<&str> = value["inputSchema"]["required"]
            .as_array()
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let required: HashSet<&str> = required.iter().copied().collect();
        assert_eq!(listed, required, "{name}");
        assert_eq!(value["inputSchema"]["type"], "object");
    }
}

#[test]
fn test_page_size_defaults_match_limits() {
    let defaults = [
        ("get_workouts", 10),
        ("get_workout_events", 5),
        ("get_routines", 5),
        ("get_exercise_templates", 20),
        ("get_routine_folders", 10),
    ];
    let tools = get_tools();
    for (name, default) in defaults {
        let value = serde_json::to_value(tools.iter().find(|tool| tool.name == name).unwrap())
            .unwrap();
        assert_eq!(
            value["inputSchema"]["properties"]["page_size"]["default"],
            json!(default),
            "{name}"
        );
        assert_eq!(
            value["inputSchema"]["properties"]["page"]["default"],
            json!(1),
            "{name}"
        );
    }
}

#[tokio::test]
async fn test_every_catalog_name_dispatches_to_a_pipeline() {
    let dispatcher = ToolDispatcher::new(Arc::new(MockHevyApi::new()));
    for schema in get_tools() {
        let response = dispatcher.dispatch(&schema.name, None).await;
        let text = response.texts()[0].to_owned();
        assert!(
            !text.starts_with("Unknown tool"),
            "{} is missing from the routing table",
            schema.name
        );
    }
}
