// ABOUTME: MCP protocol schema definitions and the static Hevy tool catalog
// ABOUTME: Type-safe tool schemas, tool responses, and initialize handshake structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for the MCP messages this server produces and the
//! catalog published through `tools/list`. The catalog is declarative data:
//! one [`ToolSchema`] per [`ToolId`], in [`ToolId::ALL`] order.

use crate::tools::ToolId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Argument schema
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object` for tool arguments
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Argument properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required argument names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value applied when the argument is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Element schema for arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    fn typed(property_type: &str) -> Self {
        Self {
            property_type: property_type.to_owned(),
            description: None,
            default: None,
            items: None,
        }
    }

    fn string() -> Self {
        Self::typed("string")
    }

    fn number() -> Self {
        Self::typed("number")
    }

    fn boolean() -> Self {
        Self::typed("boolean")
    }

    fn array_of(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::typed("array")
        }
    }

    fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Tool call parameters of `tools/call`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name
    pub name: String,
    /// Raw arguments; absent means an empty object
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Tool Response after execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Ordered content blocks
    pub content: Vec<Content>,
    /// Set when the tool failed
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    /// Successful response made of text blocks
    #[must_use]
    pub fn success<I, S>(blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: blocks.into_iter().map(Content::text).collect(),
            is_error: false,
        }
    }

    /// Failed response with a single text block
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(message)],
            is_error: true,
        }
    }

    /// Text of every block, in order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.content
            .iter()
            .map(|block| match block {
                Content::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// Content types for MCP messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text block
    #[serde(rename = "text")]
    Text {
        /// Block text
        text: String,
    },
}

impl Content {
    /// Text block
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// `tools/list` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResponse {
    /// Catalog
    pub tools: Vec<ToolSchema>,
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability; serialized as `{}`
    pub tools: ToolsCapability,
}

/// Tools capability
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Catalog change notifications; never emitted since the catalog is static
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Negotiated protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identity
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Advertised capabilities
    pub capabilities: ServerCapabilities,
    /// Usage hint for the client model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Create a new initialize response with current server configuration
    #[must_use]
    pub fn new(protocol_version: String, server_name: String, server_version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability::default(),
            },
            instructions: Some(hevy_core::constants::protocol::SERVER_INSTRUCTIONS.to_owned()),
        }
    }
}

/// Get all available tools (public interface for tests)
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    ToolId::ALL.into_iter().map(tool_schema).collect()
}

/// Catalog entry for one tool
#[must_use]
pub fn tool_schema(tool: ToolId) -> ToolSchema {
    let (properties, required) = input_properties(tool);
    ToolSchema {
        name: tool.name().to_owned(),
        description: tool.description().to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_owned(), schema))
                    .collect(),
            ),
            required: (!required.is_empty())
                .then(|| required.iter().map(|name| (*name).to_owned()).collect()),
        },
    }
}

type Properties = Vec<(&'static str, PropertySchema)>;

fn page_property(description: bool) -> PropertySchema {
    let page = PropertySchema::number().with_default(json!(1));
    if description {
        page.described("Page number (Must be 1 or greater)")
    } else {
        page
    }
}

fn page_size_property(default: u32) -> PropertySchema {
    PropertySchema::number().with_default(json!(default))
}

fn exercises_property() -> PropertySchema {
    PropertySchema::array_of(PropertySchema::typed("object"))
}

fn input_properties(tool: ToolId) -> (Properties, &'static [&'static str]) {
    match tool {
        ToolId::GetWorkouts => (
            vec![
                ("page", page_property(true)),
                (
                    "page_size",
                    page_size_property(10).described("Number of items per page (Max 10)"),
                ),
            ],
            &[],
        ),
        ToolId::GetWorkout => (
            vec![(
                "workout_id",
                PropertySchema::string().described("The ID of the workout to retrieve"),
            )],
            &["workout_id"],
        ),
        ToolId::CreateWorkout => (
            vec![
                ("title", PropertySchema::string().described("Workout title")),
                (
                    "start_time",
                    PropertySchema::string().described("Start time (ISO 8601)"),
                ),
                (
                    "end_time",
                    PropertySchema::string().described("End time (ISO 8601)"),
                ),
                (
                    "exercises",
                    exercises_property().described("Array of exercises with sets"),
                ),
                (
                    "description",
                    PropertySchema::string().described("Workout description (optional)"),
                ),
                (
                    "is_private",
                    PropertySchema::boolean().described("Privacy setting (optional)"),
                ),
            ],
            &["title", "start_time", "end_time", "exercises"],
        ),
        ToolId::UpdateWorkout => (
            vec![
                (
                    "workout_id",
                    PropertySchema::string().described("The ID of the workout to update"),
                ),
                ("title", PropertySchema::string().described("Workout title")),
                (
                    "start_time",
                    PropertySchema::string().described("Start time (ISO 8601)"),
                ),
                (
                    "end_time",
                    PropertySchema::string().described("End time (ISO 8601)"),
                ),
                ("exercises", exercises_property()),
                ("description", PropertySchema::string()),
                ("is_private", PropertySchema::boolean()),
            ],
            &["workout_id", "title", "start_time", "end_time", "exercises"],
        ),
        ToolId::GetWorkoutsCount => (Vec::new(), &[]),
        ToolId::GetWorkoutEvents => (
            vec![
                ("page", page_property(false)),
                ("page_size", page_size_property(5)),
                (
                    "since",
                    PropertySchema::string().described(
                        "Get events since this date (ISO 8601 format, e.g., 2024-01-01T00:00:00Z)",
                    ),
                ),
            ],
            &[],
        ),
        ToolId::GetRoutines => (
            vec![
                ("page", page_property(false)),
                ("page_size", page_size_property(5)),
            ],
            &[],
        ),
        ToolId::GetRoutine => (
            vec![(
                "routine_id",
                PropertySchema::string().described("The ID of the routine to retrieve"),
            )],
            &["routine_id"],
        ),
        ToolId::CreateRoutine => (
            vec![
                ("title", PropertySchema::string().described("Routine title")),
                ("exercises", exercises_property()),
                (
                    "folder_id",
                    PropertySchema::string().described("Folder ID (optional)"),
                ),
                ("notes", PropertySchema::string().described("Notes (optional)")),
            ],
            &["title", "exercises"],
        ),
        ToolId::UpdateRoutine => (
            vec![
                (
                    "routine_id",
                    PropertySchema::string().described("The ID of the routine to update"),
                ),
                ("title", PropertySchema::string()),
                ("exercises", exercises_property()),
                ("folder_id", PropertySchema::string()),
                ("notes", PropertySchema::string()),
            ],
            &["routine_id", "title", "exercises"],
        ),
        ToolId::GetExerciseTemplates => (
            vec![
                ("page", page_property(false)),
                ("page_size", page_size_property(20)),
            ],
            &[],
        ),
        ToolId::GetExerciseTemplate => (
            vec![(
                "exercise_template_id",
                PropertySchema::string().described("The ID of the exercise template"),
            )],
            &["exercise_template_id"],
        ),
        ToolId::CreateExerciseTemplate => (
            vec![
                ("title", PropertySchema::string().described("Exercise name")),
                (
                    "equipment_category",
                    PropertySchema::string().described("Equipment category"),
                ),
                (
                    "primary_muscle_group",
                    PropertySchema::string().described("Primary muscle group"),
                ),
                (
                    "secondary_muscle_groups",
                    PropertySchema::array_of(PropertySchema::string())
                        .described("Secondary muscle groups (optional)"),
                ),
                (
                    "is_unilateral",
                    PropertySchema::boolean().described("Whether exercise is unilateral (optional)"),
                ),
            ],
            &["title", "equipment_category", "primary_muscle_group"],
        ),
        ToolId::GetExerciseHistory => (
            vec![
                (
                    "exercise_template_id",
                    PropertySchema::string().described("The ID of the exercise template"),
                ),
                (
                    "start_date",
                    PropertySchema::string().described("Optional start date (ISO 8601)"),
                ),
                (
                    "end_date",
                    PropertySchema::string().described("Optional end date (ISO 8601)"),
                ),
            ],
            &["exercise_template_id"],
        ),
        ToolId::GetRoutineFolders => (
            vec![
                ("page", page_property(false)),
                ("page_size", page_size_property(10)),
            ],
            &[],
        ),
        ToolId::GetRoutineFolder => (
            vec![(
                "routine_folder_id",
                PropertySchema::string().described("The ID of the routine folder"),
            )],
            &["routine_folder_id"],
        ),
        ToolId::CreateRoutineFolder => (
            vec![("title", PropertySchema::string().described("Folder title"))],
            &["title"],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_one_entry_per_tool() {
        let tools = get_tools();
        assert_eq!(tools.len(), 17);
        for (schema, tool) in tools.iter().zip(ToolId::ALL) {
            assert_eq!(schema.name, tool.name());
            assert_eq!(schema.input_schema.schema_type, "object");
        }
    }

    #[test]
    fn test_required_fields_exist_in_properties() {
        for schema in get_tools() {
            let properties = schema.input_schema.properties.unwrap_or_default();
            for field in schema.input_schema.required.unwrap_or_default() {
                assert!(
                    properties.contains_key(&field),
                    "{} requires undeclared {field}",
                    schema.name
                );
            }
        }
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(tool_schema(ToolId::CreateExerciseTemplate)).unwrap();
        assert_eq!(value["inputSchema"]["type"], "object");
        assert_eq!(
            value["inputSchema"]["properties"]["secondary_muscle_groups"]["items"]["type"],
            "string"
        );
        assert_eq!(
            value["inputSchema"]["required"],
            json!(["title", "equipment_category", "primary_muscle_group"])
        );

        let count = serde_json::to_value(tool_schema(ToolId::GetWorkoutsCount)).unwrap();
        assert_eq!(count["inputSchema"]["properties"], json!({}));
        assert!(count["inputSchema"].get("required").is_none());

        let events = serde_json::to_value(tool_schema(ToolId::GetWorkoutEvents)).unwrap();
        assert_eq!(events["inputSchema"]["properties"]["page_size"]["default"], 5);
    }

    #[test]
    fn test_tool_response_shapes() {
        let ok = serde_json::to_value(ToolResponse::success(["a", "b"])).unwrap();
        assert_eq!(
            ok,
            json!({"content": [{"type": "text", "text": "a"}, {"type": "text", "text": "b"}], "isError": false})
        );
        let failed = ToolResponse::error("boom");
        assert!(failed.is_error);
        assert_eq!(failed.texts(), vec!["boom"]);
    }
}
