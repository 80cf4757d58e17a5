// ABOUTME: Routine folder models and the folder creation payload
// ABOUTME: Folders use numeric ids and an ordering index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExtraFields, ResourceId};
use serde::{Deserialize, Serialize};

/// A routine folder as returned by the Hevy API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutineFolder {
    /// Folder id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Display position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Last modification time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `GET /v1/routine_folders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutineFoldersPage {
    /// Current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Folders on this page
    #[serde(default)]
    pub routine_folders: Vec<RoutineFolder>,
    /// Fields not modelled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Folder arguments after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineFolderDraft {
    /// Non-empty title
    pub title: String,
}

/// Body of `POST /v1/routine_folders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineFolderPayload {
    /// Envelope
    pub routine_folder: RoutineFolderBody,
}

/// Folder fields as Hevy expects them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineFolderBody {
    /// Title
    pub title: String,
}
