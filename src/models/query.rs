// ABOUTME: Query parameters for paginated and filtered Hevy API reads
// ABOUTME: Serialized directly into the request query string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// `page` / `pageSize` query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

/// Workout events query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsQuery {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    /// Only events after this ISO 8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

/// Exercise history date filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryQuery {
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
