// ABOUTME: Page-size limits for each paginated Hevy resource
// ABOUTME: Defaults and caps are enforced independently by the validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default and maximum `page_size` for one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Resource name, used in log lines
    pub resource: &'static str,
    /// Applied when `page_size` is absent
    pub default_page_size: u32,
    /// Largest accepted `page_size`
    pub max_page_size: u32,
}

/// First page
pub const DEFAULT_PAGE: u32 = 1;

/// `get_workouts`
pub const WORKOUTS: PageLimits = PageLimits {
    resource: "workouts",
    default_page_size: 10,
    max_page_size: 10,
};

/// `get_workout_events`
pub const WORKOUT_EVENTS: PageLimits = PageLimits {
    resource: "workout_events",
    default_page_size: 5,
    max_page_size: 5,
};

/// `get_routines`; the API accepts more than the tool asks for by default
pub const ROUTINES: PageLimits = PageLimits {
    resource: "routines",
    default_page_size: 5,
    max_page_size: 10,
};

/// `get_exercise_templates`
pub const EXERCISE_TEMPLATES: PageLimits = PageLimits {
    resource: "exercise_templates",
    default_page_size: 20,
    max_page_size: 20,
};

/// `get_routine_folders`
pub const ROUTINE_FOLDERS: PageLimits = PageLimits {
    resource: "routine_folders",
    default_page_size: 10,
    max_page_size: 10,
};
