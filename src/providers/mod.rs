// ABOUTME: Remote collaborator module: the Hevy API trait and its HTTP implementation
// ABOUTME: Tool handlers depend only on the trait so tests can substitute a mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Hevy API trait
pub mod core;
/// reqwest-backed client
pub mod hevy;

pub use self::core::{HevyApi, ProviderResult};
pub use self::hevy::HevyClient;
