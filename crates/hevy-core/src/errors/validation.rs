// ABOUTME: Validation failure type raised before any remote call is made
// ABOUTME: Carries the offending field, a failure kind, and the caller-facing message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Required field absent or empty
    Missing,
    /// Field present with the wrong JSON type
    InvalidType,
    /// Numeric value outside its allowed range
    OutOfRange,
    /// String that does not parse (dates, enumerations)
    InvalidFormat,
    /// Two fields in the wrong relative order
    Ordering,
}

/// A rejected tool argument
///
/// The `Display` output is exactly `message`; the classifier prefixes it when
/// building the tool response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Field that failed, dotted for nested values (`exercises[0].sets[1].reps`)
    pub field: Option<String>,
    /// Failure category
    pub kind: ValidationKind,
    /// Caller-facing message
    pub message: String,
}

impl ValidationError {
    /// Build an error with an explicit kind
    #[must_use]
    pub fn new(field: impl Into<String>, kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            kind,
            message: message.into(),
        }
    }

    /// `<field> is required`
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{field} is required");
        Self::new(field, ValidationKind::Missing, message)
    }

    /// Wrong JSON type
    #[must_use]
    pub fn invalid_type(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationKind::InvalidType, message)
    }

    /// Value outside its range
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationKind::OutOfRange, message)
    }

    /// Unparseable string
    #[must_use]
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationKind::InvalidFormat, message)
    }

    /// Relative ordering violated between two fields; `field` names the later one
    #[must_use]
    pub fn ordering(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationKind::Ordering, message)
    }

    /// Prefix the field path with a parent path (`exercises[0]` + `.reps`)
    #[must_use]
    pub fn nested_under(mut self, parent: &str) -> Self {
        let Some(field) = self.field.take() else {
            self.field = Some(parent.to_owned());
            return self;
        };
        let nested = if field.starts_with('[') {
            format!("{parent}{field}")
        } else {
            format!("{parent}.{field}")
        };
        // Messages lead with the field name; keep them pointing at the full path
        if let Some(rest) = self.message.strip_prefix(field.as_str()) {
            self.message = format!("{nested}{rest}");
        }
        self.field = Some(nested);
        self
    }
}
