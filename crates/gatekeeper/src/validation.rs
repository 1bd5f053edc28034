//! The outcome of one validation pass

use crate::error::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type ValidationResult<T> = Result<T, Validation>;

/// Per-field failure messages collected by one `GateKeeper::validate` call.
///
/// Fields keep the order in which their first failure was recorded and each
/// field keeps its messages in rule registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
pub struct Validation {
    /// Map of field names to their validation errors
    errors: IndexMap<String, Vec<ValidationError>>,
}

impl Validation {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single validation error
    pub fn add(&mut self, error: ValidationError) {
        self.errors
            .entry(error.field.clone())
            .or_default()
            .push(error);
    }

    /// Record a simple validation error with field and message
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(ValidationError::new(field, message));
    }

    /// True when any field has at least one recorded message
    pub fn has_error(&self) -> bool {
        self.errors.values().any(|errors| !errors.is_empty())
    }

    /// Get the number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_error()
    }

    /// Get total number of validation errors across all fields
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Errors recorded for a field, empty if none
    pub fn field_errors(&self, field: &str) -> &[ValidationError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Messages recorded for a field, in registration order
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.field_errors(field)
            .iter()
            .map(|error| error.message.as_str())
            .collect()
    }

    /// Check if a specific field has errors
    pub fn has_field_errors(&self, field: &str) -> bool {
        !self.field_errors(field).is_empty()
    }

    /// Names of the fields with errors, in first-failure order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Iterate fields together with their errors
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.errors
            .iter()
            .map(|(field, errors)| (field.as_str(), errors.as_slice()))
    }

    /// Merge another result into this one, appending after existing messages
    pub fn merge(&mut self, other: Validation) {
        for (field, errors) in other.errors {
            self.errors.entry(field).or_default().extend(errors);
        }
    }

    /// `Ok(())` when nothing failed, otherwise the result itself as the error
    pub fn into_result(self) -> ValidationResult<()> {
        if self.has_error() {
            Err(self)
        } else {
            Ok(())
        }
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": self.errors
            }
        })
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_error() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for (field, field_errors) in &self.errors {
                for error in field_errors {
                    write!(f, "\n  {}: {}", field, error.message)?;
                }
            }
            Ok(())
        }
    }
}

impl From<ValidationError> for Validation {
    fn from(error: ValidationError) -> Self {
        let mut validation = Self::new();
        validation.add(error);
        validation
    }
}
