//! Error types: rule failures and rule construction faults

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single failed rule, recorded under the field it is bound to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Name of the rule that produced this error
    pub code: String,
}

impl ValidationError {
    /// Create a new validation error with the generic code
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_code(field, message, "validation_failed")
    }

    /// Create a validation error with a specific code
    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Faults in how a rule set was put together.
///
/// These surface while the gatekeeper is being built, never from `validate`.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid bounds for field '{field}': min {min} is greater than max {max}")]
    InvalidBounds {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid rule definition: {message}")]
    Definition { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RuleError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(field: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            source,
        }
    }

    /// Create an inverted bounds error
    pub fn invalid_bounds(field: impl Into<String>, min: usize, max: usize) -> Self {
        Self::InvalidBounds {
            field: field.into(),
            min,
            max,
        }
    }

    /// Create a definition error
    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new("Email", "Must be a valid email");
        assert_eq!(error.field, "Email");
        assert_eq!(error.message, "Must be a valid email");
        assert_eq!(error.code, "validation_failed");
        assert_eq!(error.to_string(), "Email: Must be a valid email");
    }

    #[test]
    fn test_validation_error_with_code() {
        let error = ValidationError::with_code("Username", "Username can not be blank", "presence");
        assert_eq!(error.code, "presence");
    }

    #[test]
    fn test_rule_error_messages() {
        let error = RuleError::invalid_bounds("Username", 20, 10);
        assert_eq!(
            error.to_string(),
            "Invalid bounds for field 'Username': min 20 is greater than max 10"
        );

        let source = regex::Regex::new("(").unwrap_err();
        let error = RuleError::invalid_pattern("Email", source);
        assert!(error.to_string().starts_with("Invalid pattern for field 'Email'"));
    }
}
