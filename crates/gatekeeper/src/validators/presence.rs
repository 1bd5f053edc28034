//! Presence rule

use crate::error::ValidationError;
use crate::traits::{FieldAccessor, Rule};
use serde_json::Value;

/// Rule that fails when the field is empty or only whitespace
#[derive(Debug, Clone)]
pub struct Presence<T: ?Sized> {
    accessor: FieldAccessor<T>,
    field: String,
    message: String,
}

impl<T: ?Sized + 'static> Presence<T> {
    pub fn new<F>(accessor: F, field: impl Into<String>, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self::with_accessor(FieldAccessor::new(accessor), field, message)
    }
}

impl<T: ?Sized> Presence<T> {
    pub fn with_accessor(
        accessor: FieldAccessor<T>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            accessor,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl<T: ?Sized> Rule<T> for Presence<T> {
    fn evaluate(&self, object: &T) -> Result<(), ValidationError> {
        if self.accessor.read(object).trim().is_empty() {
            Err(ValidationError::with_code(
                &self.field,
                &self.message,
                self.rule_name(),
            ))
        } else {
            Ok(())
        }
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn rule_name(&self) -> &'static str {
        "presence"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "message": self.message }))
    }
}
