//! Custom predicate rule

use crate::error::ValidationError;
use crate::traits::Rule;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Type alias for predicates over the whole object
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Rule backed by a caller-supplied predicate over the whole object.
///
/// Useful for checks that need more than one field or a non-string value.
#[derive(Clone)]
pub struct Custom<T: ?Sized> {
    predicate: Predicate<T>,
    field: String,
    message: String,
}

impl<T: ?Sized> Custom<T> {
    pub fn new<F>(predicate: F, field: impl Into<String>, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Custom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> Rule<T> for Custom<T> {
    fn evaluate(&self, object: &T) -> Result<(), ValidationError> {
        if (self.predicate)(object) {
            Ok(())
        } else {
            Err(ValidationError::with_code(
                &self.field,
                &self.message,
                self.rule_name(),
            ))
        }
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn rule_name(&self) -> &'static str {
        "custom"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "message": self.message }))
    }
}
