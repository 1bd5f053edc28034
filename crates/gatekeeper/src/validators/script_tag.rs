//! Script tag rule

use crate::error::ValidationError;
use crate::traits::{FieldAccessor, Rule};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Opening `<script` tag, or a closing tag written with either slash
static SCRIPT_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*script\b|<\s*[/\\]\s*script\s*>").expect("script tag pattern is valid")
});

/// Returns true when `text` carries an html script tag
pub fn contains_script_tag(text: &str) -> bool {
    SCRIPT_TAG.is_match(text)
}

/// Rule that fails when the field carries an html script tag
#[derive(Debug, Clone)]
pub struct AvoidScriptTag<T: ?Sized> {
    accessor: FieldAccessor<T>,
    field: String,
    message: String,
}

impl<T: ?Sized + 'static> AvoidScriptTag<T> {
    pub fn new<F>(accessor: F, field: impl Into<String>, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self::with_accessor(FieldAccessor::new(accessor), field, message)
    }
}

impl<T: ?Sized> AvoidScriptTag<T> {
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

impl<T: ?Sized> Rule<T> for AvoidScriptTag<T> {
    fn evaluate(&self, object: &T) -> Result<(), ValidationError> {
        if contains_script_tag(&self.accessor.read(object)) {
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
        "avoid_script_tag"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "message": self.message }))
    }
}
