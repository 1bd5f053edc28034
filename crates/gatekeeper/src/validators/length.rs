//! Length-band rules: Limitation keeps a value inside the band, Prohibition
//! keeps it outside.

use crate::error::ValidationError;
use crate::traits::{FieldAccessor, Rule};
use serde_json::Value;

/// Inclusive length band shared by both rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Band {
    min: usize,
    max: usize,
}

impl Band {
    /// Unicode-aware length check
    fn contains(&self, text: &str) -> bool {
        let length = text.chars().count();
        self.min <= length && length <= self.max
    }

    fn parameters(&self, message: &str) -> Value {
        serde_json::json!({
            "min": self.min,
            "max": self.max,
            "message": message,
        })
    }
}

/// Fails when the field length falls outside `[min, max]`
#[derive(Debug, Clone)]
pub struct Limitation<T: ?Sized> {
    accessor: FieldAccessor<T>,
    band: Band,
    field: String,
    message: String,
}

impl<T: ?Sized + 'static> Limitation<T> {
    pub fn new<F>(
        accessor: F,
        min: usize,
        max: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self::with_accessor(FieldAccessor::new(accessor), min, max, field, message)
    }
}

impl<T: ?Sized> Limitation<T> {
    pub fn with_accessor(
        accessor: FieldAccessor<T>,
        min: usize,
        max: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            accessor,
            band: Band { min, max },
            field: field.into(),
            message: message.into(),
        }
    }
}

impl<T: ?Sized> Rule<T> for Limitation<T> {
    fn evaluate(&self, object: &T) -> Result<(), ValidationError> {
        if self.band.contains(&self.accessor.read(object)) {
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
        "limitation"
    }

    fn parameters(&self) -> Option<Value> {
        Some(self.band.parameters(&self.message))
    }
}

/// Fails when the field length falls inside the forbidden band `[min, max]`
#[derive(Debug, Clone)]
pub struct Prohibition<T: ?Sized> {
    accessor: FieldAccessor<T>,
    band: Band,
    field: String,
    message: String,
}

impl<T: ?Sized + 'static> Prohibition<T> {
    pub fn new<F>(
        accessor: F,
        min: usize,
        max: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self::with_accessor(FieldAccessor::new(accessor), min, max, field, message)
    }
}

impl<T: ?Sized> Prohibition<T> {
    pub fn with_accessor(
        accessor: FieldAccessor<T>,
        min: usize,
        max: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            accessor,
            band: Band { min, max },
            field: field.into(),
            message: message.into(),
        }
    }
}

impl<T: ?Sized> Rule<T> for Prohibition<T> {
    fn evaluate(&self, object: &T) -> Result<(), ValidationError> {
        if self.band.contains(&self.accessor.read(object)) {
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
        "prohibition"
    }

    fn parameters(&self) -> Option<Value> {
        Some(self.band.parameters(&self.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limitation(min: usize, max: usize) -> Limitation<str> {
        Limitation::new(|s: &str| s, min, max, "Username", "Username can not be too long")
    }

    fn prohibition(min: usize, max: usize) -> Prohibition<str> {
        Prohibition::new(
            |s: &str| s,
            min,
            max,
            "Username",
            "Username must less than 10 or more than 20",
        )
    }

    #[test]
    fn test_limitation_bounds_are_inclusive() {
        let rule = limitation(3, 5);

        assert!(rule.evaluate("ab").is_err());
        assert!(rule.evaluate("abc").is_ok());
        assert!(rule.evaluate("abcde").is_ok());
        assert!(rule.evaluate("abcdef").is_err());
    }

    #[test]
    fn test_limitation_too_long() {
        let error = limitation(0, 10)
            .evaluate("i like to move it move it")
            .unwrap_err();

        assert_eq!(error.message, "Username can not be too long");
        assert_eq!(error.code, "limitation");
    }

    #[test]
    fn test_prohibition_inside_band_fails() {
        let rule = prohibition(10, 20);

        assert!(rule.evaluate("12345678901112").is_err());
        assert!(rule.evaluate("1234567890").is_err());
        assert!(rule.evaluate("12345678901234567890").is_err());
    }

    #[test]
    fn test_prohibition_outside_band_passes() {
        let rule = prohibition(10, 20);

        assert!(rule.evaluate("short").is_ok());
        assert!(rule.evaluate("i like to move it move it").is_ok());
    }

    #[test]
    fn test_empty_string_counts_as_zero() {
        assert!(limitation(0, 10).evaluate("").is_ok());
        assert!(limitation(1, 10).evaluate("").is_err());
        assert!(prohibition(0, 5).evaluate("").is_err());
        assert!(prohibition(1, 5).evaluate("").is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let rule = limitation(0, 5);

        assert!(rule.evaluate("café").is_ok());
        assert!(rule.evaluate("🦀🚀✨").is_ok());
        assert!(rule.evaluate("🦀🚀✨🎉🔥💯").is_err());
    }

    #[test]
    fn test_limitation_and_prohibition_are_complementary() {
        let samples = [
            "",
            "a",
            "hello",
            "1234567890",
            "12345678901112",
            "i like to move it move it",
        ];
        let bands = [(0, 0), (0, 10), (10, 20), (5, 5), (3, 30)];

        for (min, max) in bands {
            let keep = limitation(min, max);
            let forbid = prohibition(min, max);
            for sample in samples {
                assert_ne!(
                    keep.evaluate(sample).is_ok(),
                    forbid.evaluate(sample).is_ok(),
                    "band [{}, {}] with {:?}",
                    min,
                    max,
                    sample
                );
            }
        }
    }

    #[test]
    fn test_parameters() {
        let params = limitation(0, 10).parameters().unwrap();
        assert_eq!(params["min"], 0);
        assert_eq!(params["max"], 10);
        assert_eq!(params["message"], "Username can not be too long");
    }
}
