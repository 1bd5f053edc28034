//! Pattern rule using regular expressions

use crate::error::{RuleError, ValidationError};
use crate::traits::{FieldAccessor, Rule};
use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Rule that requires the whole field to match a regular expression
#[derive(Debug, Clone)]
pub struct Regexp<T: ?Sized> {
    accessor: FieldAccessor<T>,
    /// The pattern as supplied
    pattern: Regex,
    /// Same pattern anchored at both ends
    anchored: Regex,
    field: String,
    message: String,
}

impl<T: ?Sized + 'static> Regexp<T> {
    /// Compile `pattern` and build the rule, failing on an invalid pattern
    pub fn new<F>(
        accessor: F,
        pattern: &str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, RuleError>
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self::with_accessor(FieldAccessor::new(accessor), pattern, field, message)
    }

    /// Compile `pattern` with builder options such as case insensitivity
    pub fn from_builder<F, C>(
        accessor: F,
        pattern: &str,
        configure: C,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, RuleError>
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
        C: Fn(&mut RegexBuilder) -> &mut RegexBuilder,
    {
        Self::with_builder(FieldAccessor::new(accessor), pattern, configure, field, message)
    }
}

impl<T: ?Sized> Regexp<T> {
    pub fn with_accessor(
        accessor: FieldAccessor<T>,
        pattern: &str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Self::with_builder(accessor, pattern, |builder| builder, field, message)
    }

    pub fn with_builder<C>(
        accessor: FieldAccessor<T>,
        pattern: &str,
        configure: C,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, RuleError>
    where
        C: Fn(&mut RegexBuilder) -> &mut RegexBuilder,
    {
        let field = field.into();
        let build = |source: &str| configure(&mut RegexBuilder::new(source)).build();
        let invalid = |e: regex::Error| RuleError::invalid_pattern(field.as_str(), e);

        let compiled = build(pattern).map_err(invalid)?;
        // A trailing `#` comment in verbose mode swallows the closing anchor on one line
        let anchored = build(&format!("^(?:{})$", pattern))
            .or_else(|_| build(&format!("^(?:{}\n)$", pattern)))
            .map_err(invalid)?;

        Ok(Self {
            accessor,
            pattern: compiled,
            anchored,
            field,
            message: message.into(),
        })
    }

    /// Get the pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }
}

impl<T: ?Sized> Rule<T> for Regexp<T> {
    fn evaluate(&self, object: &T) -> Result<(), ValidationError> {
        if self.anchored.is_match(&self.accessor.read(object)) {
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
        "regexp"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({
            "pattern": self.pattern.as_str(),
            "message": self.message,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = r"^([^@\s]+)@((?:[-a-z0-9]+\.)+[a-z]{2,})$";

    fn email_rule() -> Regexp<str> {
        Regexp::new(|s: &str| s, EMAIL, "Email", "Must be a valid email").unwrap()
    }

    #[test]
    fn test_regexp_email() {
        let rule = email_rule();

        assert!(rule.evaluate("kiss@therain.com").is_ok());
        assert!(rule.evaluate("roku@avatar.com").is_ok());

        let error = rule.evaluate("fake").unwrap_err();
        assert_eq!(error.message, "Must be a valid email");
        assert_eq!(error.code, "regexp");
    }

    #[test]
    fn test_regexp_empty_string() {
        assert!(email_rule().evaluate("").is_err());
    }

    #[test]
    fn test_regexp_requires_full_match() {
        let rule = Regexp::new(|s: &str| s, "[A-Z]{3}", "Code", "Three capitals").unwrap();

        assert!(rule.evaluate("ABC").is_ok());
        assert!(rule.evaluate("xABCx").is_err());
        assert!(rule.evaluate("ABCD").is_err());
    }

    #[test]
    fn test_regexp_full_match_with_alternation() {
        let rule = Regexp::new(|s: &str| s, "a|ab", "Code", "Bad code").unwrap();

        assert!(rule.evaluate("ab").is_ok());
        assert!(rule.evaluate("abc").is_err());
    }

    #[test]
    fn test_regexp_keeps_builder_options() {
        let rule = Regexp::from_builder(
            |s: &str| s,
            "hello",
            |builder| builder.case_insensitive(true),
            "Greeting",
            "Say hello",
        )
        .unwrap();

        assert!(rule.evaluate("HELLO").is_ok());
        assert!(rule.evaluate("Hello").is_ok());
        assert!(rule.evaluate("HELLO world").is_err());
        assert_eq!(rule.pattern_string(), "hello");
    }

    #[test]
    fn test_regexp_verbose_pattern_with_trailing_comment() {
        let rule = Regexp::new(
            |s: &str| s,
            "(?x) [a-z]+ # lowercase letters",
            "Code",
            "Letters only",
        )
        .unwrap();

        assert!(rule.evaluate("abc").is_ok());
        assert!(rule.evaluate("abc1").is_err());
        assert!(rule.evaluate("").is_err());
    }

    #[test]
    fn test_regexp_verbose_builder_with_trailing_comment() {
        let rule = Regexp::from_builder(
            |s: &str| s,
            "[0-9]{3} # area code",
            |builder| builder.ignore_whitespace(true),
            "Code",
            "Three digits",
        )
        .unwrap();

        assert!(rule.evaluate("123").is_ok());
        assert!(rule.evaluate("1234").is_err());
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let result = Regexp::new(|s: &str| s, "([a-z", "Code", "Bad code");

        match result {
            Err(RuleError::InvalidPattern { field, .. }) => assert_eq!(field, "Code"),
            other => panic!("expected invalid pattern, got {:?}", other.map(|_| ())),
        }
    }
}
