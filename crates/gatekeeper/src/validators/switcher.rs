//! Message switcher: a rule whose message is picked per object

use crate::error::ValidationError;
use crate::traits::Rule;
use std::fmt;
use std::sync::Arc;

/// Type alias for per-object message selection
pub type MessageFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Rule that reports whatever message its function returns for the object.
///
/// An empty message means the rule passes. Any other message is recorded as a
/// failure under the bound field.
#[derive(Clone)]
pub struct MessageSwitcher<T: ?Sized> {
    switch: MessageFn<T>,
    field: String,
}

impl<T: ?Sized> MessageSwitcher<T> {
    pub fn new<F>(switch: F, field: impl Into<String>) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            switch: Arc::new(switch),
            field: field.into(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for MessageSwitcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSwitcher")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> Rule<T> for MessageSwitcher<T> {
    fn evaluate(&self, object: &T) -> Result<(), ValidationError> {
        let message = (self.switch)(object);
        if message.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::with_code(
                &self.field,
                message,
                self.rule_name(),
            ))
        }
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn rule_name(&self) -> &'static str {
        "message_switcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACKLIST: &str = "You are in blacklist, lol :D";
    const WHITELIST: &str = "You are in whitelist, lol :D";

    fn rule() -> MessageSwitcher<str> {
        MessageSwitcher::new(
            |name: &str| match name {
                "Kioshi" => BLACKLIST.to_string(),
                "Roku" => WHITELIST.to_string(),
                _ => String::new(),
            },
            "Username",
        )
    }

    #[test]
    fn test_switcher_picks_message_per_object() {
        let rule = rule();

        assert_eq!(rule.evaluate("Kioshi").unwrap_err().message, BLACKLIST);
        assert_eq!(rule.evaluate("Roku").unwrap_err().message, WHITELIST);
    }

    #[test]
    fn test_switcher_empty_message_passes() {
        assert!(rule().evaluate("Aang").is_ok());
        assert!(rule().evaluate("").is_ok());
    }

    #[test]
    fn test_switcher_error_shape() {
        let error = rule().evaluate("Kioshi").unwrap_err();

        assert_eq!(error.field, "Username");
        assert_eq!(error.code, "message_switcher");
    }
}
