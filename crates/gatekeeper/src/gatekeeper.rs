//! Ordered rule collection and the validation pass

use crate::traits::Rule;
use crate::validation::{Validation, ValidationResult};
use indexmap::IndexSet;
use tracing::{debug, trace};

/// Ordered collection of rules for one object type.
///
/// Build it once with [`GateKeeper::add`], then call [`GateKeeper::validate`]
/// as often as needed. Validation takes `&self`, so a built gatekeeper can be
/// shared across threads.
pub struct GateKeeper<T: ?Sized> {
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T: ?Sized> GateKeeper<T> {
    /// Create an empty gatekeeper
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Duplicate fields are allowed and every rule runs.
    pub fn add<R>(&mut self, rule: R) -> &mut Self
    where
        R: Rule<T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Chaining form of [`GateKeeper::add`]
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<T> + 'static,
    {
        self.add(rule);
        self
    }

    /// Run every rule, in registration order, against `object`
    pub fn validate(&self, object: &T) -> Validation {
        let mut validation = Validation::new();

        for rule in &self.rules {
            match rule.evaluate(object) {
                Ok(()) => trace!(field = rule.field(), rule = rule.rule_name(), "rule passed"),
                Err(error) => {
                    debug!(field = rule.field(), rule = rule.rule_name(), "rule failed");
                    validation.add(error);
                }
            }
        }

        debug!(
            rules = self.rules.len(),
            failed_fields = validation.len(),
            failures = validation.total_errors(),
            "validation finished"
        );
        validation
    }

    /// Like [`GateKeeper::validate`], but as a `Result` for `?` propagation
    pub fn check(&self, object: &T) -> ValidationResult<()> {
        self.validate(object).into_result()
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field names with at least one rule, in registration order
    pub fn fields(&self) -> IndexSet<&str> {
        self.rules.iter().map(|rule| rule.field()).collect()
    }

    /// Iterate the registered rules
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule<T>> {
        self.rules.iter().map(|rule| rule.as_ref())
    }
}

impl<T: ?Sized> Default for GateKeeper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for GateKeeper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rules: Vec<String> = self
            .rules
            .iter()
            .map(|rule| format!("{}({})", rule.rule_name(), rule.field()))
            .collect();
        f.debug_struct("GateKeeper")
            .field("rule_count", &self.rules.len())
            .field("rules", &rules)
            .finish()
    }
}
