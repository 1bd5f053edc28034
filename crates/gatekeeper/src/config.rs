//! Declarative rule sets for JSON documents.
//!
//! A rule set can be loaded from JSON or YAML and turned into a
//! `GateKeeper<serde_json::Value>`. Only the data-driven rule kinds are
//! available here; `Custom` and `MessageSwitcher` need closures and are
//! registered in code.

use crate::error::RuleError;
use crate::gatekeeper::GateKeeper;
use crate::traits::FieldAccessor;
use crate::validators::{AvoidScriptTag, Limitation, Presence, Prohibition, Regexp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A whole rule set, in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateKeeperConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Fields shared by every declarative rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTarget {
    /// Field name errors are reported under
    pub field: String,
    /// Failure message
    pub message: String,
    /// JSON pointer to the value, defaults to `/<field>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl RuleTarget {
    fn pointer(&self) -> String {
        self.path
            .clone()
            .unwrap_or_else(|| format!("/{}", self.field.replace('~', "~0").replace('/', "~1")))
    }

    /// Reads the pointed-at string, treating missing or non-string values as empty
    fn accessor(&self) -> FieldAccessor<Value> {
        let pointer = self.pointer();
        FieldAccessor::new(move |document: &Value| {
            document
                .pointer(&pointer)
                .and_then(Value::as_str)
                .unwrap_or("")
        })
    }
}

/// One declarative rule, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    Presence {
        #[serde(flatten)]
        target: RuleTarget,
    },
    Limitation {
        #[serde(flatten)]
        target: RuleTarget,
        min: usize,
        max: usize,
    },
    Prohibition {
        #[serde(flatten)]
        target: RuleTarget,
        min: usize,
        max: usize,
    },
    Regexp {
        #[serde(flatten)]
        target: RuleTarget,
        pattern: String,
    },
    AvoidScriptTag {
        #[serde(flatten)]
        target: RuleTarget,
    },
}

impl RuleConfig {
    pub fn target(&self) -> &RuleTarget {
        match self {
            RuleConfig::Presence { target }
            | RuleConfig::Limitation { target, .. }
            | RuleConfig::Prohibition { target, .. }
            | RuleConfig::Regexp { target, .. }
            | RuleConfig::AvoidScriptTag { target } => target,
        }
    }

    fn check_bounds(target: &RuleTarget, min: usize, max: usize) -> Result<(), RuleError> {
        if min > max {
            return Err(RuleError::invalid_bounds(target.field.clone(), min, max));
        }
        Ok(())
    }

    /// Register this rule on a gatekeeper
    fn register(&self, gatekeeper: &mut GateKeeper<Value>) -> Result<(), RuleError> {
        let target = self.target();
        if target.field.is_empty() {
            return Err(RuleError::definition("rule field name can not be empty"));
        }
        let accessor = target.accessor();
        let field = target.field.clone();
        let message = target.message.clone();

        match self {
            RuleConfig::Presence { .. } => {
                gatekeeper.add(Presence::with_accessor(accessor, field, message));
            }
            RuleConfig::Limitation { min, max, .. } => {
                Self::check_bounds(target, *min, *max)?;
                gatekeeper.add(Limitation::with_accessor(accessor, *min, *max, field, message));
            }
            RuleConfig::Prohibition { min, max, .. } => {
                Self::check_bounds(target, *min, *max)?;
                gatekeeper.add(Prohibition::with_accessor(accessor, *min, *max, field, message));
            }
            RuleConfig::Regexp { pattern, .. } => {
                gatekeeper.add(Regexp::with_accessor(accessor, pattern, field, message)?);
            }
            RuleConfig::AvoidScriptTag { .. } => {
                gatekeeper.add(AvoidScriptTag::with_accessor(accessor, field, message));
            }
        }
        Ok(())
    }
}

impl GateKeeperConfig {
    /// Parse a rule set from JSON
    pub fn from_json_str(source: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a rule set from YAML
    pub fn from_yaml_str(source: &str) -> Result<Self, RuleError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Build the gatekeeper, failing on the first malformed rule
    pub fn build(&self) -> Result<GateKeeper<Value>, RuleError> {
        let mut gatekeeper = GateKeeper::new();
        for rule in &self.rules {
            rule.register(&mut gatekeeper)?;
        }
        debug!(rules = gatekeeper.len(), "built gatekeeper from rule set");
        Ok(gatekeeper)
    }
}
