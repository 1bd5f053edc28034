//! # gatekeeper
//!
//! Declarative validation for arbitrary objects. Register rules against field
//! accessors on a [`GateKeeper`], run one validation pass, and get back a
//! [`Validation`] with the failure messages of every field.
//!
//! ```
//! use gatekeeper::{Custom, GateKeeper, Presence};
//!
//! struct User {
//!     username: String,
//!     age: u32,
//! }
//!
//! let gk = GateKeeper::new()
//!     .rule(Presence::new(|u: &User| u.username.as_str(), "Username", "Username can not be blank"))
//!     .rule(Custom::new(|u: &User| u.age >= 18, "Age", "You must be a grown man"));
//!
//! let validation = gk.validate(&User { username: String::new(), age: 10 });
//! assert!(validation.has_error());
//! assert_eq!(validation.messages("Age"), vec!["You must be a grown man"]);
//! ```

pub mod config;
pub mod error;
pub mod gatekeeper;
pub mod render;
pub mod traits;
pub mod validation;
pub mod validators;

// Re-exports for easy access
pub use config::{GateKeeperConfig, RuleConfig, RuleTarget};
pub use error::{RuleError, ValidationError};
pub use gatekeeper::GateKeeper;
pub use render::{HtmlRenderer, JsonRenderer, Render, TextRenderer};
pub use traits::{FieldAccessor, Rule};
pub use validation::{Validation, ValidationResult};

// Built-in rules
pub use validators::{
    custom::Custom,
    length::{Limitation, Prohibition},
    pattern::Regexp,
    presence::Presence,
    script_tag::AvoidScriptTag,
    switcher::MessageSwitcher,
};
