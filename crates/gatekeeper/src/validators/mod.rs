//! Built-in rule catalog

pub mod custom;
pub mod length;
pub mod pattern;
pub mod presence;
pub mod script_tag;
pub mod switcher;

pub use custom::Custom;
pub use length::{Limitation, Prohibition};
pub use pattern::Regexp;
pub use presence::Presence;
pub use script_tag::AvoidScriptTag;
pub use switcher::MessageSwitcher;
