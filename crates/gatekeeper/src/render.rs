//! Rendering a validation result for display.
//!
//! The engine only defines the shape of [`Validation`]; these renderers are
//! convenience output formats for handlers that do not bring their own
//! templates.

use crate::validation::Validation;
use std::fmt::Write;

/// Turns a validation result into some output format
pub trait Render {
    type Output;

    fn render(&self, validation: &Validation) -> Self::Output;
}

/// One `field: message` line per failure
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Render for TextRenderer {
    type Output = String;

    fn render(&self, validation: &Validation) -> String {
        let mut out = String::new();
        for (field, errors) in validation.iter() {
            for error in errors {
                let _ = writeln!(out, "{}: {}", field, error.message);
            }
        }
        out
    }
}

/// API error envelope, see [`Validation::to_json`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    type Output = serde_json::Value;

    fn render(&self, validation: &Validation) -> serde_json::Value {
        validation.to_json()
    }
}

/// Escaped html list, one item per message, grouped by field
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Class attribute of the outer list
    pub class: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            class: "errors".to_string(),
        }
    }

    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for HtmlRenderer {
    type Output = String;

    fn render(&self, validation: &Validation) -> String {
        if !validation.has_error() {
            return String::new();
        }

        let mut out = String::new();
        let _ = write!(
            out,
            "<ul class=\"{}\">",
            html_escape::encode_double_quoted_attribute(&self.class)
        );
        for (field, errors) in validation.iter() {
            let field = html_escape::encode_double_quoted_attribute(field);
            for error in errors {
                let _ = write!(
                    out,
                    "<li data-field=\"{}\">{}</li>",
                    field,
                    html_escape::encode_text(&error.message)
                );
            }
        }
        out.push_str("</ul>");
        out
    }
}
