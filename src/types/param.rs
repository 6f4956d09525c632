//! Declared parameters.

use serde::Serialize;

/// One parameter of a function, method or typedef.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    /// Written type, including any `[]` suffixes (e.g. `char[]`).
    #[serde(rename = "type")]
    pub param_type: String,
    /// Raw default value text after `=`, if any.
    pub default: Option<String>,
    /// From the matching `@param` tag; empty when undocumented.
    pub description: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            default: None,
            description: String::new(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the caller may omit this parameter.
    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}
