//! Parsed documentation comments.

use serde::Serialize;

/// A documentation block split into its prose and its `@` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedComment {
    /// Text before the first tag line.
    pub description: String,
    pub tags: TagSet,
}

/// A single `@param <name> <description>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamTag {
    pub name: String,
    pub description: String,
}

impl ParamTag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Structured tags recovered from a documentation block.
///
/// `param`, `return`, `error` and `note` are always present in the
/// serialized form; the rarer tags only appear when used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSet {
    pub param: Vec<ParamTag>,
    pub error: Vec<String>,
    pub note: Vec<String>,
    /// Last `@return` wins; empty when absent.
    #[serde(rename = "return")]
    pub returns: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deprecated: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<String>,
}

impl TagSet {
    /// Look up the documented description for a parameter.
    pub fn param_description(&self, name: &str) -> Option<&str> {
        self.param
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.description.as_str())
    }

    /// Whether the block carries an `@deprecated` tag.
    pub fn is_deprecated(&self) -> bool {
        !self.deprecated.is_empty()
    }
}
