//! API entries: the normalized records produced for recognized declarations.
//!
//! Each entry serializes as a flat object with a `"type"` discriminator.
//! Function entries reuse their declaration keyword as the type
//! (`native`, `stock`, `forward`, `public`); the other shapes use
//! `methodmap` and `typedef`.

use std::fmt;

use serde::{Serialize, Serializer};

use super::comment::TagSet;
use super::param::Parameter;

/// Declaration keyword of a function-like entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Native,
    Stock,
    Forward,
    Public,
}

impl FunctionKind {
    /// Map a declaration keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "native" => Some(FunctionKind::Native),
            "stock" => Some(FunctionKind::Stock),
            "forward" => Some(FunctionKind::Forward),
            "public" => Some(FunctionKind::Public),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Native => "native",
            FunctionKind::Stock => "stock",
            FunctionKind::Forward => "forward",
            FunctionKind::Public => "public",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level `native`/`stock`/`forward`/`public` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionEntry {
    pub name: String,
    /// Carried by the `"type"` discriminator when serialized.
    #[serde(skip)]
    pub kind: FunctionKind,
    pub return_type: String,
    pub params: Vec<Parameter>,
    pub comment: String,
    pub tags: TagSet,
    pub full_declaration: String,
    pub source_file: String,
}

/// A `methodmap` declaration with its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodmapEntry {
    pub name: String,
    pub inherits: Option<String>,
    pub comment: String,
    pub tags: TagSet,
    pub methods: Vec<MethodEntry>,
    pub properties: Vec<PropertyEntry>,
    pub full_declaration: String,
    pub source_file: String,
}

/// A `typedef <name> = function ...` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedefEntry {
    pub name: String,
    pub return_type: String,
    pub params: Vec<Parameter>,
    pub comment: String,
    pub tags: TagSet,
    pub full_declaration: String,
    pub source_file: String,
}

/// A method nested in a methodmap body.
///
/// Nested methods carry no documentation: parameter descriptions are
/// always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FunctionKind,
    pub return_type: String,
    pub params: Vec<Parameter>,
    pub full_declaration: String,
}

/// A `public property <type> <name>` member of a methodmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
}

/// One recognized declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEntry {
    Function(FunctionEntry),
    Methodmap(MethodmapEntry),
    Typedef(TypedefEntry),
}

impl ApiEntry {
    pub fn name(&self) -> &str {
        match self {
            ApiEntry::Function(f) => &f.name,
            ApiEntry::Methodmap(m) => &m.name,
            ApiEntry::Typedef(t) => &t.name,
        }
    }

    /// Display name of the file this entry was scanned from.
    pub fn source_file(&self) -> &str {
        match self {
            ApiEntry::Function(f) => &f.source_file,
            ApiEntry::Methodmap(m) => &m.source_file,
            ApiEntry::Typedef(t) => &t.source_file,
        }
    }

    /// Value of the serialized `"type"` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            ApiEntry::Function(f) => f.kind.as_str(),
            ApiEntry::Methodmap(_) => "methodmap",
            ApiEntry::Typedef(_) => "typedef",
        }
    }

    pub fn tags(&self) -> &TagSet {
        match self {
            ApiEntry::Function(f) => &f.tags,
            ApiEntry::Methodmap(m) => &m.tags,
            ApiEntry::Typedef(t) => &t.tags,
        }
    }

    /// Declared parameters; methodmaps have none of their own.
    pub fn params(&self) -> &[Parameter] {
        match self {
            ApiEntry::Function(f) => &f.params,
            ApiEntry::Methodmap(_) => &[],
            ApiEntry::Typedef(t) => &t.params,
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    entry: &'a T,
}

impl Serialize for ApiEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.type_name();
        match self {
            ApiEntry::Function(entry) => Tagged { kind, entry }.serialize(serializer),
            ApiEntry::Methodmap(entry) => Tagged { kind, entry }.serialize(serializer),
            ApiEntry::Typedef(entry) => Tagged { kind, entry }.serialize(serializer),
        }
    }
}
