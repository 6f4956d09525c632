//! incscan - SourcePawn include scanner
//!
//! A library for extracting documented API declarations (natives, stocks,
//! forwards, methodmaps and typedefs) from SourcePawn include files into a
//! JSON document.

pub mod cli;
pub mod collect;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use collect::{collect, Collection, FileFailure};
pub use discovery::{discover, DiscoveryResult, Manifest, SourceFile};
pub use error::{IncError, Result};
pub use parser::{parse_include, DeclarationClassifier, IncludeScanner};
pub use render::{render_json, write_json};
pub use types::{
    ApiEntry, FunctionEntry, FunctionKind, MethodEntry, MethodmapEntry, Parameter, ParsedComment,
    PropertyEntry, TagSet, TypedefEntry,
};
pub use validation::{lint_entries, Diagnostic, ValidationResult};
