//! Core domain types for incscan.
//!
//! - `ParsedComment` / `TagSet` - documentation blocks split into prose and tags
//! - `Parameter` - a declared parameter with its documented description
//! - `ApiEntry` - one recognized declaration, ready for serialization

mod comment;
mod entry;
mod param;

pub use comment::{ParamTag, ParsedComment, TagSet};
pub use entry::{
    ApiEntry, FunctionEntry, FunctionKind, MethodEntry, MethodmapEntry, PropertyEntry, TypedefEntry,
};
pub use param::Parameter;
