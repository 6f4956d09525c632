//! Parser modules for SourcePawn include files.
//!
//! Recovers documented declarations from `.inc` source text. Each
//! `/** ... */` block is paired with the code after it; the block is parsed
//! into a description and tags, and the code is classified as one of:
//! - a function-like declaration (`native`, `stock`, `forward`, `public`)
//! - a `methodmap` with its methods and properties
//! - a `typedef ... = function ...` callback type
//!
//! # Usage
//!
//! ```ignore
//! use incscan::parser::parse_include;
//!
//! let source = std::fs::read_to_string("include/clients.inc")?;
//! for entry in parse_include(&source, "clients.inc") {
//!     println!("{} {}", entry.type_name(), entry.name());
//! }
//! ```

mod declaration;
mod include;
mod lexer;
mod methodmap;
mod params;
mod tags;

// Re-export main entry points
pub use declaration::DeclarationClassifier;
pub use include::{doc_chunks, normalize_line_endings, parse_include, DocChunk, IncludeScanner};
pub use lexer::{tokenize, Token, TokenKind};
pub use methodmap::parse_methodmap_body;
pub use params::{parse_params, split_top_level};
pub use tags::parse_comment;
