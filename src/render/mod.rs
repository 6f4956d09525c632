//! Output rendering for incscan.
//!
//! Serializes collected entries as a single JSON array document.

mod json;

pub use json::{render_json, write_json};
