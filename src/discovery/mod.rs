//! Include file discovery.
//!
//! Finds the include files under a root directory, honouring an optional
//! `incscan.yaml` manifest for extensions and excludes.
//!
//! # Example
//!
//! ```ignore
//! use incscan::discovery::discover;
//!
//! let result = discover("./scripting/include")?;
//! println!("Found {} files", result.files.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{IncError, Result};

pub use manifest::{Manifest, DEFAULT_OUTPUT};
pub use scanner::{scan_directory, SourceFile};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "incscan.yaml";

/// Result of discovering include files.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The include directory.
    pub root: PathBuf,

    /// The loaded manifest (may be default if no incscan.yaml found).
    pub manifest: Manifest,

    /// Whether an incscan.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered files in visitation order.
    pub files: Vec<SourceFile>,
}

/// Discover include files under `root`.
///
/// Fails with [`IncError::MissingInput`] when `root` is not a directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    if !root.is_dir() {
        return Err(IncError::MissingInput {
            path: root,
            help: Some("Pass the path to an include directory".to_string()),
        });
    }

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.is_file() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let files = scan_directory(&root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        files,
    })
}
