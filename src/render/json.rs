//! JSON array output.

use std::fs;
use std::path::Path;

use crate::error::{IncError, Result};
use crate::types::ApiEntry;

/// Serialize entries as a JSON array, pretty-printed with 2-space indent
/// when `pretty` is set.
pub fn render_json(entries: &[ApiEntry], pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(entries)
    } else {
        serde_json::to_string(entries)
    };

    rendered.map_err(|e| IncError::Output {
        message: format!("Failed to serialize entries: {}", e),
        help: None,
    })
}

/// Write entries to `path`, creating parent directories as needed.
pub fn write_json(entries: &[ApiEntry], path: &Path, pretty: bool) -> Result<()> {
    let json = render_json(entries, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IncError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, json).map_err(|e| IncError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}
