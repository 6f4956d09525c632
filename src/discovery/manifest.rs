//! Scan manifest (incscan.yaml) parsing.
//!
//! An optional manifest at the root of the include directory controls which
//! files are scanned and how the output is written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IncError, Result};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "sourcemod_api.json";

/// Scan manifest loaded from incscan.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// File extensions to scan, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Output file; the CLI `--output` flag takes precedence.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output (2-space indent).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_extensions() -> Vec<String> {
    vec!["inc".to_string()]
}

fn default_pretty() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excludes: vec![],
            output: None,
            pretty: default_pretty(),
        }
    }
}

impl Manifest {
    /// Load manifest from an incscan.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IncError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| IncError::Config {
                message: format!("Invalid manifest: {}", e),
                help: Some("Check incscan.yaml syntax".to_string()),
            })
    }

    /// Whether a file has one of the scanned extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|want| want == ext))
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Output path: explicit flag, then manifest, then the default name.
    pub fn effective_output(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}
