//! Lint checks over collected entries.
//!
//! Each check takes the entry list and returns a `ValidationResult`.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::types::ApiEntry;

use super::warning::{Diagnostic, ValidationResult};

/// Parameter names repeated within one declaration.
pub fn check_duplicate_params(entries: &[ApiEntry]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in entries {
        let mut seen = HashSet::new();
        for param in entry.params() {
            if !seen.insert(param.name.as_str()) {
                result.push(
                    Diagnostic::new(
                        "incscan::lint::duplicate-param",
                        entry.source_file(),
                        format!(
                            "'{}' declares parameter '{}' more than once",
                            entry.name(),
                            param.name
                        ),
                    )
                    .with_help("Only the first description is attached to repeated names"),
                );
            }
        }
    }

    result
}

/// `@param` tags naming a parameter the declaration does not have.
///
/// Methodmaps have no parameters of their own and are skipped.
pub fn check_param_docs(entries: &[ApiEntry]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in entries {
        if matches!(entry, ApiEntry::Methodmap(_)) {
            continue;
        }
        let declared: HashSet<&str> = entry.params().iter().map(|p| p.name.as_str()).collect();

        for tag in &entry.tags().param {
            if !declared.contains(tag.name.as_str()) {
                result.push(Diagnostic::new(
                    "incscan::lint::unknown-param-doc",
                    entry.source_file(),
                    format!(
                        "'{}' documents parameter '{}' which is not declared",
                        entry.name(),
                        tag.name
                    ),
                ));
            }
        }
    }

    result
}

/// The same declaration name and type recognized more than once.
pub fn check_duplicate_entries(entries: &[ApiEntry]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut first_seen: HashMap<(&str, &str), &str> = HashMap::new();

    for entry in entries {
        let key = (entry.type_name(), entry.name());
        match first_seen.entry(key) {
            Entry::Occupied(first) => result.push(Diagnostic::new(
                "incscan::lint::duplicate-entry",
                entry.source_file(),
                format!(
                    "{} '{}' is also declared in {}",
                    entry.type_name(),
                    entry.name(),
                    first.get()
                ),
            )),
            Entry::Vacant(slot) => {
                slot.insert(entry.source_file());
            }
        }
    }

    result
}
