//! Lint checks for collected API entries.
//!
//! Reports suspicious declarations as warnings. Lints never change the
//! output document or the exit status.

mod checks;
mod warning;

pub use checks::{check_duplicate_entries, check_duplicate_params, check_param_docs};
pub use warning::{Diagnostic, ValidationResult};

use crate::output::{Printer, Status};
use crate::types::ApiEntry;

/// Run all lint checks against the entries.
pub fn lint_entries(entries: &[ApiEntry]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(check_duplicate_params(entries));
    result.merge(check_param_docs(entries));
    result.merge(check_duplicate_entries(entries));

    result
}

/// Print diagnostics as warning status lines.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        printer.emit(
            Status::Warning,
            &format!("{} {}", d, printer.dim(&format!("[{}]", d.code))),
        );
        if let Some(help) = &d.help {
            printer.emit(Status::Help, help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_include;

    #[test]
    fn test_lint_combines_checks() {
        let source = "/**\n * @param ghost Gone.\n */\nnative void F(int a, int a);\n";
        let entries = parse_include(source, "x.inc");

        let result = lint_entries(&entries);

        let codes: Vec<&str> = result.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["incscan::lint::duplicate-param", "incscan::lint::unknown-param-doc"]
        );
    }

    #[test]
    fn test_lint_empty() {
        assert!(lint_entries(&[]).is_ok());
    }
}
