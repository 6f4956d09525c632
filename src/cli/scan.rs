//! Scan command implementation.
//!
//! Discovers include files, parses each one and writes the combined JSON
//! array to the output file.

use crate::collect::collect;
use crate::discovery::discover;
use crate::error::{IncError, Result};
use crate::output::{display_path, plural, Printer, Status};
use crate::parser::IncludeScanner;
use crate::render::write_json;
use crate::validation::{lint_entries, print_diagnostics};

use super::Cli;

/// Run a scan.
///
/// A missing include directory is reported and the run ends without
/// writing output. Per-file failures never abort the run.
pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let discovered = match discover(&cli.include_dir) {
        Ok(d) => d,
        Err(e @ IncError::MissingInput { .. }) => {
            printer.emit(Status::Error, &e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    printer.emit(
        Status::Scanning,
        &format!(
            "{} ({})",
            display_path(&discovered.root),
            plural(discovered.files.len(), "file", "files")
        ),
    );

    let scanner = IncludeScanner::new();
    let collection = collect(&discovered.files, &scanner, printer);

    let lints = lint_entries(&collection.entries);
    print_diagnostics(&lints, printer);

    let mut summary = format!(
        "{} from {}",
        plural(collection.entries.len(), "entry", "entries"),
        plural(collection.scanned, "file", "files")
    );
    if !collection.failed.is_empty() {
        summary.push_str(&format!(", {} failed", collection.failed.len()));
    }
    if !lints.is_ok() {
        summary.push_str(&format!(", {}", plural(lints.warning_count(), "warning", "warnings")));
    }
    printer.emit(Status::Finished, &summary);

    let output = discovered.manifest.effective_output(cli.output.as_deref());
    write_json(&collection.entries, &output, discovered.manifest.pretty)?;
    printer.emit(Status::Wrote, &display_path(&output));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("incscan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_empty_directory_writes_empty_array() {
        let dir = tempdir().unwrap();
        let include = dir.path().join("include");
        fs::create_dir(&include).unwrap();
        let out = dir.path().join("api.json");

        run(
            cli(&[include.to_str().unwrap(), "-o", out.to_str().unwrap()]),
            &Printer::silent(),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "[]");
    }

    #[test]
    fn test_missing_directory_writes_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("api.json");

        let result = run(
            cli(&[dir.path().join("nope").to_str().unwrap(), "-o", out.to_str().unwrap()]),
            &Printer::silent(),
        );

        assert!(result.is_ok());
        assert!(!out.exists());
    }

    #[test]
    fn test_scan_writes_entries() {
        let dir = tempdir().unwrap();
        let include = dir.path().join("include");
        fs::create_dir(&include).unwrap();
        fs::write(
            include.join("a.inc"),
            "/**\n * Does X.\n * @param a the value\n * @return true on success\n */\nnative bool DoX(int a);\n",
        )
        .unwrap();
        fs::write(include.join("b.inc"), "/** Typed. */\ntypedef Cb = function void (int x);\n").unwrap();
        fs::write(include.join("notes.txt"), "/** Not scanned. */\nnative void Skip();\n").unwrap();
        let out = dir.path().join("api.json");

        run(
            cli(&[include.to_str().unwrap(), "--output", out.to_str().unwrap()]),
            &Printer::silent(),
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["DoX", "Cb"]);
        assert_eq!(json[0]["source_file"], "a.inc");
        assert_eq!(json[1]["type"], "typedef");
    }

    #[test]
    fn test_manifest_output_and_compact() {
        let dir = tempdir().unwrap();
        let include = dir.path().join("include");
        fs::create_dir(&include).unwrap();
        let out = dir.path().join("from-manifest.json");
        fs::write(
            include.join("incscan.yaml"),
            format!("output: {}\npretty: false\n", out.display()),
        )
        .unwrap();
        fs::write(include.join("a.inc"), "/** X. */\nnative void X();\n").unwrap();

        run(cli(&[include.to_str().unwrap()]), &Printer::silent()).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(!written.contains('\n'));
        assert!(written.contains(r#""name":"X""#));
    }
}
