//! Include file scanning.
//!
//! A file is split into `(doc block, code)` pairs: each `/** ... */` block
//! owns the code after it up to the next `/**` or end of file. Each pair is
//! run through the tag parser and then the declaration classifier.

use std::fs;
use std::path::Path;

use crate::error::{IncError, Result};
use crate::types::ApiEntry;

use super::declaration::DeclarationClassifier;
use super::tags::parse_comment;

const DOC_OPEN: &str = "/**";
const DOC_CLOSE: &str = "*/";

/// A documentation block and the code it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocChunk<'a> {
    /// Raw block including its `/**` and `*/` delimiters.
    pub comment: &'a str,
    /// Code following the block, leading whitespace removed.
    pub code: &'a str,
}

/// Split normalized source into documentation chunks.
///
/// Only blocks outside braces start a chunk; blocks inside a body (methodmap
/// members, enum values) stay part of the enclosing code. Text before the
/// first block is not owned by any comment. An unterminated block ends the
/// scan.
pub fn doc_chunks(source: &str) -> Vec<DocChunk<'_>> {
    let (blocks, limit) = top_level_doc_blocks(source);

    blocks
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let code_end = blocks.get(i + 1).map_or(limit, |next| next.0);
            DocChunk {
                comment: &source[start..end],
                code: source[end..code_end].trim_start(),
            }
        })
        .collect()
}

/// Spans of `/** ... */` blocks at brace depth 0, plus where scanning stopped.
fn top_level_doc_blocks(source: &str) -> (Vec<(usize, usize)>, usize) {
    let bytes = source.as_bytes();
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = source[i..].find('\n').map_or(bytes.len(), |n| i + n);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let Some(close) = source[i + 2..].find(DOC_CLOSE) else {
                    return (blocks, i);
                };
                let end = i + 2 + close + DOC_CLOSE.len();
                if depth == 0 && source[i..].starts_with(DOC_OPEN) {
                    blocks.push((i, end));
                }
                i = end;
                continue;
            }
            quote @ (b'"' | b'\'') => {
                i = skip_quoted(bytes, i, quote);
                continue;
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }

    (blocks, bytes.len())
}

/// Index just past a quoted literal starting at `start`. Stops at a newline
/// so stray apostrophes in prose cannot swallow the file.
fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scans include files into API entries.
#[derive(Debug, Clone, Default)]
pub struct IncludeScanner {
    classifier: DeclarationClassifier,
}

impl IncludeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse include source text. `source_file` is stamped on every entry.
    pub fn parse(&self, source: &str, source_file: &str) -> Vec<ApiEntry> {
        let source = normalize_line_endings(source);

        doc_chunks(&source)
            .into_iter()
            .filter_map(|chunk| {
                let comment = parse_comment(chunk.comment);
                self.classifier.classify(chunk.code, &comment, source_file)
            })
            .collect()
    }

    /// Read and parse a file. Invalid UTF-8 is replaced rather than rejected.
    pub fn scan_file(&self, path: &Path, source_file: &str) -> Result<Vec<ApiEntry>> {
        let bytes = fs::read(path).map_err(|e| IncError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?;
        let source = String::from_utf8_lossy(&bytes);

        Ok(self.parse(&source, source_file))
    }
}

/// Parse include source text with the default classifier.
pub fn parse_include(source: &str, source_file: &str) -> Vec<ApiEntry> {
    IncludeScanner::new().parse(source, source_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FunctionKind, Parameter};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const CLIENTS_INC: &str = r#"
#if defined _clients_included
 #endinput
#endif
#define _clients_included

/**
 * Client connection states.
 */

/**
 * Returns the client's name.
 *
 * @param client        Player index.
 * @param name          Buffer to store the client's name.
 * @param maxlen        Maximum length of string buffer (includes NULL terminator).
 * @return              True on success, false otherwise.
 * @error               If the client is not connected an error will be thrown.
 */
native bool GetClientName(int client, char[] name, int maxlen);

/**
 * Called when a client is entering the game.
 *
 * @param client        Client index.
 */
forward void OnClientPutInServer(int client);

/**
 * A dynamic list.
 */
methodmap ArrayList < Handle
{
    public native ArrayList(int blocksize=1, int startsize=0);

    public native void Clear();

    property int Length {
        public native get();
    }
};

/**
 * Sort comparison callback.
 */
typedef SortFuncADTArray = function int (int index1, int index2, Handle array, Handle hndl);
"#;

    #[test]
    fn test_doc_chunks_adjacency() {
        let source = "head\n/** a */\ncode a\n/** b */ code b\n/** c */";
        let chunks = doc_chunks(source);

        assert_eq!(
            chunks,
            vec![
                DocChunk { comment: "/** a */", code: "code a\n" },
                DocChunk { comment: "/** b */", code: "code b\n" },
                DocChunk { comment: "/** c */", code: "" },
            ]
        );
    }

    #[test]
    fn test_doc_chunks_unterminated() {
        let chunks = doc_chunks("/** ok */ native void A();\n/** never closed");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].code, "native void A();\n");
    }

    #[test]
    fn test_plain_block_comments_are_not_doc_blocks() {
        let chunks = doc_chunks("/* license */\n/** doc */\nnative void A(); /* trailing */");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].comment, "/** doc */");
    }

    #[test]
    fn test_doc_blocks_inside_braces_stay_with_body() {
        let source = r#"/** Map. */
methodmap Map {
    /** Inner. */
    public native void Go(const char[] s = "{");
};
/** After. */
native void After();
"#;
        let chunks = doc_chunks(source);

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].code.contains("public native void Go"));
        assert_eq!(chunks[1].comment, "/** After. */");
    }

    #[test]
    fn test_documented_methodmap_members() {
        let source = "/** List. */\nmethodmap List < Handle\n{\n    /**\n     * Makes one.\n     */\n    public native List();\n\n    /** Adds. */\n    public native int Push(int value);\n};\n";
        let entries = parse_include(source, "list.inc");

        assert_eq!(entries.len(), 1);
        let ApiEntry::Methodmap(m) = &entries[0] else {
            panic!("expected methodmap");
        };
        let names: Vec<&str> = m.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["List", "Push"]);
    }

    #[test]
    fn test_clients_fixture() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/clients.inc");

        let entries = IncludeScanner::new().scan_file(&path, "clients.inc").unwrap();

        let summary: Vec<(&str, &str)> = entries.iter().map(|e| (e.type_name(), e.name())).collect();
        assert_eq!(
            summary,
            vec![
                ("forward", "OnClientConnect"),
                ("forward", "OnClientConnected"),
                ("native", "GetClientName"),
                ("native", "GetSteamAccountID"),
                ("native", "GetClientAbsOrigin"),
                ("stock", "IsValidPlayer"),
                ("typedef", "ClientIterator"),
                ("methodmap", "ClientList"),
            ]
        );

        assert_eq!(entries[3].params()[1].default.as_deref(), Some("true"));
        assert_eq!(entries[4].params()[1].param_type, "float");
        assert_eq!(entries[5].tags().deprecated, vec!["Use IsClientInGame() directly."]);

        let ApiEntry::Methodmap(m) = &entries[7] else {
            panic!("expected methodmap");
        };
        assert_eq!(m.inherits.as_deref(), Some("ArrayList"));
        let methods: Vec<(&str, &str)> = m
            .methods
            .iter()
            .map(|m| (m.name.as_str(), m.return_type.as_str()))
            .collect();
        assert_eq!(
            methods,
            vec![("ClientList", "ClientList"), ("Push", "int"), ("Clear", "void")]
        );
        assert_eq!(m.properties.len(), 1);
        assert_eq!(m.properties[0].name, "Empty");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_parse_include_file() {
        let entries = parse_include(CLIENTS_INC, "clients.inc");

        let summary: Vec<(&str, &str)> = entries.iter().map(|e| (e.type_name(), e.name())).collect();
        assert_eq!(
            summary,
            vec![
                ("native", "GetClientName"),
                ("forward", "OnClientPutInServer"),
                ("methodmap", "ArrayList"),
                ("typedef", "SortFuncADTArray"),
            ]
        );
        assert!(entries.iter().all(|e| e.source_file() == "clients.inc"));

        let ApiEntry::Function(f) = &entries[0] else {
            panic!("expected function");
        };
        assert_eq!(f.kind, FunctionKind::Native);
        assert_eq!(f.comment, "Returns the client's name.");
        assert_eq!(f.tags.returns, "True on success, false otherwise.");
        assert_eq!(
            f.tags.error,
            vec!["If the client is not connected an error will be thrown."]
        );
        assert_eq!(
            f.params,
            vec![
                Parameter::new("client", "int").with_description("Player index."),
                Parameter::new("name", "char[]")
                    .with_description("Buffer to store the client's name."),
                Parameter::new("maxlen", "int").with_description(
                    "Maximum length of string buffer (includes NULL terminator)."
                ),
            ]
        );

        let ApiEntry::Methodmap(m) = &entries[2] else {
            panic!("expected methodmap");
        };
        assert_eq!(m.inherits.as_deref(), Some("Handle"));
        assert_eq!(m.methods.len(), 2);
        assert!(m.properties.is_empty());
    }

    #[test]
    fn test_crlf_source() {
        let source = "/**\r\n * Does X.\r\n */\r\nnative void DoX(int a,\r\n    int b);\r\n";
        let entries = parse_include(source, "x.inc");

        let ApiEntry::Function(f) = &entries[0] else {
            panic!("expected function");
        };
        assert_eq!(f.comment, "Does X.");
        assert_eq!(f.full_declaration, "native void DoX(int a,     int b);");
    }

    #[test]
    fn test_undocumented_declarations_ignored() {
        let entries = parse_include("native void A();\nnative void B();\n", "x.inc");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clients.inc");
        std::fs::write(&path, CLIENTS_INC).unwrap();

        let entries = IncludeScanner::new().scan_file(&path, "clients.inc").unwrap();

        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_scan_file_lossy_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.inc");
        let mut bytes = b"/** Caf\xe9 */\nnative void Cafe();\n".to_vec();
        bytes.push(b'\n');
        std::fs::write(&path, bytes).unwrap();

        let entries = IncludeScanner::new().scan_file(&path, "latin1.inc").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "Cafe");
    }

    #[test]
    fn test_scan_missing_file() {
        let result = IncludeScanner::new().scan_file(Path::new("/nonexistent/x.inc"), "x.inc");
        assert!(matches!(result, Err(IncError::Io { .. })));
    }
}
