//! Declaration classification.
//!
//! Given the code that follows a documentation block, find the declaration
//! it documents. Candidate statements are the tokens that start a line at
//! brace depth zero; each shape is tried against every candidate in priority
//! order (function-like, methodmap, typedef) and the first shape to match
//! wins. A chunk matching nothing yields `None`.

use crate::types::{
    ApiEntry, FunctionEntry, FunctionKind, MethodmapEntry, ParsedComment, TypedefEntry,
};

use super::lexer::{tokenize, Cursor, Token};
use super::methodmap::parse_methodmap_body;
use super::params::parse_params;

/// Keywords and markers recognized by the classifier.
///
/// Built once and shared by reference; never mutated after construction.
#[derive(Debug, Clone)]
pub struct DeclarationClassifier {
    /// Keywords that introduce a function-like declaration.
    function_keywords: &'static [&'static str],
    /// Extra modifiers allowed after the leading keyword (`public static native`).
    modifiers: &'static [&'static str],
    /// Legacy marker between keyword and return type (`native New:Foo()`).
    new_marker: &'static str,
    methodmap_keyword: &'static str,
    typedef_keyword: &'static str,
    function_keyword: &'static str,
}

impl Default for DeclarationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// A matched function-like declaration, borrowed from the source.
#[derive(Debug, Clone)]
pub(crate) struct FunctionMatch<'a> {
    pub kind: FunctionKind,
    pub return_type: String,
    pub name: &'a str,
    pub params: &'a str,
    pub full_declaration: String,
}

impl DeclarationClassifier {
    pub fn new() -> Self {
        Self {
            function_keywords: &["native", "stock", "forward", "public"],
            modifiers: &["static"],
            new_marker: "New",
            methodmap_keyword: "methodmap",
            typedef_keyword: "typedef",
            function_keyword: "function",
        }
    }

    /// Classify a code chunk, building an entry documented by `comment`.
    pub fn classify(
        &self,
        code: &str,
        comment: &ParsedComment,
        source_file: &str,
    ) -> Option<ApiEntry> {
        let tokens = tokenize(code);
        let starts = statement_starts(&tokens);

        if let Some(found) = starts
            .iter()
            .find_map(|&i| self.match_function(&mut Cursor::at(code, &tokens, i), false))
        {
            return Some(ApiEntry::Function(FunctionEntry {
                name: found.name.to_string(),
                kind: found.kind,
                return_type: found.return_type,
                params: parse_params(found.params, comment),
                comment: comment.description.clone(),
                tags: comment.tags.clone(),
                full_declaration: found.full_declaration,
                source_file: source_file.to_string(),
            }));
        }

        if let Some(entry) = starts.iter().find_map(|&i| {
            self.match_methodmap(&mut Cursor::at(code, &tokens, i), comment, source_file)
        }) {
            return Some(entry);
        }

        starts.iter().find_map(|&i| {
            self.match_typedef(&mut Cursor::at(code, &tokens, i), comment, source_file)
        })
    }

    /// Match `keyword [modifiers] [New:] <type> <name>(<params>)` followed by
    /// `;` or a `{ ... }` body.
    ///
    /// With `constructor` set, a single identifier directly followed by `(`
    /// is accepted as a constructor returning its own type. On success the
    /// cursor is left after the terminator or body.
    pub(crate) fn match_function<'a>(
        &self,
        cursor: &mut Cursor<'a>,
        constructor: bool,
    ) -> Option<FunctionMatch<'a>> {
        let source = cursor.source();
        let start = cursor.peek()?.start;

        let keyword = cursor.peek_ident()?;
        if !self.function_keywords.contains(&keyword) {
            return None;
        }
        let mut kind = FunctionKind::from_keyword(keyword)?;
        cursor.bump();
        while let Some(word) = cursor.peek_ident() {
            if self.function_keywords.contains(&word) {
                kind = FunctionKind::from_keyword(word)?;
            } else if !self.modifiers.contains(&word) {
                break;
            }
            cursor.bump();
        }

        if cursor.peek_ident() == Some(self.new_marker)
            && cursor.peek_nth(1).is_some_and(|t| t.is_punct(':'))
        {
            cursor.bump();
            cursor.bump();
        }

        let (return_type, name) = if constructor && cursor.peek_nth(1).is_some_and(|t| t.is_punct('(')) {
            let name = cursor.ident()?;
            (name.to_string(), name)
        } else {
            let return_type = type_name(cursor)?;
            (return_type, cursor.ident()?)
        };

        let (params_start, params_end) = cursor.balanced('(', ')')?;
        let params = &source[params_start..params_end];

        let end = if cursor.peek_punct(';') {
            cursor.bump()?.end
        } else if cursor.peek_punct('{') {
            let header_end = cursor.prev()?.end;
            if cursor.balanced('{', '}').is_none() {
                // Unbalanced body; the header still stands.
                while cursor.bump().is_some() {}
            }
            header_end
        } else {
            return None;
        };

        Some(FunctionMatch {
            kind,
            return_type,
            name,
            params,
            full_declaration: collapse_newlines(&source[start..end]),
        })
    }

    /// Match `methodmap <name> [< <parent>] ... { <body> }`.
    fn match_methodmap(
        &self,
        cursor: &mut Cursor<'_>,
        comment: &ParsedComment,
        source_file: &str,
    ) -> Option<ApiEntry> {
        let source = cursor.source();
        let start = cursor.peek()?.start;

        if !cursor.eat_keyword(self.methodmap_keyword) {
            return None;
        }
        let name = cursor.ident()?;
        let inherits = if cursor.eat_punct('<') {
            Some(cursor.ident()?.to_string())
        } else {
            None
        };
        let header_end = cursor.prev()?.end;

        let mut methods = Vec::new();
        let mut properties = Vec::new();

        while let Some(token) = cursor.peek() {
            if token.is_punct('{') {
                if let Some((body_start, body_end)) = cursor.balanced('{', '}') {
                    (methods, properties) =
                        parse_methodmap_body(self, &source[body_start..body_end]);
                }
                break;
            }
            if token.is_punct(';') {
                break;
            }
            cursor.bump();
        }

        Some(ApiEntry::Methodmap(MethodmapEntry {
            name: name.to_string(),
            inherits,
            comment: comment.description.clone(),
            tags: comment.tags.clone(),
            methods,
            properties,
            full_declaration: collapse_newlines(&source[start..header_end]),
            source_file: source_file.to_string(),
        }))
    }

    /// Match `typedef <name> = function <type> (<params>);`.
    fn match_typedef(
        &self,
        cursor: &mut Cursor<'_>,
        comment: &ParsedComment,
        source_file: &str,
    ) -> Option<ApiEntry> {
        let source = cursor.source();
        let start = cursor.peek()?.start;

        if !cursor.eat_keyword(self.typedef_keyword) {
            return None;
        }
        let name = cursor.ident()?;
        if !cursor.eat_punct('=') || !cursor.eat_keyword(self.function_keyword) {
            return None;
        }
        let return_type = type_name(cursor)?;
        let (params_start, params_end) = cursor.balanced('(', ')')?;
        if !cursor.peek_punct(';') {
            return None;
        }
        let end = cursor.bump()?.end;

        Some(ApiEntry::Typedef(TypedefEntry {
            name: name.to_string(),
            return_type,
            params: parse_params(&source[params_start..params_end], comment),
            comment: comment.description.clone(),
            tags: comment.tags.clone(),
            full_declaration: collapse_newlines(&source[start..end]),
            source_file: source_file.to_string(),
        }))
    }
}

/// A type: identifier plus any `[]` suffixes, whitespace removed.
pub(crate) fn type_name(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut name = cursor.ident()?.to_string();
    while cursor.peek_punct('[') {
        let (start, end) = cursor.balanced('[', ']')?;
        name.push('[');
        name.push_str(cursor.source()[start..end].trim());
        name.push(']');
    }
    Some(name)
}

/// Indices of tokens that begin a line outside any `{ ... }` block.
fn statement_starts(tokens: &[Token]) -> Vec<usize> {
    let mut depth = 0usize;
    let mut starts = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if depth == 0 && token.line_start {
            starts.push(i);
        }
        if token.is_punct('{') {
            depth += 1;
        } else if token.is_punct('}') {
            depth = depth.saturating_sub(1);
        }
    }

    starts
}

/// Trim and replace each newline with a single space.
pub(crate) fn collapse_newlines(text: &str) -> String {
    text.trim().replace('\n', " ")
}
