//! Methodmap body parsing.
//!
//! Walks the members of a methodmap body. Properties are recorded with their
//! type; their `get`/`set` accessor blocks are skipped. Method-like members
//! reuse the classifier's function matching, with constructors allowed.
//! Nested methods never receive documentation.

use crate::types::{MethodEntry, ParsedComment, PropertyEntry};

use super::declaration::{type_name, DeclarationClassifier};
use super::lexer::{tokenize, Cursor};
use super::params::parse_params;

/// Extract `(methods, properties)` from the text between a methodmap's braces.
pub fn parse_methodmap_body(
    classifier: &DeclarationClassifier,
    body: &str,
) -> (Vec<MethodEntry>, Vec<PropertyEntry>) {
    let tokens = tokenize(body);
    let mut cursor = Cursor::new(body, &tokens);
    let undocumented = ParsedComment::default();

    let mut methods = Vec::new();
    let mut properties = Vec::new();

    while !cursor.is_eof() {
        if cursor.peek_ident() == Some("public")
            && cursor
                .peek_nth(1)
                .is_some_and(|t| t.text(body) == "property")
        {
            let mut attempt = cursor.clone();
            attempt.bump();
            attempt.bump();
            if let Some(property) = match_property(&mut attempt) {
                properties.push(property);
                cursor = attempt;
            }
            cursor.skip_statement();
            continue;
        }

        let mut attempt = cursor.clone();
        if let Some(found) = classifier.match_function(&mut attempt, true) {
            methods.push(MethodEntry {
                name: found.name.to_string(),
                kind: found.kind,
                return_type: found.return_type,
                params: parse_params(found.params, &undocumented),
                full_declaration: found.full_declaration,
            });
            cursor = attempt;
            continue;
        }

        cursor.skip_statement();
    }

    (methods, properties)
}

/// Match `<type> <name>` after `public property`.
fn match_property(cursor: &mut Cursor<'_>) -> Option<PropertyEntry> {
    let property_type = type_name(cursor)?;
    let name = cursor.ident()?;
    Some(PropertyEntry {
        name: name.to_string(),
        property_type,
    })
}
