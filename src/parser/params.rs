//! Parameter list parsing.
//!
//! Splits the raw text between a declaration's parentheses into parameters.
//! Each piece must look like `[const] <type> [&]<name> [= <default>]`;
//! anything else (including variadic `any ...`) is dropped. Comments inside
//! the list are ignored.

use crate::types::{Parameter, ParsedComment};

use super::lexer::{tokenize, Cursor, Token, TokenKind};

/// Parse a raw parameter list, attaching descriptions from the comment's
/// `@param` tags.
pub fn parse_params(raw: &str, comment: &ParsedComment) -> Vec<Parameter> {
    split_top_level(raw)
        .into_iter()
        .filter_map(parse_param)
        .map(|param| {
            let description = comment
                .tags
                .param_description(&param.name)
                .unwrap_or_default()
                .to_string();
            param.with_description(description)
        })
        .collect()
}

/// Split on commas that are not nested in `()`, `[]` or `{}`, nor in an
/// angle pair opened directly after an identifier (`view_as<int>`).
///
/// Works on the token stream, so comments and string/char literals never
/// produce split points. Each piece spans its first to last token; pieces
/// without tokens are dropped.
pub fn split_top_level(raw: &str) -> Vec<&str> {
    let tokens = tokenize(raw);
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut angle = 0usize;
    let mut span: Option<(usize, usize)> = None;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Punct(',') if depth == 0 && angle == 0 => {
                if let Some((start, end)) = span.take() {
                    pieces.push(&raw[start..end]);
                }
                continue;
            }
            TokenKind::Punct('(' | '[' | '{') => depth += 1,
            TokenKind::Punct(')' | ']' | '}') => depth = depth.saturating_sub(1),
            TokenKind::Punct('<') if opens_angle(&tokens, i) => angle += 1,
            TokenKind::Punct('>') if angle > 0 => angle -= 1,
            _ => {}
        }
        span = Some(span.map_or((token.start, token.end), |(start, _)| (start, token.end)));
    }
    if let Some((start, end)) = span {
        pieces.push(&raw[start..end]);
    }

    pieces
}

/// `<` opens an angle pair only when glued to a preceding identifier and
/// not part of `<<` or `<=`.
fn opens_angle(tokens: &[Token], i: usize) -> bool {
    let after_ident = i
        .checked_sub(1)
        .and_then(|p| tokens.get(p))
        .is_some_and(|prev| prev.kind == TokenKind::Ident && prev.end == tokens[i].start);
    let shift_or_compare = tokens
        .get(i + 1)
        .is_some_and(|next| next.start == tokens[i].end && (next.is_punct('<') || next.is_punct('=')));
    after_ident && !shift_or_compare
}

/// Recognize a single parameter declaration.
fn parse_param(piece: &str) -> Option<Parameter> {
    let tokens = tokenize(piece);
    let mut cursor = Cursor::new(piece, &tokens);

    cursor.eat_keyword("const");

    let type_start = cursor.peek()?.start;
    cursor.ident()?;
    while cursor.peek_punct('[') {
        cursor.balanced('[', ']')?;
    }
    let type_end = cursor.prev()?.end;
    let param_type: String = piece[type_start..type_end]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    cursor.eat_punct('&');
    let name = cursor.ident()?;

    // Fixed dimensions after the name (`float vec[3]`) are not part of the type.
    while cursor.peek_punct('[') {
        cursor.balanced('[', ']')?;
    }

    let mut param = Parameter::new(name, param_type);

    if cursor.peek_punct('=') {
        let eq = cursor.bump()?;
        let default = piece[eq.end..].trim();
        if !default.is_empty() {
            param = param.with_default(default);
        }
    } else if !cursor.is_eof() {
        return None;
    }

    Some(param)
}
