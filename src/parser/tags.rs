//! Documentation block parsing.
//!
//! A block such as
//!
//! ```text
//! /**
//!  * Retrieves a client's name.
//!  *
//!  * @param client     Player index.
//!  * @param buffer     Buffer to store the name,
//!  *                   truncated if too long.
//!  * @return           True on success.
//!  * @error            Invalid client index.
//!  */
//! ```
//!
//! becomes a description plus a [`TagSet`]. Tags start at a line beginning
//! with `@word` and run until the next such line; continuation lines are
//! joined with single spaces.

use crate::types::{ParamTag, ParsedComment, TagSet};

/// Parse a raw `/** ... */` block. Never fails: an empty or malformed block
/// yields an empty description and tag set.
pub fn parse_comment(block: &str) -> ParsedComment {
    let body = normalize_block(block);

    let mut lines = body.lines().peekable();
    let mut description = Vec::new();
    while let Some(line) = lines.next_if(|l| !is_tag_line(l)) {
        description.push(line);
    }

    let mut tags = TagSet::default();
    let mut current: Option<(&str, Vec<&str>)> = None;

    for line in lines {
        if is_tag_line(line) {
            if let Some((name, content)) = current.take() {
                apply_tag(&mut tags, name, &content);
            }
            let rest = &line[1..];
            let name_len = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let first = rest[name_len..].trim();
            current = Some((&rest[..name_len], vec![first]));
        } else if let Some((_, content)) = current.as_mut() {
            content.push(line);
        }
    }
    if let Some((name, content)) = current {
        apply_tag(&mut tags, name, &content);
    }

    ParsedComment {
        description: description.join("\n").trim().to_string(),
        tags,
    }
}

/// Strip the block delimiters and the leading `*` markers of each line,
/// trimming every line.
fn normalize_block(block: &str) -> String {
    let inner = block.trim();
    let inner = inner.strip_prefix("/*").unwrap_or(inner);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    let lines: Vec<&str> = inner
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .collect();

    lines.join("\n").trim().to_string()
}

fn is_tag_line(line: &str) -> bool {
    line.strip_prefix('@')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn apply_tag(tags: &mut TagSet, name: &str, content: &[&str]) {
    let text = content
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    match name {
        "param" => {
            let name_len = text
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(text.len());
            if name_len > 0 {
                tags.param
                    .push(ParamTag::new(&text[..name_len], text[name_len..].trim()));
            }
        }
        "return" => tags.returns = text,
        "error" => tags.error.push(text),
        "note" => tags.note.push(text),
        "deprecated" => tags.deprecated.push(text),
        "see" => tags.see.push(text),
        "author" => tags.author.push(text),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_description_and_tags() {
        let block = "/** Does X.\n * @param a the value\n * @return true on success */";

        let parsed = parse_comment(block);

        assert_eq!(parsed.description, "Does X.");
        assert_eq!(parsed.tags.param, vec![ParamTag::new("a", "the value")]);
        assert_eq!(parsed.tags.returns, "true on success");
    }

    #[test]
    fn test_multiline_tag_content() {
        let block = r#"/**
 * Retrieves a client's name.
 *
 * @param client     Player index.
 * @param buffer     Buffer to store the name,
 *                   truncated if too long.
 * @return           True on success.
 * @error            Invalid client index.
 */"#;

        let parsed = parse_comment(block);

        assert_eq!(parsed.description, "Retrieves a client's name.");
        assert_eq!(
            parsed.tags.param,
            vec![
                ParamTag::new("client", "Player index."),
                ParamTag::new("buffer", "Buffer to store the name, truncated if too long."),
            ]
        );
        assert_eq!(parsed.tags.returns, "True on success.");
        assert_eq!(parsed.tags.error, vec!["Invalid client index."]);
    }

    #[test]
    fn test_multiline_description_kept() {
        let block = "/**\n * First line.\n *\n * Second paragraph.\n */";

        let parsed = parse_comment(block);

        assert_eq!(parsed.description, "First line.\n\nSecond paragraph.");
        assert_eq!(parsed.tags, TagSet::default());
    }

    #[test]
    fn test_repeated_tags() {
        let block = "/**\n * @note one\n * @note two\n * @return first\n * @return second\n * @see Other\n */";

        let parsed = parse_comment(block);

        assert_eq!(parsed.description, "");
        assert_eq!(parsed.tags.note, vec!["one", "two"]);
        assert_eq!(parsed.tags.returns, "second");
        assert_eq!(parsed.tags.see, vec!["Other"]);
    }

    #[test]
    fn test_deprecated_and_author() {
        let block = "/**\n * Old API.\n * @deprecated Use NewThing instead.\n * @author someone\n */";

        let parsed = parse_comment(block);

        assert!(parsed.tags.is_deprecated());
        assert_eq!(parsed.tags.deprecated, vec!["Use NewThing instead."]);
        assert_eq!(parsed.tags.author, vec!["someone"]);
    }

    #[test]
    fn test_unknown_tags_ignored() {
        let block = "/**\n * Text.\n * @internal hidden\n * @return x\n */";

        let parsed = parse_comment(block);

        assert_eq!(parsed.description, "Text.");
        assert_eq!(parsed.tags.returns, "x");
    }

    #[test]
    fn test_param_without_name_ignored() {
        let parsed = parse_comment("/** @param */");

        assert!(parsed.tags.param.is_empty());
    }

    #[test]
    fn test_inline_at_is_not_a_tag() {
        let block = "/**\n * Mail me at user@example.com for details.\n */";

        let parsed = parse_comment(block);

        assert_eq!(parsed.description, "Mail me at user@example.com for details.");
        assert_eq!(parsed.tags, TagSet::default());
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(parse_comment("/**/"), ParsedComment::default());
        assert_eq!(parse_comment("/** */"), ParsedComment::default());
    }
}
