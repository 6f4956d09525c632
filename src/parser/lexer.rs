//! Tokenizer for declaration code.
//!
//! Produces a flat token stream with byte offsets into the source. Whitespace
//! and `//` / `/* */` comments are skipped; string and character literals are
//! kept whole so braces inside them never unbalance a scope. Every token
//! records whether it is the first token on its line.

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword: `[A-Za-z_][A-Za-z0-9_]*`
    Ident,
    /// Numeric literal (loosely: digit followed by word characters or `.`)
    Number,
    /// `"..."` literal
    Str,
    /// `'...'` literal
    Char,
    /// Any other single character
    Punct(char),
}

/// A token with its byte range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    /// No other token precedes this one on its line.
    pub line_start: bool,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}

/// Tokenize a chunk of code.
pub fn tokenize(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut line_start = true;

    while pos < bytes.len() {
        let b = bytes[pos];

        if b == b'\n' {
            line_start = true;
            pos += 1;
            continue;
        }
        if b.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        // Comments
        if b == b'/' && bytes.get(pos + 1) == Some(&b'/') {
            pos = find_byte(bytes, pos, b'\n').unwrap_or(bytes.len());
            continue;
        }
        if b == b'/' && bytes.get(pos + 1) == Some(&b'*') {
            let body = &source[pos + 2..];
            let end = body.find("*/").map(|i| pos + 2 + i + 2).unwrap_or(bytes.len());
            if source[pos..end].contains('\n') {
                line_start = true;
            }
            pos = end;
            continue;
        }

        let start = pos;
        let kind = if b == b'_' || b.is_ascii_alphabetic() {
            pos = scan_while(bytes, pos, |c| c == b'_' || c.is_ascii_alphanumeric());
            TokenKind::Ident
        } else if b.is_ascii_digit() {
            pos = scan_while(bytes, pos, |c| c == b'_' || c == b'.' || c.is_ascii_alphanumeric());
            TokenKind::Number
        } else if b == b'"' || b == b'\'' {
            pos = scan_quoted(bytes, pos, b);
            if b == b'"' {
                TokenKind::Str
            } else {
                TokenKind::Char
            }
        } else {
            // Multi-byte characters become a single punct token.
            let c = source[pos..].chars().next().unwrap_or('\0');
            pos += c.len_utf8().max(1);
            TokenKind::Punct(c)
        };

        tokens.push(Token {
            kind,
            start,
            end: pos,
            line_start,
        });
        line_start = false;
    }

    tokens
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == needle).map(|i| from + i)
}

fn scan_while(bytes: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && pred(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Scan a quoted literal starting at the opening quote. Stops at the closing
/// quote or at an unescaped newline (unterminated literal).
fn scan_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'\n' => return pos,
            c if c == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    bytes.len()
}

/// Cursor over a token slice for recursive-descent matching.
///
/// Cloning a cursor is cheap; callers clone to attempt a match and only keep
/// the advanced cursor on success.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    pub fn at(source: &'a str, tokens: &'a [Token], pos: usize) -> Self {
        Self { source, tokens, pos }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    /// Token immediately before the cursor.
    pub fn prev(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Text of the current token, if it is an identifier.
    pub fn peek_ident(&self) -> Option<&'a str> {
        self.peek()
            .filter(|t| t.kind == TokenKind::Ident)
            .map(|t| t.text(self.source))
    }

    /// Consume an identifier and return its text.
    pub fn ident(&mut self) -> Option<&'a str> {
        let text = self.peek_ident()?;
        self.pos += 1;
        Some(text)
    }

    /// Consume the identifier `keyword` if it is next.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.peek_ident() == Some(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the punctuation `c` if it is next.
    pub fn eat_punct(&mut self, c: char) -> bool {
        if self.peek().is_some_and(|t| t.is_punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn peek_punct(&self, c: char) -> bool {
        self.peek().is_some_and(|t| t.is_punct(c))
    }

    /// Consume a balanced group starting at `open`, returning the byte range
    /// of its interior. Only `open`/`close` affect depth.
    pub fn balanced(&mut self, open: char, close: char) -> Option<(usize, usize)> {
        let first = self.peek().filter(|t| t.is_punct(open))?;
        let mut depth = 0usize;
        let mut i = self.pos;
        while let Some(token) = self.tokens.get(i) {
            if token.is_punct(open) {
                depth += 1;
            } else if token.is_punct(close) {
                depth -= 1;
                if depth == 0 {
                    self.pos = i + 1;
                    return Some((first.end, token.start));
                }
            }
            i += 1;
        }
        None
    }

    /// Skip one statement: up to and including the next `;` at depth zero,
    /// or a whole `{ ... }` block (plus an optional trailing `;`).
    pub fn skip_statement(&mut self) {
        while let Some(token) = self.peek() {
            if token.is_punct('{') {
                if self.balanced('{', '}').is_none() {
                    self.pos = self.tokens.len();
                }
                self.eat_punct(';');
                return;
            }
            self.pos += 1;
            if token.is_punct(';') {
                return;
            }
        }
    }
}
