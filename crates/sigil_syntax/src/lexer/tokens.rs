//! Token types for the sigil tokenizer.
//!
//! ## Notes
//! - Token kinds are canonical (uppercased) names from the registry, or one of the reserved kinds
//!   [`kinds::UNKNOWN`] / [`kinds::EOF`].
//! - Use `crate::token_helpers` for ergonomic kind checks at call sites.

use serde::Serialize;
use sigil_core::lang::kinds;

use crate::ast::Span;

/// 1-based line/column cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    /// Move past `text`: every newline starts a new line at column 1, every other character moves one column.
    pub fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Canonical kind name, or `UNKNOWN` / `EOF`.
    pub kind: String,
    /// Exact matched text.
    pub text: String,
    /// Capture groups of the pattern that matched.
    pub captures: Vec<Option<String>>,
    /// Index of the kind in the registry at match time; `None` for `UNKNOWN` and `EOF`.
    pub index: Option<usize>,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    /// Construct a token of a registered kind.
    pub fn new(
        kind: impl Into<String>,
        text: impl Into<String>,
        captures: Vec<Option<String>>,
        index: Option<usize>,
        at: Position,
        span: Span,
    ) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            captures,
            index,
            line: at.line,
            column: at.column,
            span,
        }
    }

    /// Construct an `UNKNOWN` token for text no pattern matched.
    pub fn unknown(text: impl Into<String>, at: Position, span: Span) -> Self {
        Self::new(kinds::UNKNOWN, text, Vec::new(), None, at, span)
    }

    /// Construct the synthetic end-of-input token, positioned just past the last character.
    pub fn eof(at: Position, offset: usize) -> Self {
        Self::new(kinds::EOF, "", Vec::new(), None, at, Span::new(offset, offset))
    }

    /// Registry index as a signed number, with `-1` for unregistered kinds.
    pub fn index_or_sentinel(&self) -> isize {
        self.index.map_or(-1, |i| i as isize)
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

/// A prefix-scanned token sequence plus its end-of-input token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub eof: Token,
}
