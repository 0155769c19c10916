//! Small helper APIs for working with [`Token`].
//!
//! These helpers exist to keep kind comparisons and capture lookups out of the parser's grammar code.

use sigil_core::lang::kinds;

use crate::lexer::Token;

impl Token {
    /// Return `true` if this token is of the given canonical kind.
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Return `true` if no registered kind matched this token's text.
    pub fn is_unknown(&self) -> bool {
        self.is(kinds::UNKNOWN)
    }

    /// Return `true` for the synthetic end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.is(kinds::EOF)
    }

    /// Return the `n`-th capture group, if it participated in the match.
    pub fn capture(&self, n: usize) -> Option<&str> {
        self.captures.get(n)?.as_deref()
    }

    /// Return the keyword a keyword-form token captured (`if` for `if:`).
    pub fn keyword(&self) -> Option<&str> {
        self.capture(0)
    }

    /// Return `true` if this token can start a statement.
    pub fn starts_statement(&self) -> bool {
        kinds::is_statement_start(&self.kind)
    }
}
