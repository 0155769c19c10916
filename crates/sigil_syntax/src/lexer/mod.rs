//! Tokenizer for the sigil scripting dialect
//!
//! Token kinds come from a caller-owned [`TokenRegistry`]; nothing about the dialect is hard-coded here except
//! whitespace handling. Two scanning disciplines are provided:
//! - **prefix scan** ([`tokenize`], used by the parser): walks the source with a cursor, skipping whitespace and
//!   emitting the first registered kind (in priority order) that matches at the cursor. Token boundaries need not
//!   be separated by spaces (`$x==10{` is four tokens).
//! - **whole word** ([`tokenize_words`]): splits on whitespace and classifies each word in its entirety. Only
//!   suitable for space-delimited input.
//!
//! Neither discipline fails: text no kind matches becomes `UNKNOWN` tokens.
//!
//! ## Module Structure
//!
//! - `registry` - TokenRegistry, KindEntry, MatchMode
//! - `tokens` - Token, Position, TokenStream

mod registry;
pub mod tokens;

pub use registry::{KindEntry, KindMatch, MatchMode, TokenRegistry};
pub use tokens::{Position, Token, TokenStream};

use sigil_core::lang::kinds;

use crate::ast::Span;

// ============================================================================
// TOKENIZER STATE
// ----------------------------------------------------------------------------
// [cursor] → whitespace run? → skip, update line/column
//          → first kind matching a prefix? → emit token, advance by match
//          → otherwise → emit one-char UNKNOWN, advance by one char
// Every step consumes at least one character.
// ============================================================================

/// Prefix-scan tokenizer over one source string.
pub struct Tokenizer<'r, 's> {
    registry: &'r TokenRegistry,
    source: &'s str,
    pos: usize,
    position: Position,
    tokens: Vec<Token>,
}

impl<'r, 's> Tokenizer<'r, 's> {
    /// Create a tokenizer for `source` using the kinds in `registry`.
    pub fn new(registry: &'r TokenRegistry, source: &'s str) -> Self {
        Self {
            registry,
            source,
            pos: 0,
            position: Position::START,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The result contains no end-of-input token; it is empty for empty or all-whitespace source.
    pub fn tokenize(self) -> Vec<Token> {
        self.scan().tokens
    }

    /// Tokenize the entire source and build the end-of-input token positioned just past the last character.
    pub fn scan(mut self) -> TokenStream {
        while self.pos < self.source.len() {
            self.scan_token();
        }
        let eof = Token::eof(self.position, self.pos);
        TokenStream {
            tokens: self.tokens,
            eof,
        }
    }

    fn scan_token(&mut self) {
        let (registry, source) = (self.registry, self.source);
        let rest = &source[self.pos..];

        let whitespace = rest.len() - rest.trim_start().len();
        if whitespace > 0 {
            self.consume(whitespace);
            return;
        }

        match registry.first_prefix_match(rest) {
            // The registry only yields non-empty matches that end on a char boundary of `rest`.
            Some(found) => {
                let len = found.matched.len;
                tracing::trace!(kind = found.kind.name(), text = &rest[..len], line = self.position.line, "matched");
                let token = Token::new(
                    found.kind.name(),
                    &rest[..len],
                    found.matched.captures,
                    Some(found.index),
                    self.position,
                    Span::new(self.pos, self.pos + len),
                );
                self.tokens.push(token);
                self.consume(len);
            }
            None => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                tracing::trace!(text = &rest[..len], line = self.position.line, "unknown character");
                self.tokens.push(Token::unknown(
                    &rest[..len],
                    self.position,
                    Span::new(self.pos, self.pos + len),
                ));
                self.consume(len);
            }
        }
    }

    fn consume(&mut self, len: usize) {
        let end = self.pos + len;
        self.position.advance(&self.source[self.pos..end]);
        self.pos = end;
    }
}

/// Prefix-scan `source` with the kinds in `registry`.
///
/// This is a shorthand for `Tokenizer::new(registry, source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(registry: &TokenRegistry, source: &str) -> Vec<Token> {
    Tokenizer::new(registry, source).tokenize()
}

/// Split `source` on whitespace and classify each word by whole-text match.
///
/// A word no kind matches in its entirety becomes one `UNKNOWN` token. Not used by the parser.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize_words(registry: &TokenRegistry, source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = Position::START;
    let mut last = 0;

    for (start, word) in words(source) {
        position.advance(&source[last..start]);
        last = start;
        let span = Span::new(start, start + word.len());
        let token = match registry.first_matching_kind(word) {
            Some(found) => Token::new(
                found.kind.name(),
                word,
                found.matched.captures,
                Some(found.index),
                position,
                span,
            ),
            None => Token::unknown(word, position, span),
        };
        tokens.push(token);
    }

    tokens
}

/// Whitespace-separated words with their byte offsets.
fn words(source: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in source.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &source[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push((s, &source[s..]));
    }
    words
}

/// Build a fresh registry holding the built-in grammar (`sigil_core::lang::kinds::DEFAULT_KINDS`).
pub fn default_registry() -> TokenRegistry {
    let mut registry = TokenRegistry::new();
    for info in kinds::DEFAULT_KINDS {
        registry
            .add_regex_with_priority(info.name, info.pattern, info.priority)
            .expect("INVARIANT: built-in token patterns are valid regexes");
    }
    registry
}

// ============================================================================
// TESTS
// ============================================================================
