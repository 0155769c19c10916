//! Pattern matchers for token kinds.
//!
//! The registry and tokenizer only see the [`Pattern`] trait, so the engine is not tied to one matching library.
//! Two implementations ship with the crate:
//! - [`RegexPattern`], backed by the `regex` crate (what grammar files and the built-in grammar use),
//! - [`LiteralPattern`], an exact string.
//!
//! ## Notes
//! - A match always starts at the beginning of the text it is given. The tokenizer hands each pattern the
//!   remaining input, so `\b` and `^` see the current cursor as the start of text.

use std::fmt;

use regex::Regex;
use thiserror::Error;

/// A successful match: how many bytes matched, and the pattern's capture groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Length of the match in bytes. At most the input length, and on a char boundary of it.
    pub len: usize,
    /// Capture groups in order; `None` for a group that did not participate.
    pub captures: Vec<Option<String>>,
}

impl PatternMatch {
    /// Return the matched slice of `text` (the input the match was produced from).
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[..self.len]
    }
}

/// A matcher for one alternative of a token kind.
///
/// Implementations must report a `len` that is at most `text.len()` and falls on a char boundary of `text`.
/// The registry discards prefix matches that break this (or are empty) and moves on to the next pattern.
pub trait Pattern: fmt::Debug + Send + Sync {
    /// Match a prefix of `text`.
    fn match_prefix(&self, text: &str) -> Option<PatternMatch>;

    /// Match the whole of `text`.
    fn match_whole(&self, text: &str) -> Option<PatternMatch>;

    /// Human-readable source of the pattern (regex source or literal).
    fn source(&self) -> &str;
}

/// Error building a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {error}")]
    InvalidRegex {
        pattern: String,
        #[source]
        error: regex::Error,
    },
}

/// A regular-expression pattern.
///
/// The source is compiled twice: once anchored at the start (`\A(?:…)`) for prefix scanning and once anchored
/// at both ends (`\A(?:…)\z`) for whole-word classification.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    prefix: Regex,
    whole: Regex,
}

impl RegexPattern {
    /// Compile a pattern from regex source.
    ///
    /// ## Errors
    /// Returns [`PatternError::InvalidRegex`] if `source` is not a valid regular expression.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let compile = |anchored: String| {
            Regex::new(&anchored).map_err(|error| PatternError::InvalidRegex {
                pattern: source.to_string(),
                error,
            })
        };
        Ok(Self {
            source: source.to_string(),
            prefix: compile(format!(r"\A(?:{source})"))?,
            whole: compile(format!(r"\A(?:{source})\z"))?,
        })
    }

    fn run(regex: &Regex, text: &str) -> Option<PatternMatch> {
        let caps = regex.captures(text)?;
        let len = caps.get(0).map_or(0, |m| m.end());
        let captures = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();
        Some(PatternMatch { len, captures })
    }
}

impl Pattern for RegexPattern {
    fn match_prefix(&self, text: &str) -> Option<PatternMatch> {
        Self::run(&self.prefix, text)
    }

    fn match_whole(&self, text: &str) -> Option<PatternMatch> {
        Self::run(&self.whole, text)
    }

    fn source(&self) -> &str {
        &self.source
    }
}

/// An exact-spelling pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralPattern {
    literal: String,
}

impl LiteralPattern {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl Pattern for LiteralPattern {
    fn match_prefix(&self, text: &str) -> Option<PatternMatch> {
        text.starts_with(self.literal.as_str()).then(|| PatternMatch {
            len: self.literal.len(),
            captures: Vec::new(),
        })
    }

    fn match_whole(&self, text: &str) -> Option<PatternMatch> {
        (text == self.literal).then(|| PatternMatch {
            len: self.literal.len(),
            captures: Vec::new(),
        })
    }

    fn source(&self) -> &str {
        &self.literal
    }
}
