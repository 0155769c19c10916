//! Token registry: the ordered catalogue of token kinds a tokenizer recognizes.
//!
//! ## Notes
//! - Kind names are case-insensitive; they are stored uppercased.
//! - Registering a name twice appends a pattern to the existing kind instead of creating a second kind.
//! - Registering with a priority re-sorts the whole list by descending priority. The sort is stable, so kinds
//!   with equal priority keep their relative registration order and tokenization stays deterministic.
//! - Scanning borrows the registry immutably; it must be fully configured before tokenizing or parsing.

use sigil_core::lang::kinds;

use crate::pattern::{LiteralPattern, Pattern, PatternError, PatternMatch, RegexPattern};

/// How much of the text a pattern must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// A non-empty prefix (prefix-scan tokenization).
    Prefix,
    /// The entire text (whole-word tokenization).
    Whole,
}

/// A registered token kind.
#[derive(Debug)]
pub struct KindEntry {
    name: String,
    patterns: Vec<Box<dyn Pattern>>,
    priority: i32,
}

impl KindEntry {
    /// Canonical (uppercased) kind name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Patterns in registration order.
    pub fn patterns(&self) -> &[Box<dyn Pattern>] {
        &self.patterns
    }

    /// First pattern (in registration order) matching `text` under `mode`.
    ///
    /// Prefix matches that are empty, longer than `text`, or end inside a character are ignored and the next
    /// pattern is tried. A kind that only matches the empty string never produces a token, so the tokenizer
    /// always advances, and every accepted `len` can slice `text`.
    pub fn match_text(&self, text: &str, mode: MatchMode) -> Option<PatternMatch> {
        self.patterns.iter().find_map(|pattern| match mode {
            MatchMode::Prefix => pattern
                .match_prefix(text)
                .filter(|m| m.len > 0 && text.is_char_boundary(m.len)),
            MatchMode::Whole => pattern.match_whole(text),
        })
    }
}

/// A kind that matched, with its registry index.
#[derive(Debug)]
pub struct KindMatch<'r> {
    pub index: usize,
    pub kind: &'r KindEntry,
    pub matched: PatternMatch,
}

/// Ordered catalogue of token kinds.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    kinds: Vec<KindEntry>,
}

impl TokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pattern` under `name`, appending to the kind if it already exists.
    ///
    /// The kind list is not re-sorted; a new kind goes to the end.
    pub fn add_pattern(&mut self, name: &str, pattern: impl Pattern + 'static) -> &mut Self {
        self.register(name, Box::new(pattern), None)
    }

    /// Register `pattern` under `name` with a priority, then stably re-sort kinds by descending priority.
    ///
    /// Re-registering an existing kind with a priority replaces that kind's priority.
    pub fn add_pattern_with_priority(&mut self, name: &str, pattern: impl Pattern + 'static, priority: i32) -> &mut Self {
        self.register(name, Box::new(pattern), Some(priority))
    }

    /// Register a regular-expression pattern.
    ///
    /// ## Errors
    /// Returns [`PatternError`] if `source` is not a valid regular expression.
    pub fn add_regex(&mut self, name: &str, source: &str) -> Result<&mut Self, PatternError> {
        let pattern = RegexPattern::new(source)?;
        Ok(self.add_pattern(name, pattern))
    }

    /// Register a regular-expression pattern with a priority.
    ///
    /// ## Errors
    /// Returns [`PatternError`] if `source` is not a valid regular expression.
    pub fn add_regex_with_priority(&mut self, name: &str, source: &str, priority: i32) -> Result<&mut Self, PatternError> {
        let pattern = RegexPattern::new(source)?;
        Ok(self.add_pattern_with_priority(name, pattern, priority))
    }

    /// Register an exact-spelling pattern.
    pub fn add_literal(&mut self, name: &str, literal: &str) -> &mut Self {
        self.add_pattern(name, LiteralPattern::new(literal))
    }

    /// Register a boxed pattern, with or without a priority.
    pub fn register(&mut self, name: &str, pattern: Box<dyn Pattern>, priority: Option<i32>) -> &mut Self {
        let canonical = kinds::canonical(name);
        match self.position(&canonical) {
            Some(index) => {
                let entry = &mut self.kinds[index];
                entry.patterns.push(pattern);
                if let Some(priority) = priority {
                    entry.priority = priority;
                }
            }
            None => self.kinds.push(KindEntry {
                name: canonical.clone(),
                patterns: vec![pattern],
                priority: priority.unwrap_or(0),
            }),
        }

        if priority.is_some() {
            // `sort_by` is stable: equal priorities keep registration order.
            self.kinds.sort_by(|a, b| b.priority.cmp(&a.priority));
        }

        tracing::debug!(kind = %canonical, ?priority, kinds = self.kinds.len(), "registered token pattern");
        self
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Kinds in current (match) order.
    pub fn kinds(&self) -> &[KindEntry] {
        &self.kinds
    }

    /// Index of the kind called `name` (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        let canonical = kinds::canonical(name);
        self.kinds.iter().position(|k| k.name == canonical)
    }

    /// The kind called `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&KindEntry> {
        self.position(name).map(|i| &self.kinds[i])
    }

    /// Return `true` if any pattern of the kind at `index` matches `text` under `mode`.
    ///
    /// An out-of-range index matches nothing.
    pub fn matches_at(&self, text: &str, index: usize, mode: MatchMode) -> bool {
        self.match_at(text, index, mode).is_some()
    }

    /// Match `text` against the kind at `index`.
    pub fn match_at(&self, text: &str, index: usize, mode: MatchMode) -> Option<PatternMatch> {
        self.kinds.get(index)?.match_text(text, mode)
    }

    /// First kind, in current order, whose pattern matches the whole of `text`.
    pub fn first_matching_kind(&self, text: &str) -> Option<KindMatch<'_>> {
        self.first_match(text, MatchMode::Whole)
    }

    /// First kind, in current order, whose pattern matches a non-empty prefix of `text`.
    ///
    /// The returned `matched.len` is always a char boundary of `text`.
    pub fn first_prefix_match(&self, text: &str) -> Option<KindMatch<'_>> {
        self.first_match(text, MatchMode::Prefix)
    }

    fn first_match(&self, text: &str, mode: MatchMode) -> Option<KindMatch<'_>> {
        self.kinds.iter().enumerate().find_map(|(index, kind)| {
            kind.match_text(text, mode).map(|matched| KindMatch { index, kind, matched })
        })
    }
}
