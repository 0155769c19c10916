#![forbid(unsafe_code)]
//! sigil: tokenizer and recovering parser for a `$`-variable scripting dialect
//!
//! The syntax frontend lives in the `sigil_syntax` crate and is re-exported here; this crate adds grammar files
//! (`config`) and the command-line interface (`cli`).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod config;

pub use sigil_syntax::ast;
pub use sigil_syntax::diagnostics;
pub use sigil_syntax::lexer;
pub use sigil_syntax::parser;
pub use sigil_syntax::pattern;

pub use config::{ConfigError, GrammarConfig, ParserConfig, TokenSpec};
pub use lexer::{Token, TokenRegistry, default_registry, tokenize, tokenize_words};
pub use parser::{ParseResult, ParserOptions, parse, parse_with_options};
