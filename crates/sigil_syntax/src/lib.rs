//! Syntax frontend for the sigil scripting dialect: token registry, tokenizer, AST, diagnostics, parser.
//!
//! The dialect has `$`-prefixed variables, `if:` blocks delimited by braces, and arithmetic expressions. Token
//! kinds are not hard-coded: a caller builds a [`lexer::TokenRegistry`] (or takes the built-in one from
//! [`lexer::default_registry`]) and every tokenize/parse call borrows it.
//!
//! ## Notes
//! - This crate is syntax-only: nothing here evaluates the AST.
//! - Parsing never fails as a whole. Malformed statements become placeholder nodes and the diagnostics are
//!   returned alongside the best-effort AST.
//!
//! ## Examples
//! ```rust
//! use sigil_syntax::{lexer, parser};
//!
//! let registry = lexer::default_registry();
//! let result = parser::parse(&registry, "$x = 5");
//! assert!(result.success);
//! assert_eq!(result.ast.to_string(), "(program (= $x 5))");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod pattern;
pub mod token_helpers;
