//! Parser for the sigil scripting dialect
//!
//! Converts a token stream into a [`Program`] by recursive descent with one token of lookahead, recovering from
//! malformed statements instead of aborting.
//!
//! ## Grammar
//!
//! ```text
//! Program      := Statement* EOF
//! Statement    := IfStatement | Assignment | Block | <error: skip one token>
//! IfStatement  := KEYWORDBEGIN Condition [delimiter] Block [KEYWORDBEGIN(else) Block] [KEYWORDEND]
//! Condition    := Expression [(EQUAL | EQUALSTR) Expression]
//! Block        := INITCURLBRACKET Statement* ENDCURLBRACKET
//! Assignment   := VARIABLE ASSIGN Expression
//! Expression   := Term ((PLUS | MINUS) Term)*
//! Term         := Factor ((MULTIPLY | DIVIDE) Factor)*
//! Factor       := NUMBER | VARIABLE | INITSQRBRACKET Expression ENDSQRBRACKET
//! ```
//!
//! Blocks and brackets together may nest at most [`ParserOptions::max_nesting`] levels
//! ([`DEFAULT_MAX_NESTING`] by default). A deeper opener is reported like any other syntax error.
//!
//! ## Examples
//!
//! ```rust
//! use sigil_syntax::{lexer, parser};
//!
//! let registry = lexer::default_registry();
//! let result = parser::parse(&registry, "if: $x == 10: { $r = $x * 5 }");
//! assert!(result.success);
//! assert_eq!(result.ast.to_string(), "(program (if (== $x 10) (block (= $r (* $x 5)))))");
//! ```

use serde::Serialize;
use sigil_core::lang::kinds;

use crate::ast::*;
use crate::diagnostics::{DiagnosticKind, SyntaxDiagnostic};
use crate::lexer::{Token, TokenRegistry, TokenStream, Tokenizer};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping each
// grammar layer in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
