//! Canonical vocabulary for the sigil scripting dialect.
//!
//! This crate is intentionally small and dependency-free. It holds the data both the syntax frontend and its
//! tooling need to agree on:
//! - the canonical (uppercased) token-kind names the parser's grammar is written against,
//! - the built-in grammar table (pattern source + priority per kind),
//! - the user-facing diagnostic message texts.
//!
//! ## Notes
//!
//! - No IO, no global mutable state, and no regex engine: patterns are stored as source strings and compiled by
//!   `sigil_syntax`.

pub mod lang;
