//! Language vocabulary registries.
//!
//! - [`kinds`]: token-kind names and the built-in grammar table.
//! - [`messages`]: diagnostic message texts shared by the parser and the CLI.

pub mod kinds;
pub mod messages;
