//! Syntax diagnostics
//!
//! A [`SyntaxDiagnostic`] is one recoverable parse failure: what went wrong ([`DiagnosticKind`]), where (1-based
//! line/column and the byte span of the offending token), and nothing else. Its `Display` form is the plain
//! one-line message callers print; its `miette::Diagnostic` impl lets tooling render it with source highlighting.

use std::fmt;

use miette::LabeledSpan;
use serde::Serialize;
use sigil_core::lang::messages;

use crate::ast::Span;
use crate::lexer::Token;

/// What a diagnostic reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The grammar required a token of kind `expected`; the input had `found`.
    UnexpectedToken { expected: String, found: String },
    /// The current token cannot start a statement.
    InvalidStatement,
    /// The current token cannot start a factor.
    InvalidFactor,
    /// A `{` or `[` opened more than `limit` levels deep.
    NestingTooDeep { limit: usize },
}

impl DiagnosticKind {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedToken { .. } => "sigil::unexpected_token",
            DiagnosticKind::InvalidStatement => "sigil::invalid_statement",
            DiagnosticKind::InvalidFactor => "sigil::invalid_factor",
            DiagnosticKind::NestingTooDeep { .. } => "sigil::nesting_too_deep",
        }
    }

    fn label(&self) -> String {
        match self {
            DiagnosticKind::UnexpectedToken { expected, .. } => format!("se esperaba {expected}"),
            DiagnosticKind::InvalidStatement => "no inicia ninguna declaración".to_string(),
            DiagnosticKind::InvalidFactor => "se esperaba un número, una variable o `[`".to_string(),
            DiagnosticKind::NestingTooDeep { limit } => format!("supera {limit} niveles de anidamiento"),
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnexpectedToken { expected, found } => {
                f.write_str(&messages::unexpected_token(expected, found))
            }
            DiagnosticKind::InvalidStatement => f.write_str(messages::INVALID_STATEMENT),
            DiagnosticKind::InvalidFactor => f.write_str(messages::INVALID_FACTOR),
            DiagnosticKind::NestingTooDeep { limit } => f.write_str(&messages::nesting_too_deep(*limit)),
        }
    }
}

/// A recoverable syntax error with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxDiagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl SyntaxDiagnostic {
    /// Diagnostic located at `token`.
    pub fn at(kind: DiagnosticKind, token: &Token) -> Self {
        Self {
            kind,
            line: token.line,
            column: token.column,
            span: token.span,
        }
    }

    /// `expected` was required but `token` was found.
    pub fn unexpected(expected: &str, token: &Token) -> Self {
        Self::at(
            DiagnosticKind::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind.clone(),
            },
            token,
        )
    }

    /// Message without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&messages::located(self.line, self.column, &self.message()))
    }
}

impl std::error::Error for SyntaxDiagnostic {}

impl miette::Diagnostic for SyntaxDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        // EOF tokens have an empty span; still point at the offset.
        let label = LabeledSpan::new(Some(self.kind.label()), self.span.start, self.span.len());
        Some(Box::new(std::iter::once(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    fn token(kind: &str, text: &str, line: usize, column: usize, start: usize) -> Token {
        Token {
            kind: kind.to_string(),
            text: text.to_string(),
            captures: Vec::new(),
            index: None,
            line,
            column,
            span: Span::new(start, start + text.len()),
        }
    }

    #[test]
    fn test_unexpected_token_display() {
        let diag = SyntaxDiagnostic::unexpected("COLON", &token("INITCURLBRACKET", "{", 2, 13, 14));
        assert_eq!(
            diag.to_string(),
            "Error en línea 2, columna 13: Se esperaba COLON pero se encontró INITCURLBRACKET"
        );
        assert_eq!(diag.span, Span::new(14, 15));
    }

    #[test]
    fn test_invalid_statement_display() {
        let diag = SyntaxDiagnostic::at(DiagnosticKind::InvalidStatement, &token("OTHERKEYWORDS", "return", 4, 3, 30));
        assert_eq!(diag.to_string(), "Error en línea 4, columna 3: Declaración no válida");
        assert_eq!(diag.message(), "Declaración no válida");
    }

    #[test]
    fn test_miette_code_and_label() {
        let diag = SyntaxDiagnostic::at(DiagnosticKind::InvalidFactor, &token("ENDCURLBRACKET", "}", 1, 8, 7));
        assert_eq!(diag.code().map(|c| c.to_string()), Some("sigil::invalid_factor".to_string()));
        let labels: Vec<LabeledSpan> = diag.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 7);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_serialized_payload_keeps_expected_and_found() {
        let diag = SyntaxDiagnostic::unexpected("ASSIGN", &token("PLUS", "+", 1, 5, 4));
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"]["kind"], "unexpected_token");
        assert_eq!(json["kind"]["expected"], "ASSIGN");
        assert_eq!(json["kind"]["found"], "PLUS");
        assert_eq!(json["line"], 1);
        assert_eq!(json["column"], 5);
    }

    #[test]
    fn test_nesting_too_deep_display_and_code() {
        let diag = SyntaxDiagnostic::at(DiagnosticKind::NestingTooDeep { limit: 2 }, &token("INITSQRBRACKET", "[", 1, 8, 7));
        assert_eq!(diag.to_string(), "Error en línea 1, columna 8: Anidamiento demasiado profundo (máximo 2)");
        assert_eq!(diag.code().map(|c| c.to_string()), Some("sigil::nesting_too_deep".to_string()));
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"]["kind"], "nesting_too_deep");
        assert_eq!(json["kind"]["limit"], 2);
    }
}
