//! Diagnostic message texts.
//!
//! The parser reports diagnostics in Spanish, in the form
//! `Error en línea <L>, columna <C>: <message>`. The message bodies live here so the parser, its tests and the
//! CLI stay aligned.

/// Prefix of every rendered diagnostic, before the line number.
pub const LINE_PREFIX: &str = "Error en línea";

/// A token that cannot start any statement.
pub const INVALID_STATEMENT: &str = "Declaración no válida";

/// A token that cannot start a factor (number, variable or `[`).
pub const INVALID_FACTOR: &str = "Factor no válido";

/// Blocks and brackets nested deeper than the parser accepts.
pub fn nesting_too_deep(limit: usize) -> String {
    format!("Anidamiento demasiado profundo (máximo {limit})")
}

/// The grammar required `expected` but the input had `found`.
pub fn unexpected_token(expected: &str, found: &str) -> String {
    format!("Se esperaba {expected} pero se encontró {found}")
}

/// Render a message with its 1-based location.
pub fn located(line: usize, column: usize, message: &str) -> String {
    format!("{LINE_PREFIX} {line}, columna {column}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_text() {
        assert_eq!(
            unexpected_token("COLON", "INITCURLBRACKET"),
            "Se esperaba COLON pero se encontró INITCURLBRACKET"
        );
    }

    #[test]
    fn test_nesting_too_deep_text() {
        assert_eq!(nesting_too_deep(256), "Anidamiento demasiado profundo (máximo 256)");
    }

    #[test]
    fn test_located_text() {
        assert_eq!(
            located(3, 14, INVALID_FACTOR),
            "Error en línea 3, columna 14: Factor no válido"
        );
    }
}
