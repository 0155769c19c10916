//! Inline snapshot tests for tokenizer listings, AST renderings and diagnostics
//!
//! These pin the exact text the CLI prints, so output changes are reviewed and intentional.
//!
//! Run with: `cargo test --test snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use sigil::cli::commands::format_token;
use sigil::{ParseResult, default_registry, parse, tokenize};

fn lex_listing(source: &str) -> String {
    tokenize(&default_registry(), source)
        .iter()
        .map(format_token)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn diagnostics(result: &ParseResult) -> String {
    result.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(" | ")
}

fn parse_fixture(path: &str) -> ParseResult {
    let source = fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path));
    parse(&default_registry(), &source)
}

#[test]
fn test_if_statement_token_listing() {
    insta::assert_snapshot!(
        lex_listing("if: $x == 10: {\n  $r = $x * 5\n}"),
        @r#"1:1 KEYWORDBEGIN "if:" | 1:5 VARIABLE "$x" | 1:8 EQUAL "==" | 1:11 NUMBER "10" | 1:13 COLON ":" | 1:15 INITCURLBRACKET "{" | 2:3 VARIABLE "$r" | 2:6 ASSIGN "=" | 2:8 VARIABLE "$x" | 2:11 MULTIPLY "*" | 2:13 NUMBER "5" | 3:1 ENDCURLBRACKET "}""#
    );
}

#[test]
fn test_unknown_characters_listing() {
    insta::assert_snapshot!(lex_listing("$a = 1 ; ?"), @r#"1:1 VARIABLE "$a" | 1:4 ASSIGN "=" | 1:6 NUMBER "1" | 1:8 UNKNOWN ";" | 1:10 UNKNOWN "?""#);
}

#[test]
fn test_if_else_fixture_ast() {
    let result = parse_fixture("tests/fixtures/valid/if_else.sg");
    insta::assert_snapshot!(
        result.ast.to_string(),
        @"(program (if (== $x 10) (block (= $r (* $x 5))) (block (= $r 0))) (if (=== $name $other) (block (= $same 1))))"
    );
}

#[test]
fn test_assignments_fixture_ast() {
    let result = parse_fixture("tests/fixtures/valid/assignments.sg");
    insta::assert_snapshot!(
        result.ast.to_string(),
        @"(program (= $total 0) (= $rate 2.5) (= $total (- (* (+ $total 10) $rate) (/ 4 2))))"
    );
}

#[test]
fn test_stray_tokens_fixture_diagnostics() {
    let result = parse_fixture("tests/fixtures/invalid/stray_tokens.sg");
    insta::assert_snapshot!(
        result.ast.to_string(),
        @"(program (invalid) (skipped) (= $y 1) (invalid) (invalid) (invalid))"
    );
    insta::assert_snapshot!(
        diagnostics(&result),
        @"Error en línea 1, columna 1: Declaración no válida | Error en línea 2, columna 1: Se esperaba ASSIGN pero se encontró VARIABLE | Error en línea 2, columna 8: Declaración no válida | Error en línea 2, columna 10: Declaración no válida | Error en línea 3, columna 1: Declaración no válida"
    );
}

#[test]
fn test_recovered_block_json() {
    let result = parse(&default_registry(), "{ $a = $a + }");
    insta::assert_snapshot!(
        serde_json::to_string(&result).unwrap(),
        @r#"{"success":false,"ast":{"type":"Program","statements":[{"type":"Block","statements":[{"type":"SkippedStatement"}]}]},"errors":[{"kind":{"kind":"invalid_factor"},"line":1,"column":13,"span":{"start":12,"end":13}}]}"#
    );
}

#[test]
fn test_unexpected_token_json() {
    let result = parse(&default_registry(), "$x 5");
    insta::assert_snapshot!(
        serde_json::to_string(&result.errors).unwrap(),
        @r#"[{"kind":{"kind":"unexpected_token","expected":"ASSIGN","found":"NUMBER"},"line":1,"column":4,"span":{"start":3,"end":4}}]"#
    );
}
