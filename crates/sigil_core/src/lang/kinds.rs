//! Token-kind vocabulary.
//!
//! Token kinds are identified by name. Names are case-insensitive at registration time and are stored in their
//! canonical uppercased form; the constants in this module are those canonical spellings, and they are what the
//! parser's grammar matches on.
//!
//! [`DEFAULT_KINDS`] is the built-in grammar: the kinds a caller gets from `sigil_syntax::lexer::default_registry()`,
//! listed in descending priority so that multi-character operators are tried before their prefixes
//! (`===` before `==` before `=`).
//!
//! ## Examples
//! ```rust
//! use sigil_core::lang::kinds;
//!
//! assert_eq!(kinds::canonical("EqualStr"), kinds::EQUALSTR);
//! assert_eq!(kinds::find("variable").map(|k| k.priority), Some(7));
//! ```

/// Reserved kind of a character no registered pattern matches.
pub const UNKNOWN: &str = "UNKNOWN";
/// Reserved kind of the synthetic end-of-input token.
pub const EOF: &str = "EOF";

pub const STRING: &str = "STRING";
pub const EQUALSTR: &str = "EQUALSTR";
pub const EQUAL: &str = "EQUAL";
pub const VARIABLE: &str = "VARIABLE";
pub const KEYWORDBEGIN: &str = "KEYWORDBEGIN";
pub const KEYWORDEND: &str = "KEYWORDEND";
pub const OTHERKEYWORDS: &str = "OTHERKEYWORDS";
pub const NUMBER: &str = "NUMBER";
pub const ASSIGN: &str = "ASSIGN";
pub const PLUS: &str = "PLUS";
pub const MINUS: &str = "MINUS";
pub const MULTIPLY: &str = "MULTIPLY";
pub const DIVIDE: &str = "DIVIDE";
pub const MODULO: &str = "MODULO";
pub const COLON: &str = "COLON";
pub const INITCURLBRACKET: &str = "INITCURLBRACKET";
pub const ENDCURLBRACKET: &str = "ENDCURLBRACKET";
pub const INITSQRBRACKET: &str = "INITSQRBRACKET";
pub const ENDSQRBRACKET: &str = "ENDSQRBRACKET";

/// Kinds a statement can start with; error recovery resumes at these.
pub const STATEMENT_STARTS: &[&str] = &[KEYWORDBEGIN, VARIABLE, INITCURLBRACKET];

/// Keyword captured by a [`KEYWORDBEGIN`] token that opens the alternate branch of an `if`.
pub const ELSE_KEYWORD: &str = "else";

/// Broad grouping of token kinds, for tooling and docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindCategory {
    /// Strings, numbers, variables.
    Literal,
    /// Keyword forms like `if:` and `endif`.
    Keyword,
    /// Arithmetic, comparison and assignment operators.
    Operator,
    /// Brackets and separators.
    Delimiter,
}

/// One entry of the built-in grammar.
#[derive(Debug, Clone, Copy)]
pub struct KindInfo {
    /// Spelling used when registering; its uppercased form is the canonical name.
    pub name: &'static str,
    /// Regular-expression source for the kind.
    pub pattern: &'static str,
    /// Match priority (higher is tried first).
    pub priority: i32,
    pub category: KindCategory,
    /// Sample spellings the pattern must accept.
    pub examples: &'static [&'static str],
}

/// The built-in grammar, in descending priority.
pub const DEFAULT_KINDS: &[KindInfo] = &[
    info("String", r#""(?:\\.|[^"\\])*""#, 10, KindCategory::Literal, &[r#""hola""#, r#""a \"b\"""#]),
    info("EqualStr", "===", 9, KindCategory::Operator, &["==="]),
    info("Equal", "==", 8, KindCategory::Operator, &["=="]),
    info("variable", r"\$[a-zA-Z0-9_-]+", 7, KindCategory::Literal, &["$x", "$result_2"]),
    info(
        "KeywordBegin",
        r"\b(if|else|while|for|then)\b:",
        6,
        KindCategory::Keyword,
        &["if:", "else:", "while:"],
    ),
    info("KeywordEnd", r"\b(endif|endwhile|endfor)\b", 5, KindCategory::Keyword, &["endif", "endfor"]),
    info("OtherKeywords", r"\b(return|const)\b", 4, KindCategory::Keyword, &["return", "const"]),
    info("number", r"\d+(\.\d+)?", 3, KindCategory::Literal, &["10", "3.25"]),
    info("Assign", "=", 2, KindCategory::Operator, &["="]),
    info("Plus", r"\+", 1, KindCategory::Operator, &["+"]),
    info("Minus", "-", 1, KindCategory::Operator, &["-"]),
    info("Multiply", r"\*", 1, KindCategory::Operator, &["*"]),
    info("Divide", "/", 1, KindCategory::Operator, &["/"]),
    info("Modulo", "%", 1, KindCategory::Operator, &["%"]),
    info("Colon", ":", 1, KindCategory::Delimiter, &[":"]),
    info("InitCurlBracket", r"\{", 1, KindCategory::Delimiter, &["{"]),
    info("EndCurlBracket", r"\}", 1, KindCategory::Delimiter, &["}"]),
    info("InitSqrBracket", r"\[", 1, KindCategory::Delimiter, &["["]),
    info("EndSqrBracket", r"\]", 1, KindCategory::Delimiter, &["]"]),
];

/// Return the canonical (uppercased) spelling of a kind name.
pub fn canonical(name: &str) -> String {
    name.to_uppercase()
}

/// Look up a built-in kind by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static KindInfo> {
    let wanted = canonical(name);
    DEFAULT_KINDS.iter().find(|k| canonical(k.name) == wanted)
}

/// Return `true` if `kind` (canonical) can start a statement.
pub fn is_statement_start(kind: &str) -> bool {
    STATEMENT_STARTS.contains(&kind)
}

const fn info(
    name: &'static str,
    pattern: &'static str,
    priority: i32,
    category: KindCategory,
    examples: &'static [&'static str],
) -> KindInfo {
    KindInfo {
        name,
        pattern,
        priority,
        category,
        examples,
    }
}
