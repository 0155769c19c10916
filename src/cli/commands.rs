//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};

use crate::config::GrammarConfig;
use crate::lexer::{self, Token, TokenRegistry};
use crate::parser::{self, ParseResult};

use super::{CONFIG_ERROR, CliError, CliResult, ExitCode, OutputFormat, ParseArgs};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during tokenization.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, with size validation.
///
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))
}

/// Load the grammar file, or the built-in grammar when none is given.
pub fn load_grammar(grammar: Option<&Path>) -> CliResult<GrammarConfig> {
    match grammar {
        Some(path) => GrammarConfig::load(path).map_err(|e| CliError::with_code(format!("Error: {e}"), CONFIG_ERROR)),
        None => Ok(GrammarConfig::default()),
    }
}

fn build_registry(config: &GrammarConfig) -> CliResult<TokenRegistry> {
    config
        .build_registry()
        .map_err(|e| CliError::with_code(format!("Error: {e}"), CONFIG_ERROR))
}

/// One token per line: `LINE:COL KIND "text"`.
pub fn format_token(token: &Token) -> String {
    format!("{}:{} {} {:?}", token.line, token.column, token.kind, token.text)
}

/// Tokenize a file and print its tokens.
pub fn lex_file(file_path: &Path, words: bool, json: bool, grammar: Option<&Path>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let registry = build_registry(&load_grammar(grammar)?)?;

    let tokens = if words {
        lexer::tokenize_words(&registry, &source)
    } else {
        lexer::tokenize(&registry, &source)
    };

    if json {
        let text = serde_json::to_string_pretty(&tokens)
            .map_err(|e| CliError::failure(format!("Error serializing tokens: {e}")))?;
        println!("{text}");
    } else {
        for token in &tokens {
            println!("{}", format_token(token));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file, print the AST to stdout and diagnostics to stderr.
///
/// Exits with failure when the source has syntax errors; the AST is printed either way.
pub fn parse_file(file_path: &Path, args: &ParseArgs) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let config = load_grammar(args.grammar.as_deref())?;
    let registry = build_registry(&config)?;
    let options = if args.no_delimiter {
        config.parser_options().without_condition_delimiter()
    } else {
        config.parser_options()
    };

    let result = parser::parse_with_options(&registry, &source, &options);
    println!("{}", render_result(&result, args.format)?);

    // JSON output already carries the diagnostics.
    if args.format != OutputFormat::Json {
        for error in &result.errors {
            if args.pretty {
                let report = Report::new(error.clone())
                    .with_source_code(NamedSource::new(file_path.display().to_string(), source.clone()));
                eprintln!("{report:?}");
            } else {
                eprintln!("{error}");
            }
        }
    }

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Render a parse result in the requested format.
pub fn render_result(result: &ParseResult, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Sexpr => Ok(result.ast.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| CliError::failure(format!("Error serializing parse result: {e}"))),
        OutputFormat::Debug => Ok(format!("{:#?}", result.ast)),
    }
}

/// Print the built-in grammar as a grammar file.
pub fn print_grammar() -> CliResult<ExitCode> {
    let text = GrammarConfig::default()
        .to_toml_string()
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;
    print!("{text}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sigil_cli_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("no/such/script.sg")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Cannot access file 'no/such/script.sg'"));
    }

    #[test]
    fn test_format_token() {
        let registry = lexer::default_registry();
        let tokens = lexer::tokenize(&registry, "\n  $x");
        assert_eq!(format_token(&tokens[0]), "2:3 VARIABLE \"$x\"");
    }

    #[test]
    fn test_render_result_formats() {
        let registry = lexer::default_registry();
        let result = parser::parse(&registry, "$x = 1");
        assert_eq!(render_result(&result, OutputFormat::Sexpr).unwrap(), "(program (= $x 1))");
        let json = render_result(&result, OutputFormat::Json).unwrap();
        assert!(json.contains("\"success\": true"));
        let debug = render_result(&result, OutputFormat::Debug).unwrap();
        assert!(debug.starts_with("Program {"));
    }

    #[test]
    fn test_parse_file_exit_codes() {
        let ok = temp_file("ok.sg", "$x = 1\n");
        let bad = temp_file("bad.sg", "$x = \n");
        let args = ParseArgs::default();
        assert_eq!(parse_file(&ok, &args).unwrap(), ExitCode::SUCCESS);
        assert_eq!(parse_file(&bad, &args).unwrap(), ExitCode::FAILURE);
        let _ = fs::remove_file(ok);
        let _ = fs::remove_file(bad);
    }

    #[test]
    fn test_parse_file_no_delimiter_flag() {
        let path = temp_file("if.sg", "if: $x == 1 { $y = 2 }\n");
        let strict = ParseArgs::default();
        let loose = ParseArgs {
            no_delimiter: true,
            ..ParseArgs::default()
        };
        assert_eq!(parse_file(&path, &strict).unwrap(), ExitCode::FAILURE);
        assert_eq!(parse_file(&path, &loose).unwrap(), ExitCode::SUCCESS);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_parse_file_deep_nesting_fails_cleanly() {
        let path = temp_file("deep.sg", &format!("$a = {}1{}\n", "[".repeat(5000), "]".repeat(5000)));
        assert_eq!(parse_file(&path, &ParseArgs::default()).unwrap(), ExitCode::FAILURE);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_bad_grammar_file_uses_config_exit_code() {
        let source = temp_file("src.sg", "$x = 1");
        let grammar = temp_file("grammar.toml", "[[token]]\nname = \"bad\"\npattern = \"(\"\n");
        let err = lex_file(&source, false, false, Some(&grammar)).unwrap_err();
        assert_eq!(err.exit_code, ExitCode(CONFIG_ERROR));
        assert!(err.message.contains("token 'bad'"));
        let _ = fs::remove_file(source);
        let _ = fs::remove_file(grammar);
    }
}
