//! Grammar configuration for sigil
//!
//! A grammar file lists the token kinds to register (in order, with optional priorities) and the parser switches
//! that are not part of the token registry. It is plain TOML:
//!
//! ```toml
//! [parser]
//! condition_delimiter = "COLON"
//! require_delimiter = true
//! max_nesting = 256
//!
//! [[token]]
//! name = "variable"
//! pattern = '\$[a-zA-Z0-9_-]+'
//! priority = 7
//!
//! [[token]]
//! name = "Arrow"
//! pattern = "->"
//! literal = true
//! ```
//!
//! A file without any `[[token]]` entries keeps the built-in grammar.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sigil_core::lang::kinds;
use sigil_syntax::lexer::TokenRegistry;
use sigil_syntax::parser::{DEFAULT_MAX_NESTING, ParserOptions};
use sigil_syntax::pattern::{LiteralPattern, Pattern, PatternError, RegexPattern};
use thiserror::Error;

/// Error loading or applying a grammar file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read grammar file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid grammar file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot write grammar: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("token #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("token '{name}' has an empty pattern")]
    EmptyPattern { name: String },
    #[error("token '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: PatternError,
    },
}

/// Complete grammar: token kinds plus parser switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    /// Token kinds, registered in this order.
    #[serde(rename = "token", default = "default_tokens")]
    pub tokens: Vec<TokenSpec>,
}

/// `[parser]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Kind that must follow an `if` condition.
    #[serde(default = "default_delimiter", skip_serializing_if = "Option::is_none")]
    pub condition_delimiter: Option<String>,
    /// When `false`, `condition_delimiter` is ignored.
    #[serde(default = "default_true")]
    pub require_delimiter: bool,
    /// Deepest combined nesting of `{` and `[`.
    #[serde(default = "default_max_nesting")]
    pub max_nesting: usize,
}

/// One `[[token]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpec {
    /// Kind name (case-insensitive).
    pub name: String,
    /// Regular expression, or the exact spelling when `literal` is set.
    pub pattern: String,
    /// Priority; omitted entries keep registration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub literal: bool,
}

fn default_delimiter() -> Option<String> {
    Some(kinds::COLON.to_string())
}

fn default_max_nesting() -> usize {
    DEFAULT_MAX_NESTING
}

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_tokens() -> Vec<TokenSpec> {
    kinds::DEFAULT_KINDS
        .iter()
        .map(|info| TokenSpec::regex(info.name, info.pattern, Some(info.priority)))
        .collect()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            condition_delimiter: default_delimiter(),
            require_delimiter: true,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            tokens: default_tokens(),
        }
    }
}

impl TokenSpec {
    /// A kind matched by a regular expression.
    pub fn regex(name: impl Into<String>, pattern: impl Into<String>, priority: Option<i32>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            priority,
            literal: false,
        }
    }

    /// A kind matched by an exact spelling.
    pub fn literal(name: impl Into<String>, text: impl Into<String>, priority: Option<i32>) -> Self {
        Self {
            name: name.into(),
            pattern: text.into(),
            priority,
            literal: true,
        }
    }

    fn build_pattern(&self) -> Result<Box<dyn Pattern>, ConfigError> {
        if self.literal {
            return Ok(Box::new(LiteralPattern::new(self.pattern.as_str())));
        }
        let pattern = RegexPattern::new(&self.pattern).map_err(|source| ConfigError::Pattern {
            name: self.name.clone(),
            source,
        })?;
        Ok(Box::new(pattern))
    }
}

impl GrammarConfig {
    /// Create a config holding the built-in grammar
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a grammar file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), tokens = config.tokens.len(), "loaded grammar file");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Require `kind` after every `if` condition
    pub fn with_condition_delimiter(mut self, kind: &str) -> Self {
        self.parser.condition_delimiter = Some(kind.to_string());
        self.parser.require_delimiter = true;
        self
    }

    /// Accept `if` conditions directly followed by their block
    pub fn without_condition_delimiter(mut self) -> Self {
        self.parser.require_delimiter = false;
        self
    }

    /// Append a token kind
    pub fn with_token(mut self, token: TokenSpec) -> Self {
        self.tokens.push(token);
        self
    }

    /// Register every token kind, in file order, into a fresh registry.
    ///
    /// ## Errors
    /// Fails on the first entry with an empty name, an empty pattern or an invalid regular expression.
    pub fn build_registry(&self) -> Result<TokenRegistry, ConfigError> {
        let mut registry = TokenRegistry::new();
        for (index, token) in self.tokens.iter().enumerate() {
            if token.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if token.pattern.is_empty() {
                return Err(ConfigError::EmptyPattern {
                    name: token.name.clone(),
                });
            }
            registry.register(&token.name, token.build_pattern()?, token.priority);
        }
        Ok(registry)
    }

    pub fn parser_options(&self) -> ParserOptions {
        let options = ParserOptions::new().with_max_nesting(self.parser.max_nesting);
        match (&self.parser.condition_delimiter, self.parser.require_delimiter) {
            (Some(kind), true) => options.with_condition_delimiter(kind),
            _ => options.without_condition_delimiter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_syntax::lexer::{self, default_registry};
    use sigil_syntax::parser;

    fn kind_names(registry: &TokenRegistry) -> Vec<String> {
        registry.kinds().iter().map(|k| k.name().to_string()).collect()
    }

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_config_matches_builtin_registry() {
        let registry = GrammarConfig::default().build_registry().unwrap();
        assert_eq!(kind_names(&registry), kind_names(&default_registry()));
    }

    #[test]
    fn test_default_config_requires_colon() {
        let options = GrammarConfig::default().parser_options();
        assert_eq!(options.condition_delimiter.as_deref(), Some("COLON"));
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = GrammarConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[[token]]"));
        assert_eq!(GrammarConfig::from_toml_str(&text).unwrap(), config);
    }

    // ========================================
    // Parsing tests
    // ========================================

    #[test]
    fn test_empty_file_keeps_builtin_grammar() {
        let config = GrammarConfig::from_toml_str("").unwrap();
        assert_eq!(config, GrammarConfig::default());
    }

    #[test]
    fn test_parser_section_only() {
        let config = GrammarConfig::from_toml_str("[parser]\nrequire_delimiter = false\n").unwrap();
        assert_eq!(config.tokens, GrammarConfig::default().tokens);
        assert_eq!(config.parser_options().condition_delimiter, None);
        assert_eq!(config.parser_options().max_nesting, DEFAULT_MAX_NESTING);
    }

    #[test]
    fn test_max_nesting_reaches_parser() {
        let config = GrammarConfig::from_toml_str("[parser]
max_nesting = 1
").unwrap();
        let registry = config.build_registry().unwrap();
        let options = config.parser_options();
        assert_eq!(options.max_nesting, 1);
        assert!(parser::parse_with_options(&registry, "$a = [1]", &options).success);
        assert!(!parser::parse_with_options(&registry, "$a = [[1]]", &options).success);
    }

    #[test]
    fn test_custom_tokens_replace_builtin_grammar() {
        let text = r#"
[parser]
condition_delimiter = "arrow"

[[token]]
name = "variable"
pattern = '\$[a-z]+'

[[token]]
name = "Arrow"
pattern = "->"
literal = true
priority = 5
"#;
        let config = GrammarConfig::from_toml_str(text).unwrap();
        assert_eq!(config.tokens.len(), 2);
        assert!(config.tokens[1].literal);

        let registry = config.build_registry().unwrap();
        assert_eq!(kind_names(&registry), vec!["ARROW", "VARIABLE"]);
        assert_eq!(config.parser_options().condition_delimiter.as_deref(), Some("ARROW"));

        let tokens = lexer::tokenize(&registry, "$a->$b");
        let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.as_str()).collect();
        assert_eq!(kinds, vec!["VARIABLE", "ARROW", "VARIABLE"]);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GrammarConfig::from_toml_str("[[token]]\nname = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    // ========================================
    // Registry building tests
    // ========================================

    #[test]
    fn test_invalid_regex_names_the_token() {
        let config = GrammarConfig {
            parser: ParserConfig::default(),
            tokens: vec![TokenSpec::regex("broken", "(", None)],
        };
        let err = config.build_registry().unwrap_err();
        assert!(matches!(&err, ConfigError::Pattern { name, .. } if name == "broken"));
        assert!(err.to_string().starts_with("token 'broken': invalid pattern"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let config = GrammarConfig::default().with_token(TokenSpec::literal("  ", "!", None));
        let err = config.build_registry().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName { index } if index == kinds::DEFAULT_KINDS.len()));
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let config = GrammarConfig::default().with_token(TokenSpec::literal("Bang", "", None));
        assert!(matches!(config.build_registry(), Err(ConfigError::EmptyPattern { .. })));
    }

    #[test]
    fn test_builder_toggles_delimiter() {
        let config = GrammarConfig::new().without_condition_delimiter();
        assert_eq!(config.parser_options().condition_delimiter, None);

        let config = config.with_condition_delimiter("then");
        assert_eq!(config.parser_options().condition_delimiter.as_deref(), Some("THEN"));
    }

    #[test]
    fn test_config_drives_parse() {
        let config = GrammarConfig::new().without_condition_delimiter();
        let registry = config.build_registry().unwrap();
        let result = parser::parse_with_options(&registry, "if: $x == 1 { $y = 2 }", &config.parser_options());
        assert!(result.success);
    }

    // ========================================
    // File loading tests
    // ========================================

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("definitely/not/a/grammar.toml");
        let err = GrammarConfig::load(path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/a/grammar.toml"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("sigil_grammar_{}.toml", std::process::id()));
        fs::write(&path, "[parser]\ncondition_delimiter = \"then\"\n").unwrap();
        let config = GrammarConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.parser.condition_delimiter.as_deref(), Some("then"));
        assert!(config.parser.require_delimiter);
    }
}
