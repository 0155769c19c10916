/// Parser core types and entrypoint.
///
/// This chunk defines [`ParserOptions`], [`ParseResult`], the [`Parser`] type and its top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module.
type PResult<T> = Result<T, SyntaxDiagnostic>;

/// Default limit on open `{` and `[` levels.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Grammar switches that do not belong in the token registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Kind that must follow an `if` condition, before its block. `None` removes the requirement.
    pub condition_delimiter: Option<String>,
    /// Deepest combined nesting of blocks and bracketed expressions. A `{` or `[` past it is a diagnostic.
    pub max_nesting: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            condition_delimiter: Some(kinds::COLON.to_string()),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl ParserOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `kind` after every `if` condition (case-insensitive kind name).
    pub fn with_condition_delimiter(mut self, kind: &str) -> Self {
        self.condition_delimiter = Some(kinds::canonical(kind));
        self
    }

    /// Accept `if` conditions directly followed by their block.
    pub fn without_condition_delimiter(mut self) -> Self {
        self.condition_delimiter = None;
        self
    }

    /// Limit how many `{` and `[` may be open at once.
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}

/// Outcome of one parse call.
///
/// `ast` is always present: malformed statements are replaced by placeholder nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// `true` iff `errors` is empty.
    pub success: bool,
    pub ast: Program,
    /// Diagnostics in detection order.
    pub errors: Vec<SyntaxDiagnostic>,
}

/// Parser state.
///
/// ## Notes
/// - Errors inside a statement unwind as `Err` to [`Parser::statement`], which records the diagnostic, skips to
///   a statement boundary and substitutes [`Statement::Skipped`].
/// - `block_depth` lets recovery leave a `}` in place for the enclosing block to close.
/// - `nesting` counts open blocks and brackets together; it never exceeds `max_nesting`.
pub struct Parser<'a> {
    stream: &'a TokenStream,
    pos: usize,
    errors: Vec<SyntaxDiagnostic>,
    condition_delimiter: Option<String>,
    block_depth: usize,
    nesting: usize,
    max_nesting: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a scanned token stream.
    pub fn new(stream: &'a TokenStream, options: &ParserOptions) -> Self {
        Self {
            stream,
            pos: 0,
            errors: Vec::new(),
            condition_delimiter: options.condition_delimiter.as_deref().map(kinds::canonical),
            block_depth: 0,
            nesting: 0,
            max_nesting: options.max_nesting,
        }
    }

    /// Parse the entire token stream into a [`ParseResult`].
    pub fn parse(mut self) -> ParseResult {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.statement());
        }

        tracing::debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        ParseResult {
            success: self.errors.is_empty(),
            ast: Program { statements },
            errors: self.errors,
        }
    }
}
