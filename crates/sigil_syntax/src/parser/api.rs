/// Tokenize and parse `source` with the default [`ParserOptions`].
///
/// This is the main public entrypoint for parsing. It never fails: diagnostics are returned in
/// [`ParseResult::errors`] next to a best-effort AST.
///
/// ## Parameters
/// - `registry`: fully configured token registry; it is borrowed for the whole call.
/// - `source`: source text.
pub fn parse(registry: &TokenRegistry, source: &str) -> ParseResult {
    parse_with_options(registry, source, &ParserOptions::default())
}

/// Tokenize and parse `source` with explicit options.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_with_options(registry: &TokenRegistry, source: &str, options: &ParserOptions) -> ParseResult {
    let stream = Tokenizer::new(registry, source).scan();
    parse_tokens(&stream, options)
}

/// Parse an already scanned token stream.
#[tracing::instrument(skip_all, fields(token_count = stream.tokens.len()))]
pub fn parse_tokens(stream: &TokenStream, options: &ParserOptions) -> ParseResult {
    Parser::new(stream, options).parse()
}
