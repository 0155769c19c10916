/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`, `check`, `consume`, `expect`)
/// - Nesting accounting for `{` and `[` (`enter_nesting`, `leave_nesting`)
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the cursor is past the last token.
    fn is_at_end(&self) -> bool {
        self.pos >= self.stream.tokens.len()
    }

    /// Return the current token (the EOF token past the end) without consuming it.
    fn peek(&self) -> &'a Token {
        self.stream.tokens.get(self.pos).unwrap_or(&self.stream.eof)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Return `true` if the current token is of `kind`.
    fn check(&self, kind: &str) -> bool {
        self.peek().is(kind)
    }

    /// If the current token is of `kind`, consume it and return `true`.
    fn consume(&mut self, kind: &str) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail with an unexpected-token diagnostic at the current token.
    fn expect(&mut self, kind: &str) -> PResult<&'a Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(SyntaxDiagnostic::unexpected(kind, self.peek()))
        }
    }

    /// Count one more open `{` or `[`, failing at `opener` once the configured limit is reached.
    ///
    /// The grammar recurses once per level, so this bounds the call stack for any input.
    fn enter_nesting(&mut self, opener: &'a Token) -> PResult<()> {
        if self.nesting >= self.max_nesting {
            tracing::debug!(limit = self.max_nesting, line = opener.line, column = opener.column, "nesting limit reached");
            return Err(SyntaxDiagnostic::at(
                DiagnosticKind::NestingTooDeep {
                    limit: self.max_nesting,
                },
                opener,
            ));
        }
        self.nesting += 1;
        Ok(())
    }

    /// Undo one successful [`Parser::enter_nesting`].
    fn leave_nesting(&mut self) {
        self.nesting -= 1;
    }

    /// Skip tokens until a statement can start.
    ///
    /// Stops before a statement-start token or EOF. A `}` also ends the skip: inside a block it is left for the
    /// block to consume, at top level it is consumed.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            let token = self.peek();
            if token.starts_statement() {
                return;
            }
            if token.is(kinds::ENDCURLBRACKET) {
                if self.block_depth == 0 {
                    self.advance();
                }
                return;
            }
            tracing::trace!(kind = %token.kind, line = token.line, column = token.column, "recovery skipped token");
            self.advance();
        }
    }
}
