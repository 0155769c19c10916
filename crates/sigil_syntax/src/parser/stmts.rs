/// Statement parsing methods.
///
/// This chunk parses statement forms (`if`, assignments, blocks) and hosts the statement-level recovery point.
///
/// ## Notes
/// - Every statement production consumes its leading token before it can fail, so recovery always makes
///   progress.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Statement {
        let parsed = if self.check(kinds::KEYWORDBEGIN) {
            self.if_stmt().map(Statement::If)
        } else if self.check(kinds::VARIABLE) {
            self.assignment().map(Statement::Assignment)
        } else if self.check(kinds::INITCURLBRACKET) {
            self.block().map(Statement::Block)
        } else {
            let token = self.advance();
            self.errors.push(SyntaxDiagnostic::at(DiagnosticKind::InvalidStatement, token));
            return Statement::Invalid;
        };

        match parsed {
            Ok(stmt) => stmt,
            Err(e) => {
                tracing::debug!(line = e.line, column = e.column, "recovering from syntax error");
                self.errors.push(e);
                self.synchronize();
                Statement::Skipped
            }
        }
    }

    fn if_stmt(&mut self) -> PResult<IfStatement> {
        self.expect(kinds::KEYWORDBEGIN)?;
        let test = self.condition()?;
        if let Some(delimiter) = self.condition_delimiter.clone() {
            self.expect(&delimiter)?;
        }
        let consequent = self.block()?;

        let alternate = if self.check(kinds::KEYWORDBEGIN) && self.peek().keyword() == Some(kinds::ELSE_KEYWORD) {
            self.advance();
            Some(self.block()?)
        } else {
            None
        };

        // Optional `endif` / `endwhile` / `endfor`.
        self.consume(kinds::KEYWORDEND);

        Ok(IfStatement {
            test,
            consequent,
            alternate,
        })
    }

    fn block(&mut self) -> PResult<Block> {
        let open = self.expect(kinds::INITCURLBRACKET)?;
        self.enter_nesting(open)?;

        self.block_depth += 1;
        let mut statements = Vec::new();
        while !self.check(kinds::ENDCURLBRACKET) && !self.is_at_end() {
            statements.push(self.statement());
        }
        self.block_depth -= 1;
        self.leave_nesting();

        self.expect(kinds::ENDCURLBRACKET)?;
        Ok(Block { statements })
    }

    fn assignment(&mut self) -> PResult<Assignment> {
        let variable = self.expect(kinds::VARIABLE)?.text.clone();
        self.expect(kinds::ASSIGN)?;
        let value = self.expression()?;
        Ok(Assignment { variable, value })
    }
}
