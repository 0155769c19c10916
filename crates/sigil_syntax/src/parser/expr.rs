/// Expression parsing methods.
///
/// This chunk implements the expression grammar using a precedence ladder:
/// condition (`==`, `===`) → additive (`+`, `-`) → multiplicative (`*`, `/`) → factor.
///
/// ## Notes
/// - Additive and multiplicative operators are left-associative.
/// - A condition allows a single comparison; it is only parsed as the test of an `if`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn condition(&mut self) -> PResult<Expr> {
        let left = self.expression()?;
        let op = if self.consume(kinds::EQUALSTR) {
            BinaryOp::StrictEq
        } else if self.consume(kinds::EQUAL) {
            BinaryOp::Eq
        } else {
            return Ok(left);
        };
        let right = self.expression()?;
        Ok(Expr::binary(left, op, right))
    }

    fn expression(&mut self) -> PResult<Expr> {
        let mut left = self.term()?;
        while let Some(op) = self.match_op(&[BinaryOp::Add, BinaryOp::Sub]) {
            let right = self.term()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> PResult<Expr> {
        let mut left = self.factor()?;
        while let Some(op) = self.match_op(&[BinaryOp::Mul, BinaryOp::Div]) {
            let right = self.factor()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> PResult<Expr> {
        if self.check(kinds::NUMBER) {
            let token = self.advance();
            // A custom registry may define NUMBER more loosely than `f64` parsing accepts.
            let value = token
                .text
                .parse::<f64>()
                .map_err(|_| SyntaxDiagnostic::at(DiagnosticKind::InvalidFactor, token))?;
            Ok(Expr::number(value))
        } else if self.check(kinds::VARIABLE) {
            let token = self.advance();
            Ok(Expr::variable(token.text.clone()))
        } else if self.check(kinds::INITSQRBRACKET) {
            let open = self.advance();
            self.enter_nesting(open)?;
            let expr = self.expression();
            self.leave_nesting();
            let expr = expr?;
            self.expect(kinds::ENDSQRBRACKET)?;
            Ok(expr)
        } else {
            Err(SyntaxDiagnostic::at(DiagnosticKind::InvalidFactor, self.peek()))
        }
    }

    /// If the current token writes one of `ops`, consume it and return the operator.
    fn match_op(&mut self, ops: &[BinaryOp]) -> Option<BinaryOp> {
        let op = BinaryOp::from_kind(&self.peek().kind).filter(|op| ops.contains(op))?;
        self.advance();
        Some(op)
    }
}
