//! Abstract Syntax Tree definitions for the sigil dialect
//!
//! The node set is closed: a [`Program`] holds [`Statement`]s (if, assignment, block, and the two recovery
//! placeholders) and statements hold [`Expr`]s (binary operations, number literals, variables).
//!
//! Nodes serialize with an internal `"type"` tag (`{"type": "Assignment", ...}`) and display as S-expressions:
//!
//! ```text
//! (program (if (== $x 10) (block (= $r (* $x 5)))))
//! ```

use std::fmt;

use serde::Serialize;
use sigil_core::lang::kinds;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Variable name, including its `$` sigil.
pub type Ident = String;

/// A program is a sequence of statements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    #[serde(rename = "IfStatement")]
    If(IfStatement),
    Assignment(Assignment),
    Block(Block),
    /// A token that cannot start a statement was skipped.
    #[serde(rename = "InvalidStatement")]
    Invalid,
    /// A statement failed part-way and recovery discarded the rest of it.
    #[serde(rename = "SkippedStatement")]
    Skipped,
}

/// `{ statement* }`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatement {
    pub test: Expr,
    pub consequent: Block,
    /// Block following an `else:` keyword, if present.
    pub alternate: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub variable: Ident,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "BinaryExpression")]
    Binary {
        operator: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    #[serde(rename = "NumberLiteral")]
    Number { value: f64 },
    Variable { name: Ident },
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn number(value: f64) -> Self {
        Expr::Number { value }
    }

    pub fn variable(name: impl Into<Ident>) -> Self {
        Expr::Variable { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "===")]
    StrictEq,
}

impl BinaryOp {
    /// Operator written by a token of the given (canonical) kind.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            kinds::PLUS => Some(BinaryOp::Add),
            kinds::MINUS => Some(BinaryOp::Sub),
            kinds::MULTIPLY => Some(BinaryOp::Mul),
            kinds::DIVIDE => Some(BinaryOp::Div),
            kinds::EQUAL => Some(BinaryOp::Eq),
            kinds::EQUALSTR => Some(BinaryOp::StrictEq),
            _ => None,
        }
    }

    /// Canonical kind name of the token that writes this operator.
    pub fn kind(self) -> &'static str {
        match self {
            BinaryOp::Add => kinds::PLUS,
            BinaryOp::Sub => kinds::MINUS,
            BinaryOp::Mul => kinds::MULTIPLY,
            BinaryOp::Div => kinds::DIVIDE,
            BinaryOp::Eq => kinds::EQUAL,
            BinaryOp::StrictEq => kinds::EQUALSTR,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::StrictEq => "===",
        }
    }
}

// ============================================================================
// S-expression rendering
// ============================================================================

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { operator, left, right } => write!(f, "({operator} {left} {right})"),
            Expr::Number { value } => write!(f, "{value}"),
            Expr::Variable { name } => f.write_str(name),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, head: &str, statements: &[Statement]) -> fmt::Result {
    write!(f, "({head}")?;
    for stmt in statements {
        write!(f, " {stmt}")?;
    }
    write!(f, ")")
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, "block", &self.statements)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::If(stmt) => {
                write!(f, "(if {} {}", stmt.test, stmt.consequent)?;
                if let Some(alternate) = &stmt.alternate {
                    write!(f, " {alternate}")?;
                }
                write!(f, ")")
            }
            Statement::Assignment(assign) => write!(f, "(= {} {})", assign.variable, assign.value),
            Statement::Block(block) => write!(f, "{block}"),
            Statement::Invalid => write!(f, "(invalid)"),
            Statement::Skipped => write!(f, "(skipped)"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, "program", &self.statements)
    }
}
