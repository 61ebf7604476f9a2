use std::fmt;

use crate::{ast::BinOp, value::Value};

/// Abstract Syntax Tree node for a predicate or projection.
///
/// Trees are built once by the parser (or by hand) and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a key of the current row
    ///
    /// # Example
    /// ```text
    /// age
    /// ```
    Field(String),

    /// Constant value
    ///
    /// # Example
    /// ```text
    /// 25
    /// "Alice"
    /// ```
    Literal(Value),

    /// Binary operation (comparison or logical)
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        Expr::Field(name.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Field(name) => f.write_str(name),
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op.symbol(), right),
        }
    }
}
