use tracing::trace;

use crate::{
    ast::{BinOp, Expr},
    output::to_canonical,
    value::Value,
};

/// Evaluates expressions against a single row.
///
/// Evaluation is total: a missing field, a non-object row, an operand of the
/// wrong type or an unknown operator all produce [`Value::Null`] instead of an
/// error. Callers that filter on the result must treat `Null` as "no verdict".
///
/// # Examples
///
/// ```
/// use selq::{BinOp, Evaluator, Expr, Value};
/// use selq::value::Map;
///
/// let mut row = Map::new();
/// row.insert("age".to_string(), Value::Number(30.0));
/// let row = Value::Object(row);
///
/// let expr = Expr::binary(BinOp::GreaterThan, Expr::field("age"), Expr::literal(25.0));
/// assert_eq!(Evaluator::new(&row).eval(&expr), Value::Boolean(true));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    row: &'r Value,
}

impl<'r> Evaluator<'r> {
    pub fn new(row: &'r Value) -> Self {
        Evaluator { row }
    }

    pub fn eval(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Field(name) => self.field(name),
            Expr::Literal(value) => value.clone(),
            Expr::BinaryOp { op, left, right } => {
                let left_val = self.eval(left);
                let right_val = self.eval(right);
                apply_binop(op, &left_val, &right_val)
            }
        }
    }

    /// Value of `name` in the row, or `Null` when absent or the row is not an object.
    pub fn field(&self, name: &str) -> Value {
        self.row.get(name).cloned().unwrap_or(Value::Null)
    }
}

/// Evaluates `expr` against `row`.
pub fn evaluate(expr: &Expr, row: &Value) -> Value {
    Evaluator::new(row).eval(expr)
}

fn apply_binop(op: &BinOp, left: &Value, right: &Value) -> Value {
    match op {
        BinOp::GreaterThan => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Value::Boolean(a > b),
            _ => mismatch(op, left, right),
        },
        BinOp::LessThan => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Value::Boolean(a < b),
            _ => mismatch(op, left, right),
        },
        // Textual comparison: Number(30) renders `30.0`, String("30") renders `"30"`
        BinOp::Equal => Value::Boolean(to_canonical(left) == to_canonical(right)),
        BinOp::And => match (left.as_bool(), right.as_bool()) {
            (Some(a), Some(b)) => Value::Boolean(a && b),
            _ => mismatch(op, left, right),
        },
        BinOp::Unsupported(token) => {
            trace!(operator = %token, "unsupported operator");
            Value::Null
        }
    }
}

fn mismatch(op: &BinOp, left: &Value, right: &Value) -> Value {
    trace!(
        operator = op.symbol(),
        left = left.type_name(),
        right = right.type_name(),
        "operand types do not match operator"
    );
    Value::Null
}
