/// Binary operators accepted in a WHERE clause.
///
/// The parser never rejects an operator token: anything it does not
/// recognise is carried verbatim in [`BinOp::Unsupported`] and evaluates to
/// `Null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinOp {
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Equal by canonical rendering (`==`)
    Equal,
    /// Logical AND (`&&`)
    And,
    /// Any other operator token
    Unsupported(String),
}

impl BinOp {
    /// Maps an operator token to its operator.
    pub fn from_token(token: &str) -> Self {
        match token {
            ">" => BinOp::GreaterThan,
            "<" => BinOp::LessThan,
            "==" => BinOp::Equal,
            "&&" => BinOp::And,
            other => BinOp::Unsupported(other.to_string()),
        }
    }

    /// The textual form of the operator.
    pub fn symbol(&self) -> &str {
        match self {
            BinOp::GreaterThan => ">",
            BinOp::LessThan => "<",
            BinOp::Equal => "==",
            BinOp::And => "&&",
            BinOp::Unsupported(token) => token,
        }
    }
}
