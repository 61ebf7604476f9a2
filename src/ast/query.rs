use crate::ast::Expr;

/// A parsed `SELECT ... FROM ... [WHERE ...]` query.
///
/// Built once per parse and consumed by the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Selected fields in output column order; duplicates are kept
    pub fields: Vec<String>,

    /// Text after `FROM`. Recorded as written, never checked
    pub source: String,

    /// Optional WHERE predicate
    pub predicate: Option<Expr>,
}
