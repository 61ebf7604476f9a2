//! Syntax-only inspection of a query

use super::CliError;
use crate::{Lexer, Parser, ast::Query};

/// Parse a query and describe what it will do.
pub fn execute_parse(query: &str) -> Result<String, CliError> {
    let parsed = Parser::new(Lexer::new(query)).parse()?;
    Ok(describe_query(&parsed))
}

/// Multi-line summary of a parsed query.
pub fn describe_query(query: &Query) -> String {
    let fields = query
        .fields
        .iter()
        .map(|f| format!("{:?}", f))
        .collect::<Vec<_>>()
        .join(", ");
    let predicate = match &query.predicate {
        Some(expr) => expr.to_string(),
        None => "(none)".to_string(),
    };

    format!(
        "fields:    [{}]\nsource:    {}\npredicate: {}",
        fields, query.source, predicate
    )
}
