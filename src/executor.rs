//! Runs parsed queries over an array of rows.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::Query,
    evaluator::Evaluator,
    lexer::Lexer,
    parser::{ParseError, Parser},
    value::Value,
};

/// One output row: selected field name to the value found (`Null` if absent).
pub type Record = IndexMap<String, Value>;

/// Why [`try_run`] produced no rows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("invalid query: {0}")]
    Parse(#[from] ParseError),

    #[error("expected an array of rows, found {found}")]
    NotAnArray { found: &'static str },
}

/// Applies an already parsed query to `root`.
///
/// A row is dropped only when the predicate evaluates to exactly
/// `Boolean(false)`; `Null` and any other result keep it. Rows keep their
/// source order. A non-array root yields no records.
pub fn execute(query: &Query, root: &Value) -> Vec<Record> {
    match root.as_array() {
        Some(rows) => project_rows(query, rows),
        None => {
            debug!(found = root.type_name(), "root value is not an array");
            vec![]
        }
    }
}

fn project_rows(query: &Query, rows: &[Value]) -> Vec<Record> {
    let mut records = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let evaluator = Evaluator::new(row);

        if let Some(predicate) = &query.predicate
            && evaluator.eval(predicate) == Value::Boolean(false)
        {
            trace!(row = index, "predicate is false; skipping row");
            continue;
        }

        let mut record = Record::with_capacity(query.fields.len());
        for field in &query.fields {
            record.insert(field.clone(), evaluator.field(field));
        }
        records.push(record);
    }

    records
}

/// Parses and runs `query_text`, reporting why nothing could run.
///
/// # Examples
///
/// ```
/// use selq::executor::{try_run, QueryError};
/// use selq::Value;
///
/// let err = try_run("SELECT a FROM data", &Value::Null).unwrap_err();
/// assert_eq!(err, QueryError::NotAnArray { found: "null" });
/// ```
pub fn try_run(query_text: &str, root: &Value) -> Result<Vec<Record>, QueryError> {
    let query = Parser::new(Lexer::new(query_text)).parse()?;
    let rows = root.as_array().ok_or(QueryError::NotAnArray {
        found: root.type_name(),
    })?;
    Ok(project_rows(&query, rows))
}

/// Parses and runs `query_text` against `root`.
///
/// An unparseable query or a non-array root gives an empty result; nothing
/// here ever fails.
///
/// # Examples
///
/// ```
/// use selq::{convert::parse_json, run, Value};
///
/// let root = parse_json(r#"[{"name": "Alice", "age": 30}, {"name": "Bob", "age": 22}]"#).unwrap();
/// let records = run("SELECT name FROM data WHERE age > 25", &root);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0]["name"], Value::String("Alice".into()));
/// ```
pub fn run(query_text: &str, root: &Value) -> Vec<Record> {
    match try_run(query_text, root) {
        Ok(records) => records,
        Err(e) => {
            debug!(error = %e, "query produced no rows");
            vec![]
        }
    }
}
