//! # selq - Abstract Syntax Tree
//!
//! The AST for the selq query language, a deliberately small SQL-like
//! notation for picking fields out of an array of JSON objects:
//!
//! ```text
//! SELECT name,score FROM data WHERE age > 25
//! ```
//!
//! - **[tokens]** - Word-level tokens produced by the lexer
//! - **[expressions]** - Field references, literals and binary operations
//! - **[operators]** - The binary operators (`>`, `<`, `==`, `&&`)
//! - **[query]** - A complete parsed query
//!
//! A WHERE clause is always exactly one comparison, so every predicate the
//! parser produces has the shape `BinaryOp(op, Field, Literal)`. Deeper trees
//! can still be built by hand and evaluated.
pub mod expressions;
pub mod operators;
pub mod query;
pub mod tokens;

pub use expressions::Expr;
pub use operators::BinOp;
pub use query::Query;
pub use tokens::{Keyword, Token};
