pub mod ast;
pub mod cli;
pub mod convert;
pub mod evaluator;
pub mod executor;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{BinOp, Expr, Keyword, Query, Token};
pub use evaluator::{Evaluator, evaluate};
pub use executor::{QueryError, Record, execute, run, try_run};
pub use lexer::{Lexer, Span, Spanned};
pub use output::{to_canonical, to_pretty};
pub use parser::{ParseError, Parser, parse_query};
pub use value::{Map, Value};
