//! CLI support for selq
//!
//! Provides programmatic access to the `selq` command so other tools can
//! run queries the same way the binary does.

mod parse;
mod run;

pub use parse::{describe_query, execute_parse};
pub use run::{OutputFormat, RunOptions, RunResult, execute_run, render_records};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The query text did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// The input document is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input document is not an array of rows
    #[error("Invalid input: expected an array of rows, found {0}")]
    NotAnArray(&'static str),

    /// Reading input failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,
}

impl From<crate::QueryError> for CliError {
    fn from(e: crate::QueryError) -> Self {
        match e {
            crate::QueryError::Parse(e) => CliError::Parse(e),
            crate::QueryError::NotAnArray { found } => CliError::NotAnArray(found),
        }
    }
}
