//! Execute selq queries against JSON input

use tracing::info;

use super::CliError;
use crate::{
    convert::{parse_json, value_to_json},
    executor::{Record, try_run},
    output::{to_canonical, to_pretty},
    value::Value,
};

/// How records are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One canonical record per line
    #[default]
    Text,
    /// A single JSON array of objects
    Json,
}

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The query to execute
    pub query: String,
    /// JSON input string
    pub input: Option<String>,
    /// Output format
    pub format: OutputFormat,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Result of a run operation
#[derive(Debug)]
pub struct RunResult {
    /// Matching records, in source order
    pub records: Vec<Record>,
    /// Records rendered according to the options
    pub rendered: String,
}

/// Execute a selq run operation
///
/// Unlike [`crate::run`], problems are reported rather than collapsed into
/// an empty result.
pub fn execute_run(options: &RunOptions) -> Result<RunResult, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let root = parse_json(json_str)?;

    let records = try_run(&options.query, &root)?;
    info!(records = records.len(), "query finished");

    let rendered = render_records(&records, options.format, options.pretty)?;
    Ok(RunResult { records, rendered })
}

/// Render records in the requested format.
pub fn render_records(
    records: &[Record],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let as_values = || records.iter().map(|r| Value::Object(r.clone()));

    match format {
        OutputFormat::Text => {
            let render: fn(&Value) -> String = if pretty { to_pretty } else { to_canonical };
            Ok(as_values().map(|v| render(&v)).collect::<Vec<_>>().join("\n"))
        }
        OutputFormat::Json => {
            let json = serde_json::Value::Array(as_values().map(value_to_json).collect());
            if pretty {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            }
        }
    }
}
