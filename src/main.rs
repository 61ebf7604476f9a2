use clap::{Parser as ClapParser, Subcommand};
use selq::cli::{self, CliError, OutputFormat, RunOptions};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(ClapParser)]
#[command(name = "selq")]
#[command(about = "selq - SELECT fields FROM an array of JSON objects WHERE one condition holds")]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against a JSON array
    Run {
        /// The query, e.g. "SELECT name,score FROM data WHERE age > 25"
        query: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, env = "SELQ_FORMAT", default_value = "text")]
        format: OutputFormat,

        /// Pretty-print the output
        #[arg(short, long, env = "SELQ_PRETTY")]
        pretty: bool,
    },

    /// Parse a query and show its fields and predicate without running it
    Parse {
        /// The query to parse
        query: String,
    },
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            query,
            input,
            format,
            pretty,
        } => run(query, input, format, pretty),
        Commands::Parse { query } => {
            cli::execute_parse(&query).map(|summary| println!("{}", summary))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(
    query: String,
    input: Option<String>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            debug!("reading input from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = RunOptions {
        query,
        input,
        format,
        pretty,
    };

    let result = cli::execute_run(&options)?;
    if !result.rendered.is_empty() {
        println!("{}", result.rendered);
    }
    Ok(())
}
