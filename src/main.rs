use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use rulecheck::cli::{self, BatchOptions, CheckOptions, CliError};
use rulecheck::{Config, EmptyAggregatePolicy};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(ClapParser)]
#[command(name = "rulecheck")]
#[command(about = "Rulecheck - compare statistics of input strings with small rule expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    log_level: LogLevel,

    /// How aggregates behave for input without numbers
    #[arg(
        long,
        value_name = "POLICY",
        default_value = "zero",
        env = "RULECHECK_EMPTY_AGGREGATES",
        global = true
    )]
    empty_aggregates: EmptyAggregatePolicy,

    /// Pretty-print the output
    #[arg(short, long, global = true)]
    pretty: bool,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Split one operand into its stored tokens
    Tokenize {
        /// Operand text, e.g. "max(count('a'), 3)"
        operand: String,
    },

    /// Parse a rule and print its stored form
    Parse {
        /// Rule text, e.g. "max(count('a'), 3) >= 2"
        rule: String,
    },

    /// Check an input string against one or more rules
    Check {
        /// Rules to check, in order
        #[arg(required = true)]
        rules: Vec<String>,

        /// Input string (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Check a JSON array of input strings against stored rules
    Batch {
        /// JSON file holding an array of rules in stored form
        #[arg(short, long)]
        rules: PathBuf,

        /// JSON array of input strings (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'rulecheck docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = Config::new(cli.empty_aggregates);
    let pretty = cli.pretty;

    let result = match cli.command {
        Commands::Tokenize { operand } => {
            cli::execute_tokenize(&operand).and_then(|tokens| print_json(&tokens, pretty))
        }
        Commands::Parse { rule } => {
            cli::execute_parse(&rule).and_then(|rule| print_json(&rule, pretty))
        }
        Commands::Check { rules, input } => read_input(input).and_then(|input| {
            let options = CheckOptions {
                rules,
                input,
                config,
            };
            cli::execute_check(&options).and_then(|results| print_json(&results, pretty))
        }),
        Commands::Batch { rules, input } => run_batch(&rules, input, config, pretty),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_batch(
    rules: &Path,
    input: Option<String>,
    config: Config,
    pretty: bool,
) -> Result<(), CliError> {
    let options = BatchOptions {
        rules: std::fs::read_to_string(rules)?,
        inputs: read_input(input)?,
        config,
    };

    let rows = cli::execute_batch(&options)?;
    print_json(&rows, pretty)
}

/// Use the explicit input, or stdin when it is piped.
fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
        }
        None => Ok(None),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    println!("{}", json);
    Ok(())
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
