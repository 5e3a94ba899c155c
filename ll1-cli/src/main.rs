//! LL1 example client
//!
//! Reads whitespace separated signed integers from a file and prints one
//! per line. On malformed input prints where scanning stopped.

use clap::Parser;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::process;

mod config;
mod error;
mod logging;
mod platform;
mod sequential;

use crate::config::Overrides;
use crate::error::{CliError, ScanError};
use crate::platform::print_error_with_source;
use ll1_config::{LogFormat, LogLevel, RunConfig};
use ll1_core::{Diagnostic, InputSource, Position, ReaderSource};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "sequential",
    about = "Read signed integers from a file with an LL(1) scanner",
    version
)]
struct Cli {
    /// Input file (default: sequential_input.txt)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Log level: silent (or off), error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log format: pretty, compact, json
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    LogFormat::parse(s).ok_or_else(|| format!("unknown log format '{s}'"))
}

fn main() {
    let cli = Cli::parse();

    let overrides = Overrides {
        input: cli.input,
        log_level: cli.log_level,
        log_format: cli.log_format,
        log_file: cli.log_file,
    };
    let run_config = match config::resolve(cli.config.as_deref(), overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = logging::init(&run_config.log, run_config.format) {
        eprintln!("Error: cannot open log file: {}", e);
        process::exit(2);
    }

    match run(&run_config) {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
        }
        Err(e) => {
            print_error_with_source(&e, &run_config.input);
            process::exit(1);
        }
    }
}

/// Scan the configured input file
fn run(config: &RunConfig) -> Result<Vec<i64>, CliError> {
    let file = File::open(&config.input).map_err(|source| CliError::Open {
        path: config.input.clone(),
        source,
    })?;
    info!(input = %config.input.display(), "scanning");

    scan(BufReader::new(file))
}

/// Scan integers from a reader
///
/// A read failure takes precedence over the scan result: the scanner only
/// saw it as end of input.
fn scan<R: Read>(reader: R) -> Result<Vec<i64>, CliError> {
    let mut source = ReaderSource::new(reader);
    let mut pos = Position::start();
    let result = sequential::read_integers(&mut source, &mut pos);

    if let Some(e) = source.take_error() {
        return Err(CliError::Io(e));
    }

    match result {
        Ok(values) => {
            debug!(count = values.len(), end = %pos, "scan complete");
            Ok(values)
        }
        // Nothing was consumed by the failing expect, so the lookahead and
        // position still describe the offending token.
        Err(ScanError::Unexpected(_)) => Err(CliError::UnexpectedToken(Diagnostic::new(
            source.look_ahead(),
            pos,
        ))),
        Err(ScanError::Overflow(at)) => Err(CliError::Overflow(at)),
    }
}
