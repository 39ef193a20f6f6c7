//! bookstats - word count and letter frequency report for a text file
//!
//! The main entry point parses command-line arguments, sets up logging,
//! merges the optional configuration file and runs the pipeline.

use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{debug, LevelFilter};

use bookstats::app::{self, RunOptions};
use bookstats::config::{load_config, Config};
use bookstats::{CountMode, LoadError, OutputFormat};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "bookstats",
    version,
    about = "Count words and letter frequencies in a text file",
    long_about = "Reads a text file and prints a report with:
- the total number of whitespace-separated words
- every letter (case-insensitive) with its count, most frequent first"
)]
struct Args {
    /// Path to the book to analyze
    #[arg(name = "path")]
    path: PathBuf,

    /// Output format (default: text)
    #[arg(long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Only show the N most frequent characters
    #[arg(long = "top")]
    top: Option<usize>,

    /// Count every character, not only letters
    #[arg(long = "all-chars", action = ArgAction::SetTrue)]
    all_chars: bool,

    /// Never color the output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    no_color: bool,

    /// Path to configuration file (JSON)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: warn)
    #[arg(long = "log-level")]
    log_level: Option<LevelFilter>,

    /// Write log records to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version go to stdout and succeed
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(args) {
        match e.downcast_ref::<LoadError>() {
            Some(load_error) => eprintln!("{}", format!("Error: {}", load_error).red()),
            None => eprintln!("{}", format!("Error: {:#}", e).red()),
        }
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let config = load_config(args.config.as_deref());
    if args.log_level.is_none() {
        if let Some(level) = config.log_level.as_deref().and_then(|l| l.parse().ok()) {
            log::set_max_level(level);
        }
    }

    let options = resolve_options(&args, &config);
    colored::control::set_override(options.use_color);

    let output = app::run(&args.path, &options)?;
    debug!("Rendered {} bytes of {:?} output", output.len(), options.format);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;

    Ok(())
}

/// Merge command line flags over configuration file values
fn resolve_options(args: &Args, config: &Config) -> RunOptions {
    let mode = if args.all_chars || config.all_chars.unwrap_or(false) {
        CountMode::AllChars
    } else {
        CountMode::Letters
    };

    let use_color = !args.no_color && config.color.unwrap_or(true) && detect_color_support();

    RunOptions {
        format: args.format.or(config.format).unwrap_or_default(),
        top: args.top.or(config.top),
        mode,
        use_color,
    }
}

fn detect_color_support() -> bool {
    color_allowed(
        std::env::var("TERM").ok().as_deref(),
        std::env::var_os("NO_COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

/// Color needs a real terminal, a capable `TERM` and no `NO_COLOR`
fn color_allowed(term: Option<&str>, no_color_env: bool, stdout_is_terminal: bool) -> bool {
    if no_color_env || term == Some("dumb") {
        return false;
    }

    stdout_is_terminal
}

/// Set up logging to stderr, or to a file when requested
///
/// The builder accepts every level; the global max level does the
/// filtering so the configuration file can still adjust it afterwards.
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(LevelFilter::Trace);

    builder.format(|buf, record| {
        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        match File::create(log_file) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Could not open log file {}: {}", log_file.display(), e),
        }
    }

    builder.init();
    log::set_max_level(args.log_level.unwrap_or(LevelFilter::Warn));
}
