//! `slots` CLI - find common availability in scheduling poll exports.
//!
//! ## Usage
//!
//! ```sh
//! # List everyone in the export, in first-seen order
//! slots roster -i poll.csv
//!
//! # Time shared by everyone, merged into blocks
//! slots common -i poll.csv
//!
//! # Time shared by two people, one line per 30-minute slot, as JSON
//! slots common -i poll.csv --people "Alice Smith,Bob Jones" --no-merge --format json
//!
//! # Date × time grid of who is available
//! cat poll.csv | slots matrix
//!
//! # Use 15-minute slots from a config file, with debug logging on stderr
//! slots -v --config slots.toml common -i poll.csv
//! ```

mod config;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use slot_engine::{AvailabilityIndex, Selection};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find common availability in scheduling poll exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file (slot_minutes, merge_slots, log_level)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the people in the export with their contact details
    Roster {
        #[command(flatten)]
        args: IoArgs,
    },
    /// Show the time every selected person is available
    Common {
        #[command(flatten)]
        args: IoArgs,
        /// Comma-separated names to select (defaults to everyone)
        #[arg(long)]
        people: Option<String>,
        /// Show every slot separately instead of merging adjacent ones
        #[arg(long)]
        no_merge: bool,
        /// Slot length in minutes (overrides the config file)
        #[arg(long)]
        slot_minutes: Option<i64>,
    },
    /// Show how many people are available at each date and time
    Matrix {
        #[command(flatten)]
        args: IoArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input CSV file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Fail on malformed rows instead of skipping them
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, config.log_level.as_deref());

    match cli.command {
        Commands::Roster { args } => {
            let index = load_index(&args)?;
            let out = match args.format {
                Format::Text => render::roster_text(&index),
                Format::Json => render::roster_json(&index)?,
            };
            write_output(args.output.as_deref(), &out)?;
        }
        Commands::Common {
            args,
            people,
            no_merge,
            slot_minutes,
        } => {
            let options = config.options(slot_minutes, no_merge)?;
            let index = load_index(&args)?;
            let selection = match people.as_deref() {
                Some(raw) => parse_people(raw),
                None => Selection::all(&index),
            };

            let result = slot_engine::find_common_availability(&index, &selection, options);
            tracing::info!(
                selected = result.selected.len(),
                slots = result.slot_count,
                blocks = result.block_count(),
                "common availability computed"
            );

            let out = match args.format {
                Format::Text => render::common_text(&result),
                Format::Json => render::common_json(&result)?,
            };
            write_output(args.output.as_deref(), &out)?;
        }
        Commands::Matrix { args } => {
            let index = load_index(&args)?;
            let matrix = slot_engine::build_matrix(&index);
            let out = match args.format {
                Format::Text => render::matrix_text(&matrix),
                Format::Json => render::matrix_json(&matrix)?,
            };
            write_output(args.output.as_deref(), &out)?;
        }
    }

    Ok(())
}

/// Send logs to stderr so stdout stays clean for piping.
///
/// `RUST_LOG` wins over `--verbose`, which wins over the config file.
fn init_logging(verbose: bool, configured: Option<&str>) {
    let fallback = if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// `"Alice, Bob"` → selection of `Alice` and `Bob`. Blank entries are dropped.
fn parse_people(raw: &str) -> Selection {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

fn load_index(args: &IoArgs) -> Result<AvailabilityIndex> {
    let text = read_input(args.input.as_deref())?;
    let parsed = input::parse_csv(&text);

    if args.strict {
        if let Some(first) = parsed.skipped.first() {
            anyhow::bail!(
                "Malformed input ({} bad rows), first at {}",
                parsed.skipped.len(),
                first
            );
        }
    }

    Ok(AvailabilityIndex::build(parsed.records))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
