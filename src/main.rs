//! Xdebug Trace Reduce CLI
//!
//! Prints only the frames of an Xdebug trace that are at most `-d` levels
//! below `{main}()`, with time/memory deltas between them.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use xdebug_trace_reduce::commands::{execute_reduce, ReduceArgs};

/// Xdebug Trace Reduce - collapse a function trace to a chosen depth
#[derive(Parser, Debug)]
#[command(name = "xdebug-trace-reduce")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Xdebug trace file
    #[arg(short = 'f', long = "f", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Stack frame depth below {main}() to keep (positive integer)
    #[arg(short = 'd', long = "d", value_name = "N", allow_hyphen_values = true)]
    depth: Option<String>,

    /// TOML file overriding trace format settings
    #[arg(long, env = "XDEBUG_TRACE_REDUCE_CONFIG")]
    config: Option<PathBuf>,

    /// Also write a JSON report to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Print run statistics after the records
    #[arg(long)]
    summary: bool,

    /// Abort on the first malformed trace line
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReduceArgs {
        trace_file: cli.file,
        depth: cli.depth,
        config: cli.config,
        json_output: cli.json,
        print_summary: cli.summary,
        strict: cli.strict,
    };

    execute_reduce(args)?;

    Ok(())
}
