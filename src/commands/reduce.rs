//! Reduce command implementation.
//!
//! The reduce command:
//! 1. Validates the trace path and depth
//! 2. Loads the optional reducer config
//! 3. Streams the trace through the reducer
//! 4. Prints retained records (and optionally a summary)
//! 5. Writes the JSON report if requested

use crate::output::{render_summary, validate_path, write_banner, write_record, write_report};
use crate::parser::schema::{ReducedLine, ReductionReport};
use crate::parser::TraceLineReader;
use crate::reducer::TraceReducer;
use crate::utils::config::{load_config, ReducerConfig, REPORT_VERSION};
use crate::utils::error::{InputError, ReduceError};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the reduce command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReduceArgs {
    /// Trace file to reduce
    pub trace_file: Option<PathBuf>,

    /// Target logical depth, unparsed
    pub depth: Option<String>,

    /// TOML file overriding trace format settings
    pub config: Option<PathBuf>,

    /// Output path for JSON report (optional)
    pub json_output: Option<PathBuf>,

    /// Print run statistics after the records
    pub print_summary: bool,

    /// Abort on the first malformed line instead of skipping it
    pub strict: bool,
}

/// Arguments that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceTarget {
    pub trace_file: PathBuf,
    pub depth: u32,
}

/// Everything a finished reduction produced besides its text output
#[derive(Debug)]
pub struct ReductionOutcome {
    pub reducer: TraceReducer,

    /// Retained records, only collected when asked for
    pub records: Vec<ReducedLine>,
}

/// Parse a target depth, accepting only positive integers
pub fn parse_depth(raw: &str) -> Result<u32, InputError> {
    match raw.trim().parse::<i64>() {
        Ok(d) if d >= 1 => u32::try_from(d).map_err(|_| InputError::InvalidDepth(raw.to_string())),
        _ => Err(InputError::InvalidDepth(raw.to_string())),
    }
}

/// Validate reduce arguments
///
/// **Public** - can be called before execute_reduce for early validation
///
/// # Errors
/// * `InputError::InvalidArguments` - file or depth missing
/// * `InputError::UnreadableFile` - path is not a regular file
/// * `InputError::InvalidDepth` - depth is not a positive integer
pub fn validate_args(args: &ReduceArgs) -> Result<ReduceTarget, InputError> {
    let (Some(trace_file), Some(raw_depth)) = (&args.trace_file, &args.depth) else {
        return Err(InputError::InvalidArguments(
            "Both trace file (-f) and depth level (-d) parameters are required".to_string(),
        ));
    };

    if trace_file.as_os_str().is_empty() || raw_depth.trim().is_empty() {
        return Err(InputError::InvalidArguments(
            "Both trace file (-f) and depth level (-d) parameters are required".to_string(),
        ));
    }

    if !trace_file.is_file() {
        return Err(InputError::UnreadableFile(trace_file.clone()));
    }

    let depth = parse_depth(raw_depth)?;

    Ok(ReduceTarget {
        trace_file: trace_file.clone(),
        depth,
    })
}

/// Open a trace file for reading
///
/// # Errors
/// * `InputError::UnreadableFile` - permission denied
/// * `InputError::OpenFailure` - any other open error
pub fn open_trace(path: &Path) -> Result<BufReader<File>, InputError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(InputError::UnreadableFile(path.to_path_buf()))
        }
        Err(source) => Err(InputError::OpenFailure {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Execute the reduce command
///
/// **Public** - main entry point called from main.rs
///
/// All fatal checks (arguments, config, file open, report path) happen
/// before the first line is read, so a failed run prints no records.
pub fn execute_reduce(args: ReduceArgs) -> Result<ReductionOutcome> {
    let start_time = Instant::now();

    let target = validate_args(&args)?;

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ReducerConfig::default(),
    };

    let reducer = TraceReducer::with_config(i64::from(target.depth), config)?;

    if let Some(json_path) = &args.json_output {
        validate_path(json_path).context("Invalid JSON report path")?;
    }

    let reader = open_trace(&target.trace_file)?;

    info!(
        "Reducing {} to depth {}",
        target.trace_file.display(),
        target.depth
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    write_banner(&mut out, &target.trace_file, target.depth)?;

    let outcome = reduce_stream(
        reader,
        &mut out,
        reducer,
        args.strict,
        args.json_output.is_some(),
    )?;

    if args.print_summary {
        let reducer = &outcome.reducer;
        write!(
            out,
            "{}",
            render_summary(reducer.stats(), reducer.baseline(), reducer.threshold())
        )?;
    }

    out.flush().context("Failed to flush output")?;

    if let Some(json_path) = &args.json_output {
        let report = build_report(&target, &outcome);
        write_report(&report, json_path).context("Failed to write JSON report")?;
    }

    if outcome.reducer.baseline().is_none() {
        warn!(
            "No root frame found in {}; nothing was retained",
            target.trace_file.display()
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        "Reduced {} lines to {} in {:.2}s",
        outcome.reducer.stats().lines_read,
        outcome.reducer.stats().retained,
        elapsed.as_secs_f64()
    );

    Ok(outcome)
}

/// Stream lines from `reader` through `reducer`, writing each retained
/// record to `out` as it is produced
///
/// Malformed lines are logged and skipped unless `strict` is set.
pub fn reduce_stream<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    mut reducer: TraceReducer,
    strict: bool,
    keep_records: bool,
) -> Result<ReductionOutcome> {
    let mut records = Vec::new();

    for line in TraceLineReader::new(reader) {
        let line = line.map_err(InputError::ReadFailed)?;

        match reducer.process(&line) {
            Ok(Some(record)) => {
                write_record(out, &record)?;
                if keep_records {
                    records.push(record);
                }
            }
            Ok(None) => {}
            Err(e @ ReduceError::MalformedTraceLine { .. }) => {
                if strict {
                    return Err(e).context("Aborting on malformed trace line");
                }
                warn!("Skipping {}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    debug!("Reduction stats: {:?}", reducer.stats());

    Ok(ReductionOutcome { reducer, records })
}

/// Assemble the JSON report for a finished run
pub fn build_report(target: &ReduceTarget, outcome: &ReductionOutcome) -> ReductionReport {
    use chrono::Utc;

    ReductionReport {
        version: REPORT_VERSION.to_string(),
        trace_file: target.trace_file.display().to_string(),
        depth: target.depth,
        baseline: outcome.reducer.baseline(),
        threshold: outcome.reducer.threshold(),
        records: outcome.records.clone(),
        stats: outcome.reducer.stats().clone(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
