//! Plain-text rendering of reduced traces.
//!
//! Layout: a banner, a blank line, then one line per retained record with
//! the time delta to four decimals, the memory delta right-aligned in a
//! 16-wide column and the untouched trace line.

use crate::parser::schema::{ReducedLine, ReductionStats};
use crate::utils::config::MEMORY_COLUMN_WIDTH;
use crate::utils::error::OutputError;
use std::io::Write;
use std::path::Path;

/// Banner announcing the run, including its trailing blank line
pub fn render_banner(trace_file: &Path, depth: u32) -> String {
    format!(
        "Processing {} with stack frame depth of {}\n\n",
        trace_file.display(),
        depth
    )
}

/// Render one record, without a newline
pub fn render_record(record: &ReducedLine) -> String {
    format!(
        "{:.4} {:>width$} {}",
        record.delta_time,
        record.delta_memory,
        record.line,
        width = MEMORY_COLUMN_WIDTH
    )
}

pub fn write_banner<W: Write>(out: &mut W, trace_file: &Path, depth: u32) -> Result<(), OutputError> {
    out.write_all(render_banner(trace_file, depth).as_bytes())?;
    Ok(())
}

pub fn write_record<W: Write>(out: &mut W, record: &ReducedLine) -> Result<(), OutputError> {
    writeln!(out, "{}", render_record(record))?;
    Ok(())
}

/// Render run statistics as a boxed summary
pub fn render_summary(stats: &ReductionStats, baseline: Option<usize>, threshold: Option<usize>) -> String {
    let rule = "=".repeat(80);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", rule));
    out.push_str("REDUCTION SUMMARY\n");
    out.push_str(&format!("{}\n", rule));

    match (baseline, threshold) {
        (Some(b), Some(t)) => {
            out.push_str(&format!("Baseline:        {}\n", b));
            out.push_str(&format!("Threshold:       {}\n", t));
        }
        _ => out.push_str("Baseline:        not found (no root frame in trace)\n"),
    }

    out.push_str(&format!("Lines read:      {}\n", stats.lines_read));
    out.push_str(&format!("Skipped:         {}\n", stats.skipped));
    out.push_str(&format!("Before baseline: {}\n", stats.before_baseline));
    out.push_str(&format!("Retained:        {}\n", stats.retained));
    out.push_str(&format!("Filtered:        {}\n", stats.filtered));
    out.push_str(&format!("Malformed:       {}\n", stats.malformed));
    out.push_str(&format!("{}\n", rule));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_record_layout() {
        let record = ReducedLine {
            delta_time: 0.004,
            delta_memory: 131072,
            line: "    0.0050     262144   -> foo()".to_string(),
        };

        assert_eq!(
            render_record(&record),
            "0.0040           131072     0.0050     262144   -> foo()"
        );
    }

    #[test]
    fn test_render_record_negative_memory() {
        let record = ReducedLine {
            delta_time: 0.00001,
            delta_memory: -2048,
            line: "x".to_string(),
        };

        assert_eq!(render_record(&record), "0.0000            -2048 x");
    }

    #[test]
    fn test_banner_has_blank_line() {
        let banner = render_banner(Path::new("/tmp/trace.xt"), 3);
        assert_eq!(banner, "Processing /tmp/trace.xt with stack frame depth of 3\n\n");
    }

    #[test]
    fn test_summary_without_baseline() {
        let summary = render_summary(&ReductionStats::default(), None, None);
        assert!(summary.contains("not found"));
        assert!(summary.contains("Retained:        0"));
    }
}
