//! Record and report schema definitions.
//!
//! `ReducedLine` is what the reducer yields per retained line.
//! `ReductionReport` is the structure of the JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// A retained trace line annotated with its consumption since the
/// previous retained line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducedLine {
    /// Seconds elapsed since the previous retained line
    pub delta_time: f64,

    /// Bytes allocated (negative: freed) since the previous retained line
    pub delta_memory: i64,

    /// Original trace line, unmodified
    pub line: String,
}

/// Counters describing one reduction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionStats {
    /// Every line handed to the reducer
    pub lines_read: u64,

    /// Blank and header lines
    pub skipped: u64,

    /// Lines consumed while the baseline was unknown (root line included)
    pub before_baseline: u64,

    pub retained: u64,

    /// Lines deeper than the threshold
    pub filtered: u64,

    /// Lines without a time/memory pair
    pub malformed: u64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file that was reduced
    pub trace_file: String,

    /// Requested logical depth
    pub depth: u32,

    /// Indentation count of the root frame, if one was found
    pub baseline: Option<usize>,

    /// Deepest indentation count that was retained
    pub threshold: Option<usize>,

    pub records: Vec<ReducedLine>,

    pub stats: ReductionStats,

    /// Timestamp when report was generated
    pub generated_at: String,
}
