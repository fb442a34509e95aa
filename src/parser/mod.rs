//! Trace line parsing and schema definitions.
//!
//! This module handles:
//! - Reading raw trace lines from a stream
//! - Depth and metric extraction from a single line
//! - Defining record and report schema

pub mod reader;
pub mod schema;
pub mod tokenizer;

// Re-export main types
pub use reader::TraceLineReader;
pub use schema::{ReducedLine, ReductionReport, ReductionStats};
pub use tokenizer::{extract_metric_pair, indentation_count, MetricPair};
