//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod reduce;

// Re-export main command functions
pub use reduce::{
    build_report, execute_reduce, open_trace, parse_depth, reduce_stream, validate_args, ReduceArgs,
    ReduceTarget, ReductionOutcome,
};
