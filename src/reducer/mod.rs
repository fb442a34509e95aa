//! Trace reduction engine.
//!
//! Turns a stream of raw trace lines into retained records with
//! incremental time and memory.

pub mod trace_reducer;

pub use trace_reducer::{ReducedLines, ReducerState, TraceReducer};
