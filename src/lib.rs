//! Xdebug Trace Reduce
//!
//! Reduces a human-readable Xdebug function trace to a shallower
//! effective call depth, annotating each retained frame with the time
//! and memory consumed since the previous retained frame.
//!
//! This crate provides the core implementation for the
//! `xdebug-trace-reduce` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! xdebug-trace-reduce -f /tmp/trace.1234.xt -d 3
//! ```
//!
//! As a library:
//!
//! ```
//! use xdebug_trace_reduce::reducer::TraceReducer;
//!
//! let trace = ["TRACE START", " {main}() 0.0010 100", "  0.0020 200"];
//! let records: Vec<_> = TraceReducer::new(1)
//!     .unwrap()
//!     .reduce(trace)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(records[0].delta_memory, 200);
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod reducer;
pub mod utils;
