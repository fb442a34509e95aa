//! Output writers for reduced traces.
//!
//! This module handles:
//! - Text records on stdout (banner, records, summary)
//! - JSON reports on disk

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use text::{render_record, render_summary, write_banner, write_record};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
