//! Configuration and constants for trace reduction.

use super::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Substring identifying header/metadata lines (`TRACE START`, `TRACE END`)
pub const HEADER_MARKER: &str = "TRACE";

/// Call signature of the program entry point
pub const ROOT_FRAME_MARKER: &str = "{main}()";

/// Indentation characters per logical nesting level
pub const INDENT_UNIT: usize = 2;

/// Character counted as indentation
pub const INDENT_CHAR: char = ' ';

/// Width of the right-aligned delta-memory column in text output
pub const MEMORY_COLUMN_WIDTH: usize = 16;

/// Trace format knobs.
///
/// Defaults match Xdebug's human-readable trace format. A TOML file may
/// override any subset of the fields:
///
/// ```toml
/// header_marker = "TRACE"
/// root_marker = "{main}()"
/// indent_unit = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReducerConfig {
    /// Lines containing this substring are always skipped
    pub header_marker: String,

    /// First line containing this substring establishes the baseline
    pub root_marker: String,

    /// Indentation characters per nesting level
    pub indent_unit: usize,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            header_marker: HEADER_MARKER.to_string(),
            root_marker: ROOT_FRAME_MARKER.to_string(),
            indent_unit: INDENT_UNIT,
        }
    }
}

impl ReducerConfig {
    /// Reject settings the reducer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_marker.is_empty() {
            return Err(ConfigError::Invalid("header_marker cannot be empty".to_string()));
        }
        if self.root_marker.is_empty() {
            return Err(ConfigError::Invalid("root_marker cannot be empty".to_string()));
        }
        if self.indent_unit == 0 {
            return Err(ConfigError::Invalid("indent_unit must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Load reducer configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If a value is out of range
pub fn load_config(path: impl AsRef<Path>) -> Result<ReducerConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading reducer config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config: ReducerConfig = toml::from_str(&contents)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_matches_constants() {
        let config = ReducerConfig::default();
        assert_eq!(config.header_marker, "TRACE");
        assert_eq!(config.root_marker, "{main}()");
        assert_eq!(config.indent_unit, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "indent_unit = 4").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.indent_unit, 4);
        assert_eq!(config.root_marker, ROOT_FRAME_MARKER);
    }

    #[test]
    fn test_load_rejects_zero_indent() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "indent_unit = 0").unwrap();

        assert!(matches!(load_config(file.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "indent_unit = \"two\"").unwrap();

        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
