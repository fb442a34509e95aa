//! Line-level tokenizing of Xdebug text traces.
//!
//! A trace line looks like:
//!
//! ```text
//!     0.0013     133456     -> foo() /var/www/index.php:4
//! ```
//!
//! The indentation encodes the call depth and the two leading columns are
//! the cumulative time (seconds) and memory (bytes) since process start.

use crate::utils::config::INDENT_CHAR;
use once_cell::sync::Lazy;
use regex::Regex;

/// First `<digits>.<digits>` followed by whitespace and `<digits>`, ASCII only
static METRIC_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)([0-9]+\.[0-9]+)\s+([0-9]+)").expect("metric pair regex is valid")
});

/// Cumulative time and memory carried by a single trace line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricPair {
    /// Seconds since process start
    pub time: f64,

    /// Bytes in use at this point
    pub memory: i64,
}

impl MetricPair {
    pub fn new(time: f64, memory: i64) -> Self {
        Self { time, memory }
    }

    /// Difference `self - reference`, field by field
    pub fn delta_from(&self, reference: &MetricPair) -> MetricPair {
        MetricPair {
            time: self.time - reference.time,
            memory: self.memory.saturating_sub(reference.memory),
        }
    }
}

/// Count every indentation character in the line.
///
/// The whole line is counted, not only the leading run: spacing inside the
/// metric columns shifts the count as well, and depth comparisons rely on
/// that.
pub fn indentation_count(line: &str) -> usize {
    line.chars().filter(|c| *c == INDENT_CHAR).count()
}

/// Extract the first time/memory pair from a line
///
/// Returns `None` when the line has no `<float> <int>` sequence or when the
/// integer does not fit in an `i64`.
pub fn extract_metric_pair(line: &str) -> Option<MetricPair> {
    let caps = METRIC_PAIR.captures(line)?;

    let time = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let memory = caps.get(2)?.as_str().parse::<i64>().ok()?;

    Some(MetricPair { time, memory })
}

/// True for blank lines and header/metadata lines
pub fn is_skippable(line: &str, header_marker: &str) -> bool {
    line.is_empty() || is_header_line(line, header_marker)
}

/// True if the line carries the header marker anywhere
pub fn is_header_line(line: &str, header_marker: &str) -> bool {
    line.contains(header_marker)
}

/// True if the line is (or mentions) the program entry frame
pub fn is_root_frame(line: &str, root_marker: &str) -> bool {
    line.contains(root_marker)
}
