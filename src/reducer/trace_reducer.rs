//! Depth filter and delta computation over a trace line stream.
//!
//! The reducer is a two-state machine. While `AwaitingBaseline` it only
//! looks for the root frame; its indentation count becomes the baseline
//! and the threshold is fixed at `baseline + depth * indent_unit`. From
//! then on (`Filtering`) every line no deeper than the threshold is retained
//! and annotated with the time/memory consumed since the previous
//! retained line.

use crate::parser::schema::{ReducedLine, ReductionStats};
use crate::parser::tokenizer::{extract_metric_pair, indentation_count, is_root_frame, is_skippable, MetricPair};
use crate::utils::config::ReducerConfig;
use crate::utils::error::ReduceError;
use log::{debug, trace};

/// Where the reducer is in the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReducerState {
    /// No root frame seen yet; lines produce nothing
    AwaitingBaseline,

    /// Root frame seen; terminal for the rest of the run
    Filtering { baseline: usize, threshold: usize },
}

/// Streaming trace reducer.
///
/// Not reentrant: each independent trace needs its own instance.
#[derive(Debug, Clone)]
pub struct TraceReducer {
    depth: u32,
    config: ReducerConfig,
    state: ReducerState,
    /// Metrics of the last retained line. Starts at zero, not at the root
    /// frame's own metrics, so the first delta includes everything up to it.
    reference: MetricPair,
    stats: ReductionStats,
}

impl TraceReducer {
    /// Create a reducer for the default Xdebug trace format
    ///
    /// # Errors
    /// * `ReduceError::InvalidConfiguration` - depth is below 1
    pub fn new(depth: i64) -> Result<Self, ReduceError> {
        Self::with_config(depth, ReducerConfig::default())
    }

    /// Create a reducer with custom markers or indentation unit
    ///
    /// # Errors
    /// * `ReduceError::InvalidConfiguration` - depth is below 1 or the
    ///   config does not validate
    pub fn with_config(depth: i64, config: ReducerConfig) -> Result<Self, ReduceError> {
        if depth < 1 {
            return Err(ReduceError::InvalidConfiguration(format!(
                "target depth must be a positive integer, got {}",
                depth
            )));
        }
        let depth = u32::try_from(depth).map_err(|_| {
            ReduceError::InvalidConfiguration(format!("target depth {} is too large", depth))
        })?;

        config
            .validate()
            .map_err(|e| ReduceError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            depth,
            config,
            state: ReducerState::AwaitingBaseline,
            reference: MetricPair::default(),
            stats: ReductionStats::default(),
        })
    }

    /// Feed one line (without its terminator).
    ///
    /// Returns `Ok(Some(_))` for a retained line, `Ok(None)` for a line
    /// that produces nothing, and `Err(MalformedTraceLine)` for a line
    /// past the baseline that carries no time/memory pair. A malformed
    /// line leaves the reducer untouched apart from its counters, so the
    /// caller may keep feeding lines.
    pub fn process(&mut self, line: &str) -> Result<Option<ReducedLine>, ReduceError> {
        self.stats.lines_read += 1;

        if is_skippable(line, &self.config.header_marker) {
            self.stats.skipped += 1;
            return Ok(None);
        }

        let threshold = match self.state {
            ReducerState::AwaitingBaseline => {
                self.stats.before_baseline += 1;
                if is_root_frame(line, &self.config.root_marker) {
                    self.establish_baseline(indentation_count(line));
                }
                return Ok(None);
            }
            ReducerState::Filtering { threshold, .. } => threshold,
        };

        let depth = indentation_count(line);

        let Some(metrics) = extract_metric_pair(line) else {
            self.stats.malformed += 1;
            return Err(ReduceError::MalformedTraceLine {
                line_number: self.line_number(),
                line: line.to_string(),
            });
        };

        if depth > threshold {
            trace!("Filtered line {} at depth {}", self.line_number(), depth);
            self.stats.filtered += 1;
            return Ok(None);
        }

        let delta = metrics.delta_from(&self.reference);
        self.reference = metrics;
        self.stats.retained += 1;

        Ok(Some(ReducedLine {
            delta_time: delta.time,
            delta_memory: delta.memory,
            line: line.to_string(),
        }))
    }

    /// Lazily reduce a sequence of lines
    pub fn reduce<I>(self, lines: I) -> ReducedLines<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ReducedLines {
            reducer: self,
            lines: lines.into_iter(),
        }
    }

    fn establish_baseline(&mut self, baseline: usize) {
        let step = (self.depth as usize).saturating_mul(self.config.indent_unit);
        let threshold = baseline.saturating_add(step);

        debug!(
            "Baseline {} found on line {}, threshold {} for depth {}",
            baseline,
            self.line_number(),
            threshold,
            self.depth
        );

        self.state = ReducerState::Filtering { baseline, threshold };
    }

    fn line_number(&self) -> usize {
        self.stats.lines_read as usize
    }

    pub fn state(&self) -> ReducerState {
        self.state
    }

    /// Indentation count of the root frame, once known
    pub fn baseline(&self) -> Option<usize> {
        match self.state {
            ReducerState::AwaitingBaseline => None,
            ReducerState::Filtering { baseline, .. } => Some(baseline),
        }
    }

    /// Deepest indentation count that is retained, once known
    pub fn threshold(&self) -> Option<usize> {
        match self.state {
            ReducerState::AwaitingBaseline => None,
            ReducerState::Filtering { threshold, .. } => Some(threshold),
        }
    }

    /// Metrics of the last retained line (zero before the first)
    pub fn reference(&self) -> MetricPair {
        self.reference
    }

    pub fn stats(&self) -> &ReductionStats {
        &self.stats
    }
}

/// Iterator returned by [`TraceReducer::reduce`].
///
/// Yields one item per retained or malformed line; skipped and filtered
/// lines are consumed silently. Malformed lines surface as `Err` and
/// iteration may continue past them.
pub struct ReducedLines<I> {
    reducer: TraceReducer,
    lines: I,
}

impl<I> ReducedLines<I> {
    pub fn into_reducer(self) -> TraceReducer {
        self.reducer
    }
}

impl<I> Iterator for ReducedLines<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<ReducedLine, ReduceError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match self.reducer.process(line.as_ref()) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}
