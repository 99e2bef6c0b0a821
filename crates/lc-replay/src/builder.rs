//! Fluent builder for constructing a [`Replay`].

use lc_connectivity::{ConnectivityEvaluator, RangeConfig};
use lc_trace::Trace;

use crate::{Replay, ReplayError, ReplayResult, ReplaySettings};

/// Fluent builder for [`Replay`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default            |
/// |--------------------|--------------------|
/// | `.max_frames(n)`   | every snapshot     |
///
/// # Example
///
/// ```rust,ignore
/// let replay = ReplayBuilder::new(trace, RangeConfig::direct_only(15_000.0))
///     .max_frames(60)
///     .build()?;
/// ```
pub struct ReplayBuilder {
    trace:      Trace,
    ranges:     RangeConfig,
    max_frames: Option<usize>,
}

impl ReplayBuilder {
    pub fn new(trace: Trace, ranges: RangeConfig) -> Self {
        Self { trace, ranges, max_frames: None }
    }

    /// Start from file-loaded settings.
    pub fn from_settings(trace: Trace, settings: &ReplaySettings) -> Self {
        Self {
            trace,
            ranges:     settings.ranges,
            max_frames: settings.max_frames,
        }
    }

    /// Replay only the first `n` snapshots.
    pub fn max_frames(mut self, n: usize) -> Self {
        self.max_frames = Some(n);
        self
    }

    /// Validate inputs and return a ready-to-run [`Replay`].
    pub fn build(self) -> ReplayResult<Replay> {
        if self.max_frames == Some(0) {
            return Err(ReplayError::Config("max_frames must be at least 1".to_owned()));
        }
        let evaluator = ConnectivityEvaluator::new(self.ranges)?;
        Ok(Replay::new(self.trace, evaluator, self.max_frames))
    }
}
