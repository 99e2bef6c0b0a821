//! The `Replay` struct and its frame loop.

use lc_connectivity::{ConnectivityEvaluator, ConnectivityReport, ConnectivityResult, RangeConfig};
use lc_core::SimTime;
use lc_trace::{Snapshot, Trace};

use crate::{FrameView, ReplayError, ReplayObserver, ReplayResult};

/// Evaluate the boats and gateways of one snapshot.
///
/// The server, if any, takes no part in link decisions.
pub fn evaluate_snapshot(snapshot: &Snapshot, ranges: &RangeConfig) -> ConnectivityResult<ConnectivityReport> {
    lc_connectivity::evaluate(snapshot.boats(), snapshot.gateways(), ranges)
}

/// An evaluated frame detached from its trace.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameResult {
    pub index:  usize,
    pub time:   SimTime,
    pub report: ConnectivityReport,
}

/// A trace bound to validated ranges, ready to be replayed.
///
/// Create via [`ReplayBuilder`][crate::ReplayBuilder].
pub struct Replay {
    trace:      Trace,
    evaluator:  ConnectivityEvaluator,
    max_frames: Option<usize>,
}

impl Replay {
    pub(crate) fn new(trace: Trace, evaluator: ConnectivityEvaluator, max_frames: Option<usize>) -> Self {
        Self { trace, evaluator, max_frames }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn ranges(&self) -> &RangeConfig {
        self.evaluator.ranges()
    }

    /// Number of frames [`run`][Self::run] will deliver.
    pub fn frame_count(&self) -> usize {
        match self.max_frames {
            Some(n) => n.min(self.trace.len()),
            None    => self.trace.len(),
        }
    }

    /// The snapshots selected for replay, in time order.
    pub fn frames(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.trace.first_frames(self.frame_count())
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Evaluate every selected frame and deliver it to `observer` in time
    /// order.  Returns the number of frames delivered.
    ///
    /// The first frame that fails evaluation aborts the replay; observers
    /// have then seen every earlier frame but not `on_replay_end`.
    pub fn run<O: ReplayObserver>(&self, observer: &mut O) -> ReplayResult<usize> {
        let frame_count = self.frame_count();
        log::info!(
            "replaying {frame_count} of {} snapshots (direct {} m, relay search {} m, relay gateway {} m)",
            self.trace.len(),
            self.ranges().direct_range_m,
            self.ranges().relay_search_range_m,
            self.ranges().relay_gateway_range_m,
        );
        observer.on_replay_start(frame_count);

        #[cfg(not(feature = "parallel"))]
        for (index, snapshot) in self.frames().enumerate() {
            let report = evaluate_one(&self.evaluator, snapshot)?;
            deliver(observer, index, snapshot, &report);
        }

        // Frames are evaluated together but delivered in order, stopping at
        // the first failure.
        #[cfg(feature = "parallel")]
        {
            let snapshots: Vec<&Snapshot> = self.frames().collect();
            let reports = self.evaluate_each(&snapshots);
            for (index, (snapshot, report)) in snapshots.iter().zip(reports).enumerate() {
                deliver(observer, index, snapshot, &report?);
            }
        }

        observer.on_replay_end(frame_count);
        log::info!("replay complete: {frame_count} frames");
        Ok(frame_count)
    }

    /// Evaluate every selected frame without an observer.
    pub fn evaluate_all(&self) -> ReplayResult<Vec<FrameResult>> {
        let snapshots: Vec<&Snapshot> = self.frames().collect();
        let reports = self.evaluate_frames(&snapshots)?;
        Ok(snapshots
            .iter()
            .zip(reports)
            .enumerate()
            .map(|(index, (snapshot, report))| FrameResult { index, time: snapshot.time(), report })
            .collect())
    }

    // ── Frame evaluation ──────────────────────────────────────────────────

    /// Evaluate `snapshots`; results keep input order and the earliest
    /// failure is returned.
    fn evaluate_frames(&self, snapshots: &[&Snapshot]) -> ReplayResult<Vec<ConnectivityReport>> {
        #[cfg(not(feature = "parallel"))]
        {
            snapshots
                .iter()
                .map(|snap| evaluate_one(&self.evaluator, snap))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            self.evaluate_each(snapshots).into_iter().collect()
        }
    }

    /// Evaluate every snapshot on Rayon's thread pool.  Results keep input
    /// order; a failed frame does not stop the others.
    #[cfg(feature = "parallel")]
    fn evaluate_each(&self, snapshots: &[&Snapshot]) -> Vec<ReplayResult<ConnectivityReport>> {
        use rayon::prelude::*;

        let evaluator = &self.evaluator;
        snapshots
            .par_iter()
            .map(|snap| evaluate_one(evaluator, snap))
            .collect()
    }
}

fn deliver<O: ReplayObserver>(observer: &mut O, index: usize, snapshot: &Snapshot, report: &ConnectivityReport) {
    log::debug!(
        "frame {index} at {}: {}/{} connected, {} via relay",
        snapshot.time(),
        report.summary.connected_count,
        report.summary.total_count,
        report.summary.relay_count,
    );
    observer.on_frame(&FrameView { index, snapshot, report });
}

fn evaluate_one(evaluator: &ConnectivityEvaluator, snapshot: &Snapshot) -> ReplayResult<ConnectivityReport> {
    evaluator
        .evaluate(snapshot.boats(), snapshot.gateways())
        .map_err(|source| ReplayError::Frame { time: snapshot.time(), source })
}
