//! Time-ordered collection of snapshots for one simulator run.

use std::collections::BTreeMap;

use lc_core::{Node, NodeId, SimTime};

use crate::{Snapshot, TraceResult};

/// One of the five evenly spaced frames captured as still images.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyFrame {
    pub label: &'static str,
    pub index: usize,
}

/// Every snapshot of a run, keyed and iterated in ascending time order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    snapshots: BTreeMap<SimTime, Snapshot>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group in-memory node records by timestamp.
    ///
    /// Every node is validated; the first invalid one aborts the build.
    pub fn from_nodes<I>(nodes: I) -> TraceResult<Self>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut trace = Self::new();
        for node in nodes {
            node.validate()?;
            trace.push(node)?;
        }
        Ok(trace)
    }

    /// Insert one node into the snapshot for its timestamp, creating the
    /// snapshot on first use.
    pub fn push(&mut self, node: Node) -> TraceResult<()> {
        self.snapshots
            .entry(node.time)
            .or_insert_with(|| Snapshot::new(node.time))
            .push(node)
    }

    /// Number of nodes already recorded at `time` — the id given to the next
    /// row that carries no `node_id` column.
    pub(crate) fn next_implicit_id(&self, time: SimTime) -> NodeId {
        let n = self.snapshots.get(&time).map_or(0, Snapshot::node_count);
        NodeId(n as u32)
    }

    /// Number of snapshots (distinct timestamps).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Total node records across all snapshots.
    pub fn node_count(&self) -> usize {
        self.snapshots.values().map(Snapshot::node_count).sum()
    }

    /// Distinct timestamps in ascending order.
    pub fn times(&self) -> impl Iterator<Item = SimTime> + '_ {
        self.snapshots.keys().copied()
    }

    pub fn snapshot_at(&self, time: SimTime) -> Option<&Snapshot> {
        self.snapshots.get(&time)
    }

    /// Snapshots in ascending time order.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.snapshots.values()
    }

    /// The first `n` snapshots in time order.
    pub fn first_frames(&self, n: usize) -> impl Iterator<Item = &Snapshot> + '_ {
        self.snapshots.values().take(n)
    }

    /// The logged timestamp nearest to `target_secs`.
    ///
    /// When two timestamps are equally near, the earlier one wins.  Returns
    /// `None` for an empty trace.
    pub fn closest_time(&self, target_secs: f64) -> Option<SimTime> {
        let mut best: Option<(SimTime, f64)> = None;
        for time in self.times() {
            let diff = (time.secs() - target_secs).abs();
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((time, diff)),
            }
        }
        best.map(|(time, _)| time)
    }

    /// The snapshot nearest to `target_secs` (see [`Trace::closest_time`]).
    pub fn closest_snapshot(&self, target_secs: f64) -> Option<&Snapshot> {
        self.closest_time(target_secs).and_then(|t| self.snapshot_at(t))
    }

    /// Start, quarter, half, three-quarter, and final frame indices for a
    /// sequence of `frame_count` frames.  Empty when `frame_count == 0`.
    ///
    /// Short sequences repeat indices rather than dropping labels.
    pub fn key_frames(frame_count: usize) -> Vec<KeyFrame> {
        if frame_count == 0 {
            return Vec::new();
        }
        let n = frame_count;
        vec![
            KeyFrame { label: "start",          index: 0 },
            KeyFrame { label: "quarter",        index: n / 4 },
            KeyFrame { label: "half",           index: n / 2 },
            KeyFrame { label: "three_quarters", index: 3 * n / 4 },
            KeyFrame { label: "end",            index: n - 1 },
        ]
    }
}
