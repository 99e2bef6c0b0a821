//! Recent gateway positions, for drawing where mobile gateways have been.

use std::collections::{BTreeMap, VecDeque};

use lc_core::{NodeId, Position};
use lc_replay::{FrameView, ReplayObserver};

/// Positions kept per gateway unless configured otherwise.
pub const DEFAULT_TRAIL_LEN: usize = 5;

/// Bounded history of each gateway's last few positions.
///
/// Fed one frame at a time by the replay; the evaluator itself keeps no
/// history.  A gateway missing from a frame keeps its old trail.
#[derive(Clone, Debug)]
pub struct GatewayTrail {
    capacity: usize,
    trails:   BTreeMap<NodeId, VecDeque<Position>>,
}

impl GatewayTrail {
    /// A trail holding at most `capacity` positions per gateway (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), trails: BTreeMap::new() }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record `pos` as the newest position of `gateway`, evicting the oldest
    /// one when the trail is full.
    pub fn push(&mut self, gateway: NodeId, pos: Position) {
        let capacity = self.capacity;
        let trail = self
            .trails
            .entry(gateway)
            .or_insert_with(|| VecDeque::with_capacity(capacity));
        if trail.len() == capacity {
            trail.pop_front();
        }
        trail.push_back(pos);
    }

    /// Positions of `gateway`, oldest first.
    pub fn trail(&self, gateway: NodeId) -> Option<&VecDeque<Position>> {
        self.trails.get(&gateway)
    }

    /// Most recent position of `gateway`.
    pub fn latest(&self, gateway: NodeId) -> Option<Position> {
        self.trails.get(&gateway).and_then(|t| t.back().copied())
    }

    /// Gateways seen so far, in id order.
    pub fn gateways(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.trails.keys().copied()
    }

    pub fn clear(&mut self) {
        self.trails.clear();
    }
}

impl Default for GatewayTrail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LEN)
    }
}

impl ReplayObserver for GatewayTrail {
    fn on_replay_start(&mut self, _frame_count: usize) {
        self.clear();
    }

    fn on_frame(&mut self, frame: &FrameView<'_>) {
        for gw in frame.snapshot.gateways() {
            self.push(gw.id, gw.pos);
        }
    }
}
