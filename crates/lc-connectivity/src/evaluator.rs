//! The connectivity decision procedure.

use std::collections::{BTreeMap, HashSet};

use lc_core::{CoreError, Node, NodeId, NodeKind};

use crate::{ConnectivityError, ConnectivityResult, CoverageSummary, DistanceStats, RangeConfig};

// ── Result types ──────────────────────────────────────────────────────────────

/// How one boat reaches the network at one instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectivityState {
    /// Uplink straight to `gateway`.
    DirectLink { gateway: NodeId },
    /// One hop through boat `relay`, which is in direct range of `gateway`.
    RelayLink { relay: NodeId, gateway: NodeId },
    Unconnected,
}

impl ConnectivityState {
    #[inline]
    pub fn is_connected(&self) -> bool {
        !matches!(self, ConnectivityState::Unconnected)
    }

    #[inline]
    pub fn is_relay(&self) -> bool {
        matches!(self, ConnectivityState::RelayLink { .. })
    }

    /// The gateway that ultimately carries this boat's traffic.
    pub fn gateway(&self) -> Option<NodeId> {
        match *self {
            ConnectivityState::DirectLink { gateway }   => Some(gateway),
            ConnectivityState::RelayLink { gateway, .. } => Some(gateway),
            ConnectivityState::Unconnected              => None,
        }
    }

    pub fn relay(&self) -> Option<NodeId> {
        match *self {
            ConnectivityState::RelayLink { relay, .. } => Some(relay),
            _ => None,
        }
    }
}

/// One boat's decision together with the distance that drove it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoatLink {
    pub boat:  NodeId,
    pub state: ConnectivityState,
    /// Distance to the nearest gateway; `None` when there are no gateways.
    pub nearest_gateway_m: Option<f64>,
}

/// Everything [`evaluate`] derives from one snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectivityReport {
    /// One entry per boat, in the order the boats were supplied.
    pub links:     Vec<BoatLink>,
    pub summary:   CoverageSummary,
    /// Nearest-gateway distance spread; `None` without boats or gateways.
    pub distances: Option<DistanceStats>,
}

impl ConnectivityReport {
    /// State assigned to `boat`, if it was part of the evaluation.
    pub fn state_of(&self, boat: NodeId) -> Option<ConnectivityState> {
        self.links.iter().find(|l| l.boat == boat).map(|l| l.state)
    }

    /// The boat id → state mapping.
    pub fn states(&self) -> BTreeMap<NodeId, ConnectivityState> {
        self.links.iter().map(|l| (l.boat, l.state)).collect()
    }
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

/// A validated [`RangeConfig`] bound to the decision procedure.
///
/// Prefer this over the free [`evaluate`] when scoring many snapshots with
/// the same ranges: the configuration is checked once, at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConnectivityEvaluator {
    ranges: RangeConfig,
}

impl ConnectivityEvaluator {
    pub fn new(ranges: RangeConfig) -> ConnectivityResult<Self> {
        ranges.validate()?;
        Ok(Self { ranges })
    }

    #[inline]
    pub fn ranges(&self) -> &RangeConfig {
        &self.ranges
    }

    /// Decide every boat's link state for one snapshot.
    ///
    /// `boats` and `gateways` must come from the same instant.  Their order
    /// matters: nearest-gateway ties go to the earlier gateway, and the first
    /// qualifying relay boat (not the closest) is chosen.
    pub fn evaluate(&self, boats: &[Node], gateways: &[Node]) -> ConnectivityResult<ConnectivityReport> {
        check_nodes(boats, NodeKind::Boat)?;
        check_nodes(gateways, NodeKind::Gateway)?;
        check_unique_ids(boats, NodeKind::Boat)?;
        check_unique_ids(gateways, NodeKind::Gateway)?;

        let ranges = &self.ranges;
        let mut links = Vec::with_capacity(boats.len());

        for (i, boat) in boats.iter().enumerate() {
            let Some((gateway, dist)) = nearest_gateway(boat, gateways) else {
                links.push(BoatLink { boat: boat.id, state: ConnectivityState::Unconnected, nearest_gateway_m: None });
                continue;
            };

            let state = if dist <= ranges.direct_range_m {
                ConnectivityState::DirectLink { gateway: gateway.id }
            } else if dist <= ranges.relay_gateway_range_m {
                match find_relay(i, boats, gateway, ranges) {
                    Some(relay) => ConnectivityState::RelayLink { relay: relay.id, gateway: gateway.id },
                    None        => ConnectivityState::Unconnected,
                }
            } else {
                ConnectivityState::Unconnected
            };

            links.push(BoatLink { boat: boat.id, state, nearest_gateway_m: Some(dist) });
        }

        let summary = CoverageSummary::from_states(links.iter().map(|l| &l.state));
        let distances = DistanceStats::from_distances(links.iter().filter_map(|l| l.nearest_gateway_m));

        Ok(ConnectivityReport { links, summary, distances })
    }
}

/// Validate `ranges` and evaluate one snapshot.
///
/// See [`ConnectivityEvaluator::evaluate`].
pub fn evaluate(
    boats:    &[Node],
    gateways: &[Node],
    ranges:   &RangeConfig,
) -> ConnectivityResult<ConnectivityReport> {
    ConnectivityEvaluator::new(*ranges)?.evaluate(boats, gateways)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Nearest gateway by euclidean distance; strict `<` keeps the first of
/// equally distant gateways.
fn nearest_gateway<'a>(boat: &Node, gateways: &'a [Node]) -> Option<(&'a Node, f64)> {
    let mut best: Option<(&Node, f64)> = None;
    for gw in gateways {
        let d = boat.distance_m(gw);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((gw, d)),
        }
    }
    best
}

/// First other boat that is within search range of `boats[boat_idx]` and in
/// direct range of `gateway`.
fn find_relay<'a>(
    boat_idx: usize,
    boats:    &'a [Node],
    gateway:  &Node,
    ranges:   &RangeConfig,
) -> Option<&'a Node> {
    let boat = &boats[boat_idx];
    boats
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != boat_idx)
        .map(|(_, candidate)| candidate)
        .find(|candidate| {
            boat.distance_m(candidate) < ranges.relay_search_range_m
                && candidate.distance_m(gateway) <= ranges.direct_range_m
        })
}

fn check_nodes(nodes: &[Node], expected: NodeKind) -> ConnectivityResult<()> {
    for node in nodes {
        node.validate().map_err(|e| match e {
            CoreError::InvalidNode { id, reason } => ConnectivityError::InvalidNode { id, reason },
            other => ConnectivityError::InvalidNode { id: node.id, reason: other.to_string() },
        })?;
        if node.kind != expected {
            return Err(ConnectivityError::InvalidNode {
                id:     node.id,
                reason: format!("expected a {expected}, found a {}", node.kind),
            });
        }
    }
    Ok(())
}

fn check_unique_ids(nodes: &[Node], kind: NodeKind) -> ConnectivityResult<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id) {
            return Err(ConnectivityError::InvalidNode {
                id:     node.id,
                reason: format!("{kind} id appears more than once in the snapshot"),
            });
        }
    }
    Ok(())
}
