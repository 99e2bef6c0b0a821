//! Plain data row types written by report backends.

use std::collections::HashMap;
use std::fmt;

use lc_connectivity::{BoatLink, ConnectivityReport, ConnectivityState};
use lc_core::{NodeId, Position};
use lc_trace::Snapshot;

/// Coverage totals for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageRow {
    /// Snapshot time in seconds.
    pub time:             f64,
    pub total_boats:      u32,
    pub connected:        u32,
    pub direct:           u32,
    pub relay:            u32,
    pub coverage_percent: f64,
    /// Boat-to-nearest-gateway distance statistics; `None` when the frame
    /// has no boats or no gateways.
    pub avg_distance_m:   Option<f64>,
    pub min_distance_m:   Option<f64>,
    pub max_distance_m:   Option<f64>,
}

impl CoverageRow {
    pub fn from_report(time: f64, report: &ConnectivityReport) -> Self {
        let s = &report.summary;
        Self {
            time,
            total_boats:      s.total_count as u32,
            connected:        s.connected_count as u32,
            direct:           s.direct_count() as u32,
            relay:            s.relay_count as u32,
            coverage_percent: s.coverage_percentage(),
            avg_distance_m:   report.distances.map(|d| d.mean_m),
            min_distance_m:   report.distances.map(|d| d.min_m),
            max_distance_m:   report.distances.map(|d| d.max_m),
        }
    }
}

/// How a boat reaches the network in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Direct,
    Relay,
    None,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Direct => "direct",
            LinkKind::Relay  => "relay",
            LinkKind::None   => "none",
        }
    }
}

impl From<ConnectivityState> for LinkKind {
    fn from(state: ConnectivityState) -> Self {
        match state {
            ConnectivityState::DirectLink { .. } => LinkKind::Direct,
            ConnectivityState::RelayLink { .. }  => LinkKind::Relay,
            ConnectivityState::Unconnected       => LinkKind::None,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One boat's link in one frame, with the segment endpoints a renderer
/// draws: boat → gateway for direct links, boat → relay → gateway for
/// relayed ones.  Endpoint columns are `None` when the link has no such hop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRow {
    pub time:       f64,
    pub boat_id:    u32,
    pub kind:       LinkKind,
    pub relay_id:   Option<u32>,
    pub gateway_id: Option<u32>,
    pub boat_x:     f64,
    pub boat_y:     f64,
    pub relay_x:    Option<f64>,
    pub relay_y:    Option<f64>,
    pub gateway_x:  Option<f64>,
    pub gateway_y:  Option<f64>,
}

/// Build one [`LinkRow`] per boat of `report`, resolving node positions
/// from `snapshot`.  Rows keep the boat order of the snapshot.
pub fn link_rows(snapshot: &Snapshot, report: &ConnectivityReport) -> Vec<LinkRow> {
    let boats: HashMap<NodeId, Position> = snapshot.boats().iter().map(|n| (n.id, n.pos)).collect();
    let gateways: HashMap<NodeId, Position> =
        snapshot.gateways().iter().map(|n| (n.id, n.pos)).collect();
    let time = snapshot.time().secs();

    report
        .links
        .iter()
        .map(|link| link_row(time, link, &boats, &gateways))
        .collect()
}

fn link_row(
    time: f64,
    link: &BoatLink,
    boats: &HashMap<NodeId, Position>,
    gateways: &HashMap<NodeId, Position>,
) -> LinkRow {
    let boat = boats.get(&link.boat).copied().unwrap_or(Position::new(f64::NAN, f64::NAN));
    let relay = link.state.relay().and_then(|id| boats.get(&id));
    let gateway = link.state.gateway().and_then(|id| gateways.get(&id));

    LinkRow {
        time,
        boat_id:    link.boat.0,
        kind:       link.state.into(),
        relay_id:   link.state.relay().map(|id| id.0),
        gateway_id: link.state.gateway().map(|id| id.0),
        boat_x:     boat.x,
        boat_y:     boat.y,
        relay_x:    relay.map(|p| p.x),
        relay_y:    relay.map(|p| p.y),
        gateway_x:  gateway.map(|p| p.x),
        gateway_y:  gateway.map(|p| p.y),
    }
}
