//! Node records as logged by the simulator.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult, NodeId, Position, SimTime};

/// The role a node plays in the network topology.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    /// A vessel carrying an end device.
    Boat,
    /// A fixed coastal or mobile gateway.
    Gateway,
    /// The network server (backhaul aggregation point).
    Server,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Boat    => "boat",
            NodeKind::Gateway => "gateway",
            NodeKind::Server  => "server",
        }
    }
}

impl FromStr for NodeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("boat") {
            Ok(NodeKind::Boat)
        } else if tag.eq_ignore_ascii_case("gateway") {
            Ok(NodeKind::Gateway)
        } else if tag.eq_ignore_ascii_case("server") {
            Ok(NodeKind::Server)
        } else {
            Err(CoreError::UnknownKind(tag.to_owned()))
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node's position at one instant.  Immutable once read.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:   NodeId,
    pub kind: NodeKind,
    pub pos:  Position,
    pub time: SimTime,
}

impl Node {
    #[inline]
    pub fn new(id: NodeId, kind: NodeKind, pos: Position, time: SimTime) -> Self {
        Self { id, kind, pos, time }
    }

    /// Like [`Node::new`] but rejects non-finite coordinates.
    pub fn try_new(id: NodeId, kind: NodeKind, pos: Position, time: SimTime) -> CoreResult<Self> {
        let node = Self::new(id, kind, pos, time);
        node.validate()?;
        Ok(node)
    }

    /// Check the invariants a record read from outside must satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.pos.is_finite() {
            return Err(CoreError::InvalidNode {
                id:     self.id,
                reason: format!("non-finite coordinates {}", self.pos),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn distance_m(&self, other: &Node) -> f64 {
        self.pos.distance_m(other.pos)
    }
}
