//! All nodes sharing one timestamp.

use lc_core::{Node, NodeKind, SimTime};

use crate::{TraceError, TraceResult};

/// The network as it stood at one logging instant.
///
/// Boats and gateways keep the order in which they were pushed; the
/// connectivity evaluator's tie-breaks depend on it.  At most one server
/// exists per snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    time:     SimTime,
    boats:    Vec<Node>,
    gateways: Vec<Node>,
    server:   Option<Node>,
}

impl Snapshot {
    pub fn new(time: SimTime) -> Self {
        Self {
            time,
            boats:    Vec::new(),
            gateways: Vec::new(),
            server:   None,
        }
    }

    /// Build a snapshot from nodes that all carry `time`.
    pub fn from_nodes<I>(time: SimTime, nodes: I) -> TraceResult<Self>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut snap = Self::new(time);
        for node in nodes {
            snap.push(node)?;
        }
        Ok(snap)
    }

    /// Add one node, routing it by kind.
    ///
    /// Fails if the node's timestamp differs from the snapshot's, or if it is
    /// a second server.
    pub fn push(&mut self, node: Node) -> TraceResult<()> {
        if node.time != self.time {
            return Err(TraceError::TimeMismatch {
                id:       node.id,
                expected: self.time,
                got:      node.time,
            });
        }
        match node.kind {
            NodeKind::Boat    => self.boats.push(node),
            NodeKind::Gateway => self.gateways.push(node),
            NodeKind::Server  => {
                if let Some(existing) = &self.server {
                    return Err(TraceError::DuplicateServer {
                        time:   self.time,
                        first:  existing.id,
                        second: node.id,
                    });
                }
                self.server = Some(node);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    #[inline]
    pub fn boats(&self) -> &[Node] {
        &self.boats
    }

    #[inline]
    pub fn gateways(&self) -> &[Node] {
        &self.gateways
    }

    #[inline]
    pub fn server(&self) -> Option<&Node> {
        self.server.as_ref()
    }

    pub fn node_count(&self) -> usize {
        self.boats.len() + self.gateways.len() + usize::from(self.server.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
