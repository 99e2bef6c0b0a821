//! CSV position-trace loader.
//!
//! # CSV format
//!
//! One row per node per logging interval.  Columns are matched by header
//! name, so order does not matter and unknown columns are ignored.  The
//! simulator writes:
//!
//! ```csv
//! time,node_id,x,y,type
//! 0,0,5230.4,8120.9,boat
//! 0,1,14002.1,3310.0,boat
//! 0,50,2000,0,gateway
//! 0,53,12500,-500,server
//! ```
//!
//! | Column    | Required | Meaning                                         |
//! |-----------|----------|-------------------------------------------------|
//! | `time`    | yes      | simulated seconds (float)                       |
//! | `type`    | yes      | `boat`, `gateway`, or `server`                  |
//! | `x`, `y`  | yes      | metres on the local grid                        |
//! | `node_id` | no       | simulator node number; defaults to the row's index within its timestamp |
//!
//! Any invalid row (unknown type, non-finite time or coordinate) aborts the
//! whole load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lc_core::{Node, NodeId, NodeKind, Position, SimTime};

use crate::{Trace, TraceError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PositionRecord {
    time:    f64,
    #[serde(default)]
    node_id: Option<u32>,
    #[serde(rename = "type")]
    kind:    String,
    x:       f64,
    y:       f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a position trace from a CSV file.
pub fn load_trace_csv(path: &Path) -> Result<Trace, TraceError> {
    let file = std::fs::File::open(path)
        .map_err(TraceError::Io)?;
    let trace = load_trace_reader(file)?;
    log::info!(
        "loaded {} records ({} snapshots) from {}",
        trace.node_count(),
        trace.len(),
        path.display()
    );
    Ok(trace)
}

/// Like [`load_trace_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading a trace piped on
/// stdin.
pub fn load_trace_reader<R: Read>(reader: R) -> Result<Trace, TraceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut trace = Trace::new();

    for (i, result) in csv_reader.deserialize::<PositionRecord>().enumerate() {
        let record = i as u64 + 1;
        let row = result.map_err(|e| TraceError::Parse(e.to_string()))?;
        let node = row_to_node(&trace, row)
            .map_err(|source| TraceError::InvalidRecord { record, source })?;
        trace.push(node)?;
    }

    log::debug!("parsed {} snapshots", trace.len());
    Ok(trace)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn row_to_node(trace: &Trace, row: PositionRecord) -> Result<Node, lc_core::CoreError> {
    let time = SimTime::from_secs(row.time)?;
    let kind: NodeKind = row.kind.parse()?;
    let id = row
        .node_id
        .map(NodeId)
        .unwrap_or_else(|| trace.next_implicit_id(time));
    Node::try_new(id, kind, Position::new(row.x, row.y), time)
}
