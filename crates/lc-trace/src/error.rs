use lc_core::{CoreError, NodeId, SimTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace parse error: {0}")]
    Parse(String),

    #[error("record {record}: {source}")]
    InvalidRecord {
        record: u64,
        #[source]
        source: CoreError,
    },

    #[error("snapshot at {time} has more than one server ({first} and {second})")]
    DuplicateServer {
        time:   SimTime,
        first:  NodeId,
        second: NodeId,
    },

    #[error("node {id} stamped {got} pushed into snapshot at {expected}")]
    TimeMismatch {
        id:       NodeId,
        expected: SimTime,
        got:      SimTime,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
