use lc_core::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectivityError {
    #[error("invalid node {id}: {reason}")]
    InvalidNode { id: NodeId, reason: String },

    #[error("invalid range configuration: {0}")]
    InvalidConfig(String),
}

pub type ConnectivityResult<T> = Result<T, ConnectivityError>;
