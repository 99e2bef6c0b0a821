//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where node records cross their boundary.

use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid node {id}: {reason}")]
    InvalidNode { id: NodeId, reason: String },

    #[error("unknown node type {0:?}: expected \"boat\", \"gateway\", or \"server\"")]
    UnknownKind(String),

    #[error("non-finite timestamp {0}")]
    InvalidTime(f64),
}

/// Shorthand result type for `lc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
