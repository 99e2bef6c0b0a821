use lc_connectivity::ConnectivityError;
use lc_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay configuration error: {0}")]
    Config(String),

    #[error("frame at {time}: {source}")]
    Frame {
        time:   SimTime,
        #[source]
        source: ConnectivityError,
    },

    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),
}

pub type ReplayResult<T> = Result<T, ReplayError>;
