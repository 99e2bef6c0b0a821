//! `lc-connectivity` — which boats can reach a gateway, and how.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`config`]    | `RangeConfig` (direct, relay-search, relay-gateway ranges) |
//! | [`evaluator`] | `evaluate`, `ConnectivityEvaluator`, `ConnectivityState`, `ConnectivityReport` |
//! | [`summary`]   | `CoverageSummary`, `DistanceStats`                        |
//! | [`error`]     | `ConnectivityError`, `ConnectivityResult<T>`              |
//!
//! # Decision procedure (summary)
//!
//! For each boat, in input order:
//!
//! ```text
//! (gw, d) = nearest gateway          (ties → first in gateway order)
//! d ≤ direct                         → DirectLink(gw)
//! direct < d ≤ relay_gateway         → first other boat r with
//!                                        |boat − r| <  relay_search  and
//!                                        |r − gw|   ≤ direct
//!                                      → RelayLink(r, gw)
//! otherwise                          → Unconnected
//! ```
//!
//! Evaluation is a pure function of its inputs: no I/O, no logging, no
//! shared state.  It is safe to call from several threads at once.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod summary;


pub use config::RangeConfig;
pub use error::{ConnectivityError, ConnectivityResult};
pub use evaluator::{BoatLink, ConnectivityEvaluator, ConnectivityReport, ConnectivityState, evaluate};
pub use summary::{CoverageSummary, DistanceStats};
