//! `lc-core` — foundational types for the `lora_coverage` toolkit.
//!
//! This crate is a dependency of every other `lc-*` crate.  It has no `lc-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                     |
//! |------------|----------------------------------------------|
//! | [`ids`]    | `NodeId`                                     |
//! | [`geo`]    | `Position` (planar metres), euclidean distance |
//! | [`node`]   | `NodeKind`, `Node`                           |
//! | [`time`]   | `SimTime` (totally ordered seconds)          |
//! | [`error`]  | `CoreError`, `CoreResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod node;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Position;
pub use ids::NodeId;
pub use node::{Node, NodeKind};
pub use time::SimTime;
