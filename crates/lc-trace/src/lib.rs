//! `lc-trace` — node position traces, snapshots, and CSV loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`snapshot`] | `Snapshot` (all nodes sharing one timestamp)          |
//! | [`trace`]    | `Trace` (time-ordered snapshots), `KeyFrame`          |
//! | [`loader`]   | `load_trace_csv`, `load_trace_reader`                 |
//! | [`error`]    | `TraceError`, `TraceResult<T>`                        |
//!
//! A trace is what the simulator's position logger writes: one row per node
//! per logging interval.  Rows are grouped by their `time` column into
//! snapshots; each snapshot is what the connectivity evaluator consumes.

pub mod error;
pub mod loader;
pub mod snapshot;
pub mod trace;


pub use error::{TraceError, TraceResult};
pub use loader::{load_trace_csv, load_trace_reader};
pub use snapshot::Snapshot;
pub use trace::{KeyFrame, Trace};
