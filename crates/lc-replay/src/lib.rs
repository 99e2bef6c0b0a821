//! `lc-replay` — run a position trace through the connectivity evaluator.
//!
//! # Replay loop
//!
//! ```text
//! observer.on_replay_start(frame_count)
//! for snapshot in trace (ascending time, at most max_frames):
//!   report = evaluate(snapshot.boats, snapshot.gateways, ranges)
//!   observer.on_frame(FrameView { index, snapshot, report })
//! observer.on_replay_end(frame_count)
//! ```
//!
//! Frames are independent: nothing carries over from one evaluation to the
//! next.  Anything that needs history (gateway trails, running averages)
//! keeps it in its own observer.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates frames on Rayon's thread pool.               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lc_connectivity::RangeConfig;
//! use lc_replay::{NoopObserver, ReplayBuilder};
//!
//! let trace = lc_trace::load_trace_csv(path)?;
//! let replay = ReplayBuilder::new(trace, RangeConfig::default())
//!     .max_frames(60)
//!     .build()?;
//! replay.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod replay;
pub mod settings;


pub use builder::ReplayBuilder;
pub use error::{ReplayError, ReplayResult};
pub use observer::{FrameView, NoopObserver, ReplayObserver};
pub use replay::{FrameResult, Replay, evaluate_snapshot};
pub use settings::ReplaySettings;
