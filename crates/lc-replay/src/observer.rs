//! Replay observer trait for progress reporting and data collection.

use lc_connectivity::ConnectivityReport;
use lc_trace::Snapshot;

/// One evaluated frame, as handed to observers.
#[derive(Copy, Clone, Debug)]
pub struct FrameView<'a> {
    /// Position of this frame within the replay (0-based).
    pub index:    usize,
    pub snapshot: &'a Snapshot,
    pub report:   &'a ConnectivityReport,
}

/// Callbacks invoked by [`Replay::run`][crate::Replay::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — coverage printer
///
/// ```rust,ignore
/// struct CoveragePrinter;
///
/// impl ReplayObserver for CoveragePrinter {
///     fn on_frame(&mut self, frame: &FrameView<'_>) {
///         println!("{}: {:.0}%", frame.snapshot.time(), frame.report.summary.coverage_percentage());
///     }
/// }
/// ```
pub trait ReplayObserver {
    /// Called once before the first frame.
    fn on_replay_start(&mut self, _frame_count: usize) {}

    /// Called for every frame, in ascending time order.
    fn on_frame(&mut self, _frame: &FrameView<'_>) {}

    /// Called once after the last frame.
    fn on_replay_end(&mut self, _frames: usize) {}
}

/// A [`ReplayObserver`] that does nothing.
pub struct NoopObserver;

impl ReplayObserver for NoopObserver {}

/// Observers compose: a tuple forwards every hook to both members in order.
impl<A: ReplayObserver, B: ReplayObserver> ReplayObserver for (A, B) {
    fn on_replay_start(&mut self, frame_count: usize) {
        self.0.on_replay_start(frame_count);
        self.1.on_replay_start(frame_count);
    }

    fn on_frame(&mut self, frame: &FrameView<'_>) {
        self.0.on_frame(frame);
        self.1.on_frame(frame);
    }

    fn on_replay_end(&mut self, frames: usize) {
        self.0.on_replay_end(frames);
        self.1.on_replay_end(frames);
    }
}
