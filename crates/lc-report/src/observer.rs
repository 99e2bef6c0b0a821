//! `ReportObserver<W>` — bridges `ReplayObserver` to a `ReportWriter`.

use lc_replay::{FrameView, ReplayObserver};

use crate::row::{CoverageRow, link_rows};
use crate::writer::ReportWriter;
use crate::{ReportError, ReportResult};

/// A [`ReplayObserver`] that writes each frame's coverage totals and
/// per-boat links to any [`ReportWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After `replay.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    frames:     usize,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0, last_error: None }
    }

    /// Frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Take the stored write error (if any) after `replay.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("report write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> ReplayObserver for ReportObserver<W> {
    fn on_frame(&mut self, frame: &FrameView<'_>) {
        let time = frame.snapshot.time().secs();

        let result = self.writer.write_coverage(&CoverageRow::from_report(time, frame.report));
        self.store_err(result);

        let rows = link_rows(frame.snapshot, frame.report);
        if !rows.is_empty() {
            let result = self.writer.write_links(&rows);
            self.store_err(result);
        }
        self.frames += 1;
    }

    fn on_replay_end(&mut self, _frames: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
