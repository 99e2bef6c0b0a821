//! The `ReportWriter` trait implemented by all backend writers.

use crate::{CoverageRow, LinkRow, ReportResult};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Errors surface to the observer, which stores the first one for
/// [`ReportObserver::take_error`][crate::ReportObserver::take_error].
pub trait ReportWriter {
    /// Write the coverage totals of one frame.
    fn write_coverage(&mut self, row: &CoverageRow) -> ReportResult<()>;

    /// Write the per-boat links of one frame.
    fn write_links(&mut self, rows: &[LinkRow]) -> ReportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}

/// Lets the binary pick a backend at run time.
impl<W: ReportWriter + ?Sized> ReportWriter for Box<W> {
    fn write_coverage(&mut self, row: &CoverageRow) -> ReportResult<()> {
        (**self).write_coverage(row)
    }

    fn write_links(&mut self, rows: &[LinkRow]) -> ReportResult<()> {
        (**self).write_links(rows)
    }

    fn finish(&mut self) -> ReportResult<()> {
        (**self).finish()
    }
}
