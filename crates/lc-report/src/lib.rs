//! `lc-report` — turn replayed frames into files a plotting or analysis
//! step can consume.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                       |
//! |-----------|---------|-----------------------------------------------------|
//! | *(none)*  | CSV     | `coverage_timeline.csv`, `links.csv`                |
//! | `sqlite`  | SQLite  | `coverage.db`                                       |
//! | `parquet` | Parquet | `coverage_timeline.parquet`, `links.parquet`        |
//!
//! All backends implement [`ReportWriter`] and are driven by
//! [`ReportObserver`], which implements `lc_replay::ReplayObserver`.
//!
//! Besides per-frame output the crate carries two one-shot tables:
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`compare`] | Coverage of several architectures at one instant          |
//! | [`results`] | Relay metrics read from the simulator's result summaries  |
//! | [`trail`]   | `GatewayTrail`, the last few positions of each gateway    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lc_report::{CsvReportWriter, ReportObserver};
//!
//! let writer = CsvReportWriter::new(Path::new("./report"))?;
//! let mut obs = ReportObserver::new(writer);
//! replay.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("report error: {e}");
//! }
//! ```

pub mod compare;
pub mod csv;
pub mod error;
pub mod observer;
pub mod results;
pub mod row;
pub mod trail;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use compare::{Architecture, ComparisonRow, common_time, compare_architectures, write_comparison_csv};
pub use csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use observer::ReportObserver;
pub use results::{RelayMetrics, RunResult, load_run_results, load_run_results_reader, write_relay_table_csv};
pub use row::{CoverageRow, LinkKind, LinkRow, link_rows};
pub use trail::{DEFAULT_TRAIL_LEN, GatewayTrail};
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReportWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetReportWriter;
