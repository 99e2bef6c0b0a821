//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `coverage_timeline.csv`
//! - `links.csv`
//!
//! Missing values (no relay hop, no distance statistics) are empty cells.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{CoverageRow, LinkRow, ReportResult};

pub const COVERAGE_HEADER: [&str; 9] = [
    "time",
    "total_boats",
    "connected",
    "direct",
    "relay",
    "coverage_percent",
    "avg_distance_m",
    "min_distance_m",
    "max_distance_m",
];

pub const LINK_HEADER: [&str; 11] = [
    "time",
    "boat_id",
    "kind",
    "relay_id",
    "gateway_id",
    "boat_x",
    "boat_y",
    "relay_x",
    "relay_y",
    "gateway_x",
    "gateway_y",
];

/// Writes report output to two CSV files.
pub struct CsvReportWriter {
    coverage: Writer<File>,
    links:    Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut coverage = Writer::from_path(dir.join("coverage_timeline.csv"))?;
        coverage.write_record(COVERAGE_HEADER)?;

        let mut links = Writer::from_path(dir.join("links.csv"))?;
        links.write_record(LINK_HEADER)?;

        log::debug!("writing CSV report to {}", dir.display());
        Ok(Self {
            coverage,
            links,
            finished: false,
        })
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ReportWriter for CsvReportWriter {
    fn write_coverage(&mut self, row: &CoverageRow) -> ReportResult<()> {
        self.coverage.write_record(&[
            row.time.to_string(),
            row.total_boats.to_string(),
            row.connected.to_string(),
            row.direct.to_string(),
            row.relay.to_string(),
            format!("{:.2}", row.coverage_percent),
            cell(row.avg_distance_m.map(|d| format!("{d:.1}"))),
            cell(row.min_distance_m.map(|d| format!("{d:.1}"))),
            cell(row.max_distance_m.map(|d| format!("{d:.1}"))),
        ])?;
        Ok(())
    }

    fn write_links(&mut self, rows: &[LinkRow]) -> ReportResult<()> {
        for row in rows {
            self.links.write_record(&[
                row.time.to_string(),
                row.boat_id.to_string(),
                row.kind.to_string(),
                cell(row.relay_id),
                cell(row.gateway_id),
                row.boat_x.to_string(),
                row.boat_y.to_string(),
                cell(row.relay_x),
                cell(row.relay_y),
                cell(row.gateway_x),
                cell(row.gateway_y),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.coverage.flush()?;
        self.links.flush()?;
        Ok(())
    }
}
