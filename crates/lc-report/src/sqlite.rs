//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `coverage.db` file in the configured output directory
//! with two tables: `coverage_timeline` and `links`.  Missing values are
//! stored as NULL.  Tables left by an earlier run are replaced.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{CoverageRow, LinkRow, ReportResult};

/// Writes report output to an SQLite database.
pub struct SqliteReportWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReportWriter {
    /// Open (or create) `coverage.db` in `dir` and recreate the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let conn = Connection::open(dir.join("coverage.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS coverage_timeline;
             DROP TABLE IF EXISTS links;
             CREATE TABLE coverage_timeline (
                 time             REAL PRIMARY KEY,
                 total_boats      INTEGER NOT NULL,
                 connected        INTEGER NOT NULL,
                 direct           INTEGER NOT NULL,
                 relay            INTEGER NOT NULL,
                 coverage_percent REAL NOT NULL,
                 avg_distance_m   REAL,
                 min_distance_m   REAL,
                 max_distance_m   REAL
             );
             CREATE TABLE links (
                 time       REAL NOT NULL,
                 boat_id    INTEGER NOT NULL,
                 kind       TEXT NOT NULL,
                 relay_id   INTEGER,
                 gateway_id INTEGER,
                 boat_x     REAL NOT NULL,
                 boat_y     REAL NOT NULL,
                 relay_x    REAL,
                 relay_y    REAL,
                 gateway_x  REAL,
                 gateway_y  REAL
             );",
        )?;

        log::debug!("writing SQLite report to {}", dir.join("coverage.db").display());
        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReportWriter {
    fn write_coverage(&mut self, row: &CoverageRow) -> ReportResult<()> {
        self.conn.execute(
            "INSERT INTO coverage_timeline \
             (time, total_boats, connected, direct, relay, coverage_percent, \
              avg_distance_m, min_distance_m, max_distance_m) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.time,
                row.total_boats,
                row.connected,
                row.direct,
                row.relay,
                row.coverage_percent,
                row.avg_distance_m,
                row.min_distance_m,
                row.max_distance_m,
            ],
        )?;
        Ok(())
    }

    fn write_links(&mut self, rows: &[LinkRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO links \
                 (time, boat_id, kind, relay_id, gateway_id, boat_x, boat_y, \
                  relay_x, relay_y, gateway_x, gateway_y) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.time,
                    row.boat_id,
                    row.kind.as_str(),
                    row.relay_id,
                    row.gateway_id,
                    row.boat_x,
                    row.boat_y,
                    row.relay_x,
                    row.relay_y,
                    row.gateway_x,
                    row.gateway_y,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
