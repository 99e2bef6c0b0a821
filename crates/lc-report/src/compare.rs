//! Side-by-side coverage of several network architectures at one instant.
//!
//! Each architecture is a trace plus the ranges it is evaluated with (for
//! instance fixed gateways with direct links only against mobile gateways
//! with boat relays).  Every architecture is evaluated at one common
//! instant: the latest of the traces' frames closest to the requested time.
//! A trace with no frame at that instant falls back to its eleventh frame,
//! or its first when it has ten or fewer.

use std::path::Path;

use lc_connectivity::RangeConfig;
use lc_replay::evaluate_snapshot;
use lc_core::SimTime;
use lc_trace::{Snapshot, Trace};

use crate::{ReportError, ReportResult};

/// One architecture to compare.
#[derive(Clone, Copy, Debug)]
pub struct Architecture<'a> {
    pub label:  &'a str,
    pub trace:  &'a Trace,
    pub ranges: RangeConfig,
}

/// Coverage of one architecture at the compared instant.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub label:            String,
    /// Time of the frame actually used, in seconds.
    pub time:             f64,
    pub gateways:         usize,
    pub boats:            usize,
    pub connected:        usize,
    pub relay:            usize,
    pub coverage_percent: f64,
}

/// Frame index used when a trace has no snapshot at the common instant.
const FALLBACK_FRAME: usize = 10;

/// The instant all architectures are compared at: the latest of each
/// trace's frame closest to `target_secs`.
pub fn common_time(architectures: &[Architecture<'_>], target_secs: f64) -> ReportResult<Option<SimTime>> {
    let mut common: Option<SimTime> = None;
    for arch in architectures {
        let closest = arch
            .trace
            .closest_time(target_secs)
            .ok_or_else(|| ReportError::EmptyTrace(arch.label.to_owned()))?;
        log::debug!("{}: closest frame to {target_secs} s is {closest}", arch.label);
        common = Some(common.map_or(closest, |t| t.max(closest)));
    }
    Ok(common)
}

/// Evaluate every architecture at the common instant near `target_secs`
/// (see [`common_time`]).
///
/// Rows keep the order of `architectures`.  An architecture whose trace has
/// no snapshots is an error.
pub fn compare_architectures(
    architectures: &[Architecture<'_>],
    target_secs: f64,
) -> ReportResult<Vec<ComparisonRow>> {
    let Some(time) = common_time(architectures, target_secs)? else {
        return Ok(Vec::new());
    };
    log::info!("comparing {} architectures at {time}", architectures.len());

    architectures
        .iter()
        .map(|arch| {
            let snapshot = snapshot_for(arch, time)?;
            let report = evaluate_snapshot(snapshot, &arch.ranges)?;
            log::info!(
                "{}: frame {} ({} gateways), {}/{} boats connected",
                arch.label,
                snapshot.time(),
                snapshot.gateways().len(),
                report.summary.connected_count,
                report.summary.total_count,
            );
            Ok(ComparisonRow {
                label:            arch.label.to_owned(),
                time:             snapshot.time().secs(),
                gateways:         snapshot.gateways().len(),
                boats:            report.summary.total_count,
                connected:        report.summary.connected_count,
                relay:            report.summary.relay_count,
                coverage_percent: report.summary.coverage_percentage(),
            })
        })
        .collect()
}

fn snapshot_for<'a>(arch: &Architecture<'a>, time: SimTime) -> ReportResult<&'a Snapshot> {
    if let Some(snapshot) = arch.trace.snapshot_at(time) {
        return Ok(snapshot);
    }
    let fallback = arch
        .trace
        .snapshots()
        .nth(FALLBACK_FRAME)
        .or_else(|| arch.trace.snapshots().next())
        .ok_or_else(|| ReportError::EmptyTrace(arch.label.to_owned()))?;
    log::warn!("{}: no frame at {time}, using {} instead", arch.label, fallback.time());
    Ok(fallback)
}

/// Write comparison rows to `path` as CSV.
pub fn write_comparison_csv(path: &Path, rows: &[ComparisonRow]) -> ReportResult<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["architecture", "time", "gateways", "boats", "connected", "relay", "coverage_percent"])?;
    for row in rows {
        w.write_record(&[
            row.label.clone(),
            row.time.to_string(),
            row.gateways.to_string(),
            row.boats.to_string(),
            row.connected.to_string(),
            row.relay.to_string(),
            format!("{:.1}", row.coverage_percent),
        ])?;
    }
    w.flush()?;
    Ok(())
}
