//! Relay metrics from the simulator's per-run result summaries.
//!
//! A result file is a CSV whose first data row holds the run totals.  Only
//! `PDR` is required; runs without the peer-to-peer protocol lack the relay
//! columns, which then read as zero.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ReportError, ReportResult};

#[derive(Deserialize)]
struct ResultRecord {
    #[serde(rename = "PDR")]
    pdr: f64,
    #[serde(rename = "TotalP2PPackets", default)]
    total_p2p_packets: u64,
    #[serde(rename = "SuccessfulRelays", default)]
    successful_relays: u64,
    #[serde(rename = "FailedRelays", default)]
    failed_relays: u64,
    #[serde(rename = "P2PEfficiency", default)]
    p2p_efficiency: f64,
}

/// Totals of one simulator run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// Architecture label chosen by the caller.
    pub label:             String,
    /// Packet delivery ratio, percent.
    pub pdr:               f64,
    pub total_p2p_packets: u64,
    pub successful_relays: u64,
    pub failed_relays:     u64,
    /// Percent, as reported by the simulator.
    pub p2p_efficiency:    f64,
}

impl RunResult {
    pub fn has_p2p_traffic(&self) -> bool {
        self.total_p2p_packets > 0
    }
}

/// Load the run totals in `path` under `label`.
pub fn load_run_results(label: &str, path: &Path) -> ReportResult<RunResult> {
    log::info!("loading run results for {label} from {}", path.display());
    let file = File::open(path)?;
    load_run_results_reader(label, file)
}

/// Load run totals from any reader.
pub fn load_run_results_reader<R: Read>(label: &str, reader: R) -> ReportResult<RunResult> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let record: ResultRecord = match rdr.deserialize::<ResultRecord>().next() {
        Some(record) => record?,
        None => return Err(ReportError::Parse(format!("results for {label} have no data row"))),
    };
    Ok(RunResult {
        label:             label.to_owned(),
        pdr:               record.pdr,
        total_p2p_packets: record.total_p2p_packets,
        successful_relays: record.successful_relays,
        failed_relays:     record.failed_relays,
        p2p_efficiency:    record.p2p_efficiency,
    })
}

/// Relay statistics derived from one [`RunResult`].
#[derive(Clone, Debug, PartialEq)]
pub struct RelayMetrics {
    pub label:              String,
    pub total_p2p_packets:  u64,
    pub successful_relays:  u64,
    pub failed_relays:      u64,
    /// `successful / total × 100`; 0 when there was no P2P traffic.
    pub success_rate_pct:   f64,
    pub p2p_efficiency_pct: f64,
}

impl RelayMetrics {
    pub fn from_result(result: &RunResult) -> Self {
        let success_rate_pct = if result.total_p2p_packets == 0 {
            0.0
        } else {
            result.successful_relays as f64 / result.total_p2p_packets as f64 * 100.0
        };
        Self {
            label:              result.label.clone(),
            total_p2p_packets:  result.total_p2p_packets,
            successful_relays:  result.successful_relays,
            failed_relays:      result.failed_relays,
            success_rate_pct,
            p2p_efficiency_pct: result.p2p_efficiency,
        }
    }
}

/// Write the relay table for the runs that carried P2P traffic.  Returns the
/// number of rows written; runs without traffic are skipped.
pub fn write_relay_table_csv(path: &Path, results: &[RunResult]) -> ReportResult<usize> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record([
        "architecture",
        "total_p2p_packets",
        "successful_relays",
        "failed_relays",
        "success_rate_pct",
        "p2p_efficiency_pct",
    ])?;

    let mut written = 0;
    for m in results.iter().filter(|r| r.has_p2p_traffic()).map(RelayMetrics::from_result) {
        w.write_record(&[
            m.label,
            m.total_p2p_packets.to_string(),
            m.successful_relays.to_string(),
            m.failed_relays.to_string(),
            format!("{:.2}", m.success_rate_pct),
            format!("{:.2}", m.p2p_efficiency_pct),
        ])?;
        written += 1;
    }
    w.flush()?;
    Ok(written)
}
