//! lc-coverage — boat connectivity reports from LoRaWAN maritime traces.
//!
//! ```text
//! lc-coverage replay --trace positions_mobile.csv --max-frames 60
//! lc-coverage compare --fixed positions_fixed.csv --mobile positions_mobile.csv --time 300
//! lc-coverage relay-table --result "mobile 3gw=resultados_movil_3gw.csv" --result ...
//! ```
//!
//! Verbosity follows `RUST_LOG` (default `info`).

mod options;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;

use lc_connectivity::RangeConfig;
use lc_replay::{FrameView, ReplayBuilder, ReplayObserver, ReplaySettings};
use lc_report::{
    Architecture, CoverageRow, CsvReportWriter, GatewayTrail, RelayMetrics, ReportObserver, ReportWriter,
    compare_architectures, load_run_results, write_comparison_csv, write_relay_table_csv,
};
use lc_trace::{Trace, load_trace_csv};

use options::{Backend, Cli, Command, CompareArgs, RelayTableArgs, ReplayArgs};

// ── Frame table collector ─────────────────────────────────────────────────────

/// Keeps every frame's coverage row for the printed table and summary.json.
#[derive(Default)]
struct FrameTable {
    rows: Vec<CoverageRow>,
}

impl ReplayObserver for FrameTable {
    fn on_replay_start(&mut self, frame_count: usize) {
        self.rows.reserve(frame_count);
    }

    fn on_frame(&mut self, frame: &FrameView<'_>) {
        self.rows.push(CoverageRow::from_report(frame.snapshot.time().secs(), frame.report));
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_settings(path: Option<&Path>) -> Result<ReplaySettings> {
    let Some(path) = path else {
        return Ok(ReplaySettings::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let settings = toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    log::info!("loaded settings from {}", path.display());
    Ok(settings)
}

fn load_trace(path: &Path) -> Result<Trace> {
    load_trace_csv(path).with_context(|| format!("loading trace {}", path.display()))
}

fn open_writer(backend: Backend, dir: &Path) -> Result<Box<dyn ReportWriter>> {
    match backend {
        Backend::Csv => Ok(Box::new(CsvReportWriter::new(dir)?)),

        #[cfg(feature = "sqlite")]
        Backend::Sqlite => Ok(Box::new(lc_report::SqliteReportWriter::new(dir)?)),
        #[cfg(not(feature = "sqlite"))]
        Backend::Sqlite => bail!("built without the `sqlite` feature"),

        #[cfg(feature = "parquet")]
        Backend::Parquet => Ok(Box::new(lc_report::ParquetReportWriter::new(dir)?)),
        #[cfg(not(feature = "parquet"))]
        Backend::Parquet => bail!("built without the `parquet` feature"),
    }
}

fn ranges_json(r: &RangeConfig) -> serde_json::Value {
    json!({
        "direct_range_m":        r.direct_range_m,
        "relay_search_range_m":  r.relay_search_range_m,
        "relay_gateway_range_m": r.relay_gateway_range_m,
    })
}

// ── replay ────────────────────────────────────────────────────────────────────

fn run_replay(args: ReplayArgs) -> Result<()> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(n) = args.max_frames {
        settings.max_frames = Some(n);
    }
    if args.direct_only {
        settings.ranges = RangeConfig::direct_only(settings.ranges.direct_range_m);
    }

    let trace = load_trace(&args.trace)?;
    println!(
        "Trace: {} snapshots, {} node records  ({})",
        trace.len(),
        trace.node_count(),
        args.trace.display()
    );

    let replay = ReplayBuilder::from_settings(trace, &settings).build()?;
    let ranges = *replay.ranges();
    println!(
        "Ranges: direct {} m, relay search {} m, relay gateway {} m{}",
        ranges.direct_range_m,
        ranges.relay_search_range_m,
        ranges.relay_gateway_range_m,
        if ranges.relay_enabled() { "" } else { "  (relays disabled)" },
    );
    println!();

    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let writer = open_writer(args.backend, &args.out)?;

    let mut observers = ((ReportObserver::new(writer), GatewayTrail::default()), FrameTable::default());
    let t0 = Instant::now();
    let frames = replay.run(&mut observers)?;
    let elapsed = t0.elapsed();

    let ((mut report_obs, trail), table) = observers;
    if let Some(e) = report_obs.take_error() {
        bail!("writing report to {}: {e}", args.out.display());
    }

    // Frame table.
    println!("{:<10} {:>6} {:>10} {:>7} {:>7} {:>10}", "Time", "Boats", "Connected", "Direct", "Relay", "Coverage");
    println!("{}", "-".repeat(55));
    for row in &table.rows {
        println!(
            "{:<10} {:>6} {:>10} {:>7} {:>7} {:>9.1}%",
            format!("{}s", row.time),
            row.total_boats,
            row.connected,
            row.direct,
            row.relay,
            row.coverage_percent,
        );
    }
    println!();
    println!("Replayed {frames} frames in {:.3} s", elapsed.as_secs_f64());

    // Key frames.
    if !table.rows.is_empty() {
        println!("Key frames:");
    }
    let key_frames: Vec<_> = Trace::key_frames(table.rows.len())
        .into_iter()
        .map(|k| {
            let row = &table.rows[k.index];
            println!("  {:<15} {:>8}s  {:>5.1}%", k.label, row.time, row.coverage_percent);
            json!({ "label": k.label, "index": k.index, "time": row.time, "coverage_percent": row.coverage_percent })
        })
        .collect();

    let coverages: Vec<f64> = table.rows.iter().map(|r| r.coverage_percent).collect();
    let mean_coverage = if coverages.is_empty() {
        0.0
    } else {
        coverages.iter().sum::<f64>() / coverages.len() as f64
    };
    let trails: serde_json::Map<String, serde_json::Value> = trail
        .gateways()
        .filter_map(|gw| {
            let points: Vec<[f64; 2]> = trail.trail(gw)?.iter().map(|p| [p.x, p.y]).collect();
            Some((gw.0.to_string(), json!(points)))
        })
        .collect();

    let summary = json!({
        "trace":                 args.trace.display().to_string(),
        "frames":                frames,
        "ranges":                ranges_json(&ranges),
        "mean_coverage_percent": mean_coverage,
        "min_coverage_percent":  coverages.iter().copied().reduce(f64::min),
        "max_coverage_percent":  coverages.iter().copied().reduce(f64::max),
        "key_frames":            key_frames,
        "gateway_trails":        trails,
    });
    let summary_path = args.out.join("summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("writing {}", summary_path.display()))?;
    println!();
    println!("Reports written to {}", args.out.display());
    Ok(())
}

// ── compare ───────────────────────────────────────────────────────────────────

fn run_compare(args: CompareArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let fixed = load_trace(&args.fixed)?;
    let mobile = load_trace(&args.mobile)?;

    let rows = compare_architectures(
        &[
            Architecture {
                label:  "fixed",
                trace:  &fixed,
                ranges: RangeConfig::direct_only(settings.ranges.direct_range_m),
            },
            Architecture { label: "mobile", trace: &mobile, ranges: settings.ranges },
        ],
        args.time,
    )?;

    println!("Comparison at t ≈ {} s", args.time);
    println!("{:<10} {:>8} {:>9} {:>6} {:>10} {:>6} {:>10}", "Arch", "Time", "Gateways", "Boats", "Connected", "Relay", "Coverage");
    println!("{}", "-".repeat(65));
    for row in &rows {
        println!(
            "{:<10} {:>7}s {:>9} {:>6} {:>10} {:>6} {:>9.1}%",
            row.label, row.time, row.gateways, row.boats, row.connected, row.relay, row.coverage_percent,
        );
    }

    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let path = args.out.join("comparison.csv");
    write_comparison_csv(&path, &rows)?;
    println!();
    println!("Table written to {}", path.display());
    Ok(())
}

// ── relay-table ───────────────────────────────────────────────────────────────

fn run_relay_table(args: RelayTableArgs) -> Result<()> {
    let results = args
        .results
        .iter()
        .map(|(label, path)| {
            load_run_results(label, path).with_context(|| format!("loading results {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{:<24} {:>8} {:>5} {:>10}", "Architecture", "PDR", "P2P", "P2P msgs");
    println!("{}", "-".repeat(50));
    for r in &results {
        println!(
            "{:<24} {:>7.2}% {:>5} {:>10}",
            r.label,
            r.pdr,
            if r.has_p2p_traffic() { "yes" } else { "no" },
            r.total_p2p_packets,
        );
    }
    println!();

    println!("{:<24} {:>10} {:>8} {:>8} {:>9} {:>11}", "Architecture", "P2P msgs", "Relayed", "Failed", "Success", "Efficiency");
    println!("{}", "-".repeat(75));
    for m in results.iter().filter(|r| r.has_p2p_traffic()).map(RelayMetrics::from_result) {
        println!(
            "{:<24} {:>10} {:>8} {:>8} {:>8.2}% {:>10.2}%",
            m.label, m.total_p2p_packets, m.successful_relays, m.failed_relays, m.success_rate_pct, m.p2p_efficiency_pct,
        );
    }

    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let path = args.out.join("relay_metrics.csv");
    let written = write_relay_table_csv(&path, &results)?;
    println!();
    if written == 0 {
        println!("No run carried P2P traffic; {} has a header only", path.display());
    } else {
        println!("Relay table ({written} rows) written to {}", path.display());
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Replay(args)     => run_replay(args),
        Command::Compare(args)    => run_compare(args),
        Command::RelayTable(args) => run_relay_table(args),
    }
}
