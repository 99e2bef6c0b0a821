//! Integration tests for lc-report.

use lc_connectivity::RangeConfig;
use lc_core::{Node, NodeId, NodeKind, Position, SimTime};
use lc_trace::Trace;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn node(id: u32, kind: NodeKind, x: f64, y: f64, time: f64) -> Node {
    Node::new(NodeId(id), kind, Position::new(x, y), SimTime::from_secs(time).unwrap())
}

/// Two frames, 10 s apart.  Gateway 100 sits at the origin; boat 0 is direct,
/// boat 1 relays through boat 0, boat 2 is out of reach.
fn relay_trace() -> Trace {
    let mut nodes = Vec::new();
    for t in [0.0, 10.0] {
        nodes.push(node(0, NodeKind::Boat, 14_000.0, 0.0, t));
        nodes.push(node(1, NodeKind::Boat, 18_000.0, 0.0, t));
        nodes.push(node(2, NodeKind::Boat, 0.0, 30_000.0, t));
        nodes.push(node(100, NodeKind::Gateway, 0.0, 0.0, t));
    }
    Trace::from_nodes(nodes).unwrap()
}

fn tmp() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::row::{CoverageRow, LinkKind, link_rows};
    use lc_replay::evaluate_snapshot;

    #[test]
    fn coverage_row_counts() {
        let trace = relay_trace();
        let snap = trace.snapshots().next().unwrap();
        let report = evaluate_snapshot(snap, &RangeConfig::default()).unwrap();
        let row = CoverageRow::from_report(0.0, &report);

        assert_eq!(row.total_boats, 3);
        assert_eq!(row.connected, 2);
        assert_eq!(row.direct, 1);
        assert_eq!(row.relay, 1);
        assert!((row.coverage_percent - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(row.min_distance_m, Some(14_000.0));
        assert_eq!(row.max_distance_m, Some(30_000.0));
    }

    #[test]
    fn coverage_row_without_gateways_has_no_distances() {
        let trace = Trace::from_nodes([node(0, NodeKind::Boat, 1.0, 1.0, 0.0)]).unwrap();
        let snap = trace.snapshots().next().unwrap();
        let report = evaluate_snapshot(snap, &RangeConfig::default()).unwrap();
        let row = CoverageRow::from_report(0.0, &report);
        assert_eq!(row.connected, 0);
        assert_eq!(row.avg_distance_m, None);
    }

    #[test]
    fn link_rows_carry_segment_endpoints() {
        let trace = relay_trace();
        let snap = trace.snapshots().next().unwrap();
        let report = evaluate_snapshot(snap, &RangeConfig::default()).unwrap();
        let rows = link_rows(snap, &report);
        assert_eq!(rows.len(), 3);

        let direct = &rows[0];
        assert_eq!(direct.kind, LinkKind::Direct);
        assert_eq!(direct.gateway_id, Some(100));
        assert_eq!((direct.gateway_x, direct.gateway_y), (Some(0.0), Some(0.0)));
        assert_eq!(direct.relay_id, None);

        let relay = &rows[1];
        assert_eq!(relay.kind, LinkKind::Relay);
        assert_eq!(relay.relay_id, Some(0));
        assert_eq!((relay.relay_x, relay.relay_y), (Some(14_000.0), Some(0.0)));
        assert_eq!((relay.boat_x, relay.boat_y), (18_000.0, 0.0));

        let none = &rows[2];
        assert_eq!(none.kind, LinkKind::None);
        assert_eq!(none.gateway_id, None);
        assert_eq!(none.gateway_x, None);
    }

    #[test]
    fn link_kind_names() {
        assert_eq!(LinkKind::Direct.to_string(), "direct");
        assert_eq!(LinkKind::Relay.as_str(), "relay");
        assert_eq!(LinkKind::None.as_str(), "none");
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::{COVERAGE_HEADER, CsvReportWriter, LINK_HEADER};
    use crate::row::{CoverageRow, LinkKind, LinkRow};
    use crate::writer::ReportWriter;
    use crate::ReportObserver;
    use lc_replay::ReplayBuilder;

    fn coverage_row(time: f64) -> CoverageRow {
        CoverageRow {
            time,
            total_boats:      4,
            connected:        3,
            direct:           2,
            relay:            1,
            coverage_percent: 75.0,
            avg_distance_m:   None,
            min_distance_m:   None,
            max_distance_m:   None,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvReportWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("coverage_timeline.csv").exists());
        assert!(dir.path().join("links.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("coverage_timeline.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, COVERAGE_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("links.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, LINK_HEADER);
    }

    #[test]
    fn missing_values_are_empty_cells() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.write_coverage(&coverage_row(5.0)).unwrap();
        w.write_links(&[LinkRow {
            time:       5.0,
            boat_id:    7,
            kind:       LinkKind::None,
            relay_id:   None,
            gateway_id: None,
            boat_x:     1.5,
            boat_y:     -2.0,
            relay_x:    None,
            relay_y:    None,
            gateway_x:  None,
            gateway_y:  None,
        }])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("coverage_timeline.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][5], "75.00");
        assert_eq!(&rows[0][6], "");

        let mut rdr = csv::Reader::from_path(dir.path().join("links.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], "7");
        assert_eq!(&rows[0][2], "none");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[0][5], "1.5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvReportWriter::new(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn integration_csv() {
        let replay = ReplayBuilder::new(relay_trace(), RangeConfig::default()).build().unwrap();

        let dir = tmp();
        let writer = CsvReportWriter::new(dir.path()).unwrap();
        let mut obs = ReportObserver::new(writer);
        replay.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.frames(), 2);

        let mut rdr = csv::Reader::from_path(dir.path().join("coverage_timeline.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "10");
        assert_eq!(&rows[1][2], "2");

        // 2 frames × 3 boats
        let mut rdr = csv::Reader::from_path(dir.path().join("links.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[1][2], "relay");
    }

    #[test]
    fn boxed_writer_works() {
        let replay = ReplayBuilder::new(relay_trace(), RangeConfig::default()).build().unwrap();
        let dir = tmp();
        let writer: Box<dyn ReportWriter> = Box::new(CsvReportWriter::new(dir.path()).unwrap());
        let mut obs = ReportObserver::new(writer);
        replay.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
    }
}

// ── Observer error handling ───────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::row::{CoverageRow, LinkRow};
    use crate::writer::ReportWriter;
    use crate::{ReportError, ReportObserver, ReportResult};
    use lc_replay::ReplayBuilder;

    /// Fails every coverage write after the first.
    #[derive(Default)]
    struct FlakyWriter {
        coverage: usize,
        links:    usize,
        finished: bool,
    }

    impl ReportWriter for FlakyWriter {
        fn write_coverage(&mut self, _row: &CoverageRow) -> ReportResult<()> {
            self.coverage += 1;
            if self.coverage > 1 {
                return Err(ReportError::Parse(format!("write {}", self.coverage)));
            }
            Ok(())
        }

        fn write_links(&mut self, rows: &[LinkRow]) -> ReportResult<()> {
            self.links += rows.len();
            Ok(())
        }

        fn finish(&mut self) -> ReportResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_replay_continues() {
        let mut nodes = Vec::new();
        for t in [0.0, 1.0, 2.0] {
            nodes.push(node(0, NodeKind::Boat, 0.0, 0.0, t));
        }
        let replay = ReplayBuilder::new(Trace::from_nodes(nodes).unwrap(), RangeConfig::default())
            .build()
            .unwrap();

        let mut obs = ReportObserver::new(FlakyWriter::default());
        replay.run(&mut obs).unwrap();

        match obs.take_error() {
            Some(ReportError::Parse(msg)) => assert_eq!(msg, "write 2"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.coverage, 3);
        assert_eq!(writer.links, 3);
        assert!(writer.finished);
    }
}

// ── Gateway trail ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod trail_tests {
    use super::*;
    use crate::trail::{DEFAULT_TRAIL_LEN, GatewayTrail};
    use lc_replay::ReplayBuilder;

    #[test]
    fn keeps_last_n_positions_oldest_first() {
        let mut trail = GatewayTrail::new(3);
        for i in 0..5 {
            trail.push(NodeId(9), Position::new(i as f64, 0.0));
        }
        let xs: Vec<f64> = trail.trail(NodeId(9)).unwrap().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.latest(NodeId(9)), Some(Position::new(4.0, 0.0)));
    }

    #[test]
    fn default_capacity_is_five() {
        assert_eq!(GatewayTrail::default().capacity(), DEFAULT_TRAIL_LEN);
        assert_eq!(DEFAULT_TRAIL_LEN, 5);
        assert_eq!(GatewayTrail::new(0).capacity(), 1);
    }

    #[test]
    fn replay_feeds_every_gateway() {
        let mut nodes = Vec::new();
        for i in 0..8 {
            let t = i as f64;
            nodes.push(node(100, NodeKind::Gateway, t * 10.0, 0.0, t));
            nodes.push(node(101, NodeKind::Gateway, 0.0, t * 10.0, t));
            nodes.push(node(0, NodeKind::Boat, 0.0, 0.0, t));
        }
        let replay = ReplayBuilder::new(Trace::from_nodes(nodes).unwrap(), RangeConfig::default())
            .build()
            .unwrap();

        let mut trail = GatewayTrail::default();
        replay.run(&mut trail).unwrap();

        assert_eq!(trail.gateways().collect::<Vec<_>>(), vec![NodeId(100), NodeId(101)]);
        let xs: Vec<f64> = trail.trail(NodeId(100)).unwrap().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![30.0, 40.0, 50.0, 60.0, 70.0]);
        assert_eq!(trail.latest(NodeId(101)), Some(Position::new(0.0, 70.0)));
        assert_eq!(trail.trail(NodeId(0)), None);
    }
}

// ── Architecture comparison ───────────────────────────────────────────────────

#[cfg(test)]
mod compare_tests {
    use super::*;
    use crate::compare::{Architecture, common_time, compare_architectures, write_comparison_csv};
    use crate::ReportError;

    #[test]
    fn picks_closest_frame_and_ranges_per_architecture() {
        let fixed = relay_trace();
        let mobile = relay_trace();
        let rows = compare_architectures(
            &[
                Architecture { label: "fixed", trace: &fixed, ranges: RangeConfig::direct_only(15_000.0) },
                Architecture { label: "mobile", trace: &mobile, ranges: RangeConfig::default() },
            ],
            300.0,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "fixed");
        assert_eq!(rows[0].time, 10.0);
        assert_eq!(rows[0].gateways, 1);
        assert_eq!(rows[0].boats, 3);
        assert_eq!(rows[0].connected, 1);
        assert_eq!(rows[0].relay, 0);
        assert_eq!(rows[1].connected, 2);
        assert_eq!(rows[1].relay, 1);
    }

    #[test]
    fn tie_takes_earlier_frame() {
        let trace = relay_trace();
        let rows = compare_architectures(
            &[Architecture { label: "a", trace: &trace, ranges: RangeConfig::default() }],
            5.0,
        )
        .unwrap();
        assert_eq!(rows[0].time, 0.0);
    }

    /// One boat beside one gateway at each of `times`.
    fn trace_at(times: &[f64]) -> Trace {
        let nodes = times.iter().flat_map(|&t| {
            [node(0, NodeKind::Boat, 1_000.0, 0.0, t), node(100, NodeKind::Gateway, 0.0, 0.0, t)]
        });
        Trace::from_nodes(nodes).unwrap()
    }

    #[test]
    fn architectures_share_one_instant() {
        // Closest frames to 300 s: 295 (tie, earlier wins) and 305.
        let fixed = trace_at(&[295.0, 305.0, 320.0]);
        let mobile = trace_at(&[305.0, 320.0]);
        let archs = [
            Architecture { label: "fixed", trace: &fixed, ranges: RangeConfig::direct_only(15_000.0) },
            Architecture { label: "mobile", trace: &mobile, ranges: RangeConfig::default() },
        ];

        assert_eq!(common_time(&archs, 300.0).unwrap(), Some(SimTime::from_secs(305.0).unwrap()));
        let rows = compare_architectures(&archs, 300.0).unwrap();
        assert_eq!(rows[0].time, 305.0);
        assert_eq!(rows[1].time, 305.0);
    }

    #[test]
    fn missing_common_instant_falls_back_to_eleventh_frame() {
        let times: Vec<f64> = (0..12).map(|i| i as f64 * 10.0).collect();
        let fixed = trace_at(&times);
        let mobile = trace_at(&[305.0]);
        let rows = compare_architectures(
            &[
                Architecture { label: "fixed", trace: &fixed, ranges: RangeConfig::default() },
                Architecture { label: "mobile", trace: &mobile, ranges: RangeConfig::default() },
            ],
            300.0,
        )
        .unwrap();
        assert_eq!(rows[0].time, 100.0);
        assert_eq!(rows[1].time, 305.0);
    }

    #[test]
    fn short_trace_falls_back_to_first_frame() {
        let fixed = trace_at(&[290.0, 320.0]);
        let mobile = trace_at(&[305.0, 320.0]);
        let rows = compare_architectures(
            &[
                Architecture { label: "fixed", trace: &fixed, ranges: RangeConfig::default() },
                Architecture { label: "mobile", trace: &mobile, ranges: RangeConfig::default() },
            ],
            300.0,
        )
        .unwrap();
        assert_eq!(rows[0].time, 290.0);
        assert_eq!(rows[1].time, 305.0);
    }

    #[test]
    fn no_architectures_no_rows() {
        assert!(compare_architectures(&[], 300.0).unwrap().is_empty());
    }

    #[test]
    fn empty_trace_errors() {
        let empty = Trace::new();
        let result = compare_architectures(
            &[Architecture { label: "ghost", trace: &empty, ranges: RangeConfig::default() }],
            300.0,
        );
        assert!(matches!(result, Err(ReportError::EmptyTrace(label)) if label == "ghost"));
    }

    #[test]
    fn comparison_csv_written() {
        let trace = relay_trace();
        let rows = compare_architectures(
            &[Architecture { label: "mobile", trace: &trace, ranges: RangeConfig::default() }],
            0.0,
        )
        .unwrap();

        let dir = tmp();
        let path = dir.path().join("comparison.csv");
        write_comparison_csv(&path, &rows).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 1);
        assert_eq!(&read[0][0], "mobile");
        assert_eq!(&read[0][6], "66.7");
    }
}

// ── Run results ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod results_tests {
    use std::io::Cursor;

    use super::*;
    use crate::results::{RelayMetrics, RunResult, load_run_results, load_run_results_reader, write_relay_table_csv};
    use crate::ReportError;

    const P2P_RUN: &str = "\
PDR,TotalP2PPackets,SuccessfulRelays,FailedRelays,P2PEfficiency
99.43,1200,900,300,74.56
";

    const PLAIN_RUN: &str = "\
Nodes,PDR
50,95.0
";

    #[test]
    fn relay_columns_read() {
        let r = load_run_results_reader("mobile+p2p", Cursor::new(P2P_RUN)).unwrap();
        assert_eq!(r.label, "mobile+p2p");
        assert_eq!(r.pdr, 99.43);
        assert_eq!(r.total_p2p_packets, 1200);
        assert_eq!(r.successful_relays, 900);
        assert_eq!(r.failed_relays, 300);
        assert_eq!(r.p2p_efficiency, 74.56);
        assert!(r.has_p2p_traffic());
    }

    #[test]
    fn missing_relay_columns_read_as_zero() {
        let r = load_run_results_reader("fixed", Cursor::new(PLAIN_RUN)).unwrap();
        assert_eq!(r.pdr, 95.0);
        assert_eq!(r.total_p2p_packets, 0);
        assert!(!r.has_p2p_traffic());
    }

    #[test]
    fn header_only_errors() {
        let result = load_run_results_reader("x", Cursor::new("PDR\n"));
        assert!(matches!(result, Err(ReportError::Parse(_))));
    }

    #[test]
    fn missing_pdr_errors() {
        let result = load_run_results_reader("x", Cursor::new("Nodes\n5\n"));
        assert!(matches!(result, Err(ReportError::Csv(_))));
    }

    #[test]
    fn missing_file_errors() {
        let dir = tmp();
        let result = load_run_results("x", &dir.path().join("absent.csv"));
        assert!(matches!(result, Err(ReportError::Io(_))));
    }

    #[test]
    fn success_rate() {
        let r = load_run_results_reader("p2p", Cursor::new(P2P_RUN)).unwrap();
        let m = RelayMetrics::from_result(&r);
        assert!((m.success_rate_pct - 75.0).abs() < 1e-9);
        assert_eq!(m.p2p_efficiency_pct, 74.56);

        let none = RelayMetrics::from_result(&RunResult {
            label:             "none".into(),
            pdr:               90.0,
            total_p2p_packets: 0,
            successful_relays: 0,
            failed_relays:     0,
            p2p_efficiency:    0.0,
        });
        assert_eq!(none.success_rate_pct, 0.0);
    }

    #[test]
    fn relay_table_skips_runs_without_traffic() {
        let results = vec![
            load_run_results_reader("fixed", Cursor::new(PLAIN_RUN)).unwrap(),
            load_run_results_reader("mobile+p2p", Cursor::new(P2P_RUN)).unwrap(),
        ];
        let dir = tmp();
        let path = dir.path().join("relay.csv");
        assert_eq!(write_relay_table_csv(&path, &results).unwrap(), 1);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "mobile+p2p");
        assert_eq!(&rows[0][4], "75.00");
        assert_eq!(&rows[0][5], "74.56");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteReportWriter;
    use crate::ReportObserver;
    use lc_replay::ReplayBuilder;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteReportWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("coverage.db").exists());
    }

    #[test]
    fn sqlite_replay_rows() {
        let replay = ReplayBuilder::new(relay_trace(), RangeConfig::default()).build().unwrap();
        let dir = tmp();
        let mut obs = ReportObserver::new(SqliteReportWriter::new(dir.path()).unwrap());
        replay.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let conn = rusqlite::Connection::open(dir.path().join("coverage.db")).unwrap();
        let frames: i64 = conn
            .query_row("SELECT COUNT(*) FROM coverage_timeline", [], |r| r.get(0))
            .unwrap();
        assert_eq!(frames, 2);

        let relays: i64 = conn
            .query_row("SELECT COUNT(*) FROM links WHERE kind = 'relay'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(relays, 2);
    }

    #[test]
    fn sqlite_rerun_replaces_previous_rows() {
        let replay = ReplayBuilder::new(relay_trace(), RangeConfig::default()).build().unwrap();
        let dir = tmp();
        for _ in 0..2 {
            let mut obs = ReportObserver::new(SqliteReportWriter::new(dir.path()).unwrap());
            replay.run(&mut obs).unwrap();
            assert!(obs.take_error().is_none());
        }

        let conn = rusqlite::Connection::open(dir.path().join("coverage.db")).unwrap();
        let frames: i64 = conn
            .query_row("SELECT COUNT(*) FROM coverage_timeline", [], |r| r.get(0))
            .unwrap();
        assert_eq!(frames, 2);
        let links: i64 = conn.query_row("SELECT COUNT(*) FROM links", [], |r| r.get(0)).unwrap();
        assert_eq!(links, 6);
    }

    #[test]
    fn sqlite_missing_hops_are_null() {
        let replay = ReplayBuilder::new(relay_trace(), RangeConfig::default()).build().unwrap();
        let dir = tmp();
        let mut obs = ReportObserver::new(SqliteReportWriter::new(dir.path()).unwrap());
        replay.run(&mut obs).unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("coverage.db")).unwrap();
        let gw: Option<i64> = conn
            .query_row("SELECT gateway_id FROM links WHERE boat_id = 2 AND time = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(gw, None);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::*;
    use crate::parquet::ParquetReportWriter;
    use crate::writer::ReportWriter;
    use crate::ReportObserver;
    use lc_replay::ReplayBuilder;

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetReportWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("coverage_timeline.parquet").exists());
        assert!(dir.path().join("links.parquet").exists());
    }

    #[test]
    fn parquet_links_round_trip() {
        let replay = ReplayBuilder::new(relay_trace(), RangeConfig::default()).build().unwrap();
        let dir = tmp();
        let mut obs = ReportObserver::new(ParquetReportWriter::new(dir.path()).unwrap());
        replay.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let file = std::fs::File::open(dir.path().join("links.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 6);

        let kind = schema.field_with_name("kind").unwrap();
        assert_eq!(*kind.data_type(), DataType::Utf8);
        assert!(schema.field_with_name("relay_x").unwrap().is_nullable());
    }
}
