//! Parquet report backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `coverage_timeline.parquet`
//! - `links.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::ReportWriter;
use crate::{CoverageRow, LinkRow, ReportResult};

fn coverage_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("time",             DataType::Float64, false),
        Field::new("total_boats",      DataType::UInt32,  false),
        Field::new("connected",        DataType::UInt32,  false),
        Field::new("direct",           DataType::UInt32,  false),
        Field::new("relay",            DataType::UInt32,  false),
        Field::new("coverage_percent", DataType::Float64, false),
        Field::new("avg_distance_m",   DataType::Float64, true),
        Field::new("min_distance_m",   DataType::Float64, true),
        Field::new("max_distance_m",   DataType::Float64, true),
    ]))
}

fn link_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("time",       DataType::Float64, false),
        Field::new("boat_id",    DataType::UInt32,  false),
        Field::new("kind",       DataType::Utf8,    false),
        Field::new("relay_id",   DataType::UInt32,  true),
        Field::new("gateway_id", DataType::UInt32,  true),
        Field::new("boat_x",     DataType::Float64, false),
        Field::new("boat_y",     DataType::Float64, false),
        Field::new("relay_x",    DataType::Float64, true),
        Field::new("relay_y",    DataType::Float64, true),
        Field::new("gateway_x",  DataType::Float64, true),
        Field::new("gateway_y",  DataType::Float64, true),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes report output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetReportWriter {
    coverage:    Option<ArrowWriter<File>>,
    links:       Option<ArrowWriter<File>>,
    cov_schema:  Arc<Schema>,
    link_schema: Arc<Schema>,
}

impl ParquetReportWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let cov_schema = coverage_schema();
        let link_schema = link_schema();

        let cov_file = File::create(dir.join("coverage_timeline.parquet"))?;
        let coverage = ArrowWriter::try_new(cov_file, Arc::clone(&cov_schema), Some(snappy_props()))?;

        let link_file = File::create(dir.join("links.parquet"))?;
        let links = ArrowWriter::try_new(link_file, Arc::clone(&link_schema), Some(snappy_props()))?;

        log::debug!("writing Parquet report to {}", dir.display());
        Ok(Self {
            coverage: Some(coverage),
            links: Some(links),
            cov_schema,
            link_schema,
        })
    }
}

impl ReportWriter for ParquetReportWriter {
    fn write_coverage(&mut self, row: &CoverageRow) -> ReportResult<()> {
        let Some(writer) = self.coverage.as_mut() else {
            return Ok(());
        };

        let mut times     = Float64Builder::new();
        let mut totals    = UInt32Builder::new();
        let mut connected = UInt32Builder::new();
        let mut direct    = UInt32Builder::new();
        let mut relay     = UInt32Builder::new();
        let mut percent   = Float64Builder::new();
        let mut avg       = Float64Builder::new();
        let mut min       = Float64Builder::new();
        let mut max       = Float64Builder::new();

        times.append_value(row.time);
        totals.append_value(row.total_boats);
        connected.append_value(row.connected);
        direct.append_value(row.direct);
        relay.append_value(row.relay);
        percent.append_value(row.coverage_percent);
        avg.append_option(row.avg_distance_m);
        min.append_option(row.min_distance_m);
        max.append_option(row.max_distance_m);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.cov_schema),
            vec![
                Arc::new(times.finish()),
                Arc::new(totals.finish()),
                Arc::new(connected.finish()),
                Arc::new(direct.finish()),
                Arc::new(relay.finish()),
                Arc::new(percent.finish()),
                Arc::new(avg.finish()),
                Arc::new(min.finish()),
                Arc::new(max.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_links(&mut self, rows: &[LinkRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.links.as_mut() else {
            return Ok(());
        };

        let mut times       = Float64Builder::new();
        let mut boat_ids    = UInt32Builder::new();
        let mut kinds       = StringBuilder::new();
        let mut relay_ids   = UInt32Builder::new();
        let mut gateway_ids = UInt32Builder::new();
        let mut boat_xs     = Float64Builder::new();
        let mut boat_ys     = Float64Builder::new();
        let mut relay_xs    = Float64Builder::new();
        let mut relay_ys    = Float64Builder::new();
        let mut gateway_xs  = Float64Builder::new();
        let mut gateway_ys  = Float64Builder::new();

        for row in rows {
            times.append_value(row.time);
            boat_ids.append_value(row.boat_id);
            kinds.append_value(row.kind.as_str());
            relay_ids.append_option(row.relay_id);
            gateway_ids.append_option(row.gateway_id);
            boat_xs.append_value(row.boat_x);
            boat_ys.append_value(row.boat_y);
            relay_xs.append_option(row.relay_x);
            relay_ys.append_option(row.relay_y);
            gateway_xs.append_option(row.gateway_x);
            gateway_ys.append_option(row.gateway_y);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.link_schema),
            vec![
                Arc::new(times.finish()),
                Arc::new(boat_ids.finish()),
                Arc::new(kinds.finish()),
                Arc::new(relay_ids.finish()),
                Arc::new(gateway_ids.finish()),
                Arc::new(boat_xs.finish()),
                Arc::new(boat_ys.finish()),
                Arc::new(relay_xs.finish()),
                Arc::new(relay_ys.finish()),
                Arc::new(gateway_xs.finish()),
                Arc::new(gateway_ys.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if let Some(w) = self.coverage.take() {
            w.close()?;
        }
        if let Some(w) = self.links.take() {
            w.close()?;
        }
        Ok(())
    }
}
