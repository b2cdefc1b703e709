mod bootstrap;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as _;
use reporter_core::models::EnrichedJob;
use reporter_core::settings::Settings;
use reporter_core::time_utils;
use reporter_data::aggregator::HourlyAggregator;
use reporter_data::{excel, reader, snapshot};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level, settings.debug)?;

    if settings.debug {
        println!("DEBUG: arguments: {settings:?}");
    }

    tracing::info!("slurm-reporter v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(cluster) = settings.cluster.as_deref() {
        // The export carries no cluster column; the name is recorded in
        // the run log only.
        tracing::info!(cluster, "cluster scope requested");
    }

    let basename = settings
        .output_basename()
        .context("input path has no file name")?;
    let snapshot_path = PathBuf::from(format!("{basename}.zip"));
    let excel_path = PathBuf::from(format!("{basename}.xlsx"));
    let tz = time_utils::resolve_timezone(&settings.timezone);

    println!("   Reading TSV file .....");
    let records = reader::load_job_records(&settings.tsvfile)?;
    let retained = reader::retain_reportable(records, settings.partition.as_deref());
    let enriched: Vec<EnrichedJob> = retained
        .into_iter()
        .map(EnrichedJob::from_record)
        .collect();

    println!("   Writing snapshot .....");
    snapshot::write_snapshot(&enriched, &snapshot_path)?;

    println!("   Writing to Excel .....");
    let buckets = HourlyAggregator::aggregate_hourly(&enriched);
    excel::write_hourly_summary(&buckets, &excel_path, tz)?;

    let totals = HourlyAggregator::calculate_totals(&buckets);
    tracing::info!(
        "Summarised {} jobs ({} cpu-seconds) into {} hour buckets",
        totals.jobs,
        totals.cpu_seconds,
        buckets.len()
    );

    Ok(())
}
