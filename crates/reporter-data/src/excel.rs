//! Spreadsheet emission.

use std::path::Path;

use chrono_tz::Tz;
use reporter_core::error::Result;
use reporter_core::time_utils;
use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::aggregator::HourlyBucket;

/// Name of the single sheet in the summary workbook.
pub const SHEET_NAME: &str = "hourly-summary";

/// Write the hourly summary to a spreadsheet workbook at `path`.
///
/// One sheet named [`SHEET_NAME`] with the columns `hour_start`, `sum`
/// and `count`, one row per distinct hour bucket. `tz` controls only
/// how the hour labels are rendered; the bucket keys themselves are
/// UTC.
pub fn write_hourly_summary(buckets: &[HourlyBucket], path: &Path, tz: Tz) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    sheet.write_string(0, 0, "hour_start")?;
    sheet.write_string(0, 1, "sum")?;
    sheet.write_string(0, 2, "count")?;

    for (i, bucket) in buckets.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, time_utils::format_hour_label(bucket.hour_start, tz))?;
        sheet.write_number(row, 1, bucket.stats.cpu_seconds as f64)?;
        sheet.write_number(row, 2, f64::from(bucket.stats.jobs))?;
    }

    workbook.save(path)?;
    debug!(
        "Spreadsheet: {} summary rows written to {}",
        buckets.len(),
        path.display()
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
