//! TSV ingestion for the reporter.
//!
//! Reads the tab-delimited accounting export row by row and keeps only
//! the columns and rows the summary needs.

use std::path::Path;

use reporter_core::error::{ReporterError, Result};
use reporter_core::models::JobRecord;
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse the accounting export at `path` into [`JobRecord`]s.
///
/// The existence check runs first so a missing export is reported as
/// [`ReporterError::InputNotFound`] before any output file is touched.
/// Rows deserialize by header name, which projects the table down to
/// the record's columns and drops anything else the export carries.
/// The reader streams through an internal buffer rather than slurping
/// the file, so memory stays flat for large exports.
///
/// Any malformed row (missing column, non-numeric time or CPU field)
/// aborts the run with [`ReporterError::Csv`].
pub fn load_job_records(path: &Path) -> Result<Vec<JobRecord>> {
    if !path.exists() {
        return Err(ReporterError::InputNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .from_path(path)?;

    let mut records: Vec<JobRecord> = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    debug!("Parsed {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Keep only the rows the summary reports on.
///
/// A row survives when the job both started and finished
/// (`time_start > 0 && time_end > 0`) and its duration is
/// non-negative. Rows that ended before they started are dropped and
/// counted in the log; they would otherwise produce negative usage.
/// When `partition` is given, rows from other partitions are dropped
/// as well. Applying the filter twice yields the same rows.
pub fn retain_reportable(records: Vec<JobRecord>, partition: Option<&str>) -> Vec<JobRecord> {
    let total = records.len();
    let mut negative_duration = 0usize;

    let retained: Vec<JobRecord> = records
        .into_iter()
        .filter(|record| {
            if record.time_start <= 0 || record.time_end <= 0 {
                return false;
            }
            if record.time_end < record.time_start {
                negative_duration += 1;
                return false;
            }
            if let Some(wanted) = partition {
                if record.partition != wanted {
                    return false;
                }
            }
            true
        })
        .collect();

    if negative_duration > 0 {
        warn!(
            "Dropped {} rows whose end time precedes their start time",
            negative_duration
        );
    }
    debug!("Retained {} of {} rows", retained.len(), total);

    retained
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use reporter_core::models::EnrichedJob;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str =
        "id_job\tjob_name\taccount\tid_user\tpartition\twork_dir\ttime_submit\ttime_start\ttime_end\tcpus_req";

    fn write_tsv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    fn sample_row(
        id_job: u64,
        partition: &str,
        time_submit: i64,
        time_start: i64,
        time_end: i64,
        cpus_req: u32,
    ) -> String {
        format!(
            "{id_job}\tblast\tbiostats\t1002\t{partition}\t/home/user/run\t{time_submit}\t{time_start}\t{time_end}\t{cpus_req}"
        )
    }

    // ── load_job_records ──────────────────────────────────────────────────────

    #[test]
    fn test_load_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_tsv(
            dir.path(),
            "jobs.tsv",
            &[
                &sample_row(1, "campus", 90, 100, 200, 2),
                &sample_row(2, "largenode", 3000, 3100, 4000, 8),
            ],
        );

        let records = load_job_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id_job, 1);
        assert_eq!(records[0].job_name, "blast");
        assert_eq!(records[0].account, "biostats");
        assert_eq!(records[0].id_user, 1002);
        assert_eq!(records[1].partition, "largenode");
        assert_eq!(records[1].cpus_req, 8);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_job_records(Path::new("/tmp/does-not-exist-reporter/jobs.tsv")).unwrap_err();
        assert!(matches!(err, ReporterError::InputNotFound(_)));
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wide.tsv");
        let mut file = std::fs::File::create(&path).unwrap();
        // The real export carries dozens of columns; only the named
        // ones must survive.
        writeln!(file, "{}\tstate\texit_code", HEADER).unwrap();
        writeln!(
            file,
            "{}\tCOMPLETED\t0:0",
            sample_row(7, "campus", 90, 100, 200, 2)
        )
        .unwrap();

        let records = load_job_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id_job, 7);
    }

    #[test]
    fn test_load_rejects_non_numeric_time() {
        let dir = TempDir::new().unwrap();
        let path = write_tsv(
            dir.path(),
            "bad.tsv",
            &["8\tblast\tbiostats\t1002\tcampus\t/home\t90\tnot-a-number\t200\t2"],
        );

        let err = load_job_records(&path).unwrap_err();
        assert!(matches!(err, ReporterError::Csv(_)));
    }

    #[test]
    fn test_load_rejects_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.tsv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id_job\tjob_name").unwrap();
        writeln!(file, "1\tblast").unwrap();

        assert!(load_job_records(&path).is_err());
    }

    #[test]
    fn test_load_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = write_tsv(dir.path(), "empty.tsv", &[]);
        let records = load_job_records(&path).unwrap();
        assert!(records.is_empty());
    }

    // ── retain_reportable ─────────────────────────────────────────────────────

    fn parsed(rows: &[String]) -> Vec<JobRecord> {
        let dir = TempDir::new().unwrap();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let path = write_tsv(dir.path(), "jobs.tsv", &refs);
        load_job_records(&path).unwrap()
    }

    #[test]
    fn test_retain_drops_unstarted_and_unfinished() {
        let records = parsed(&[
            sample_row(1, "campus", 90, 100, 200, 2),
            sample_row(2, "campus", 90, 0, 200, 2),
            sample_row(3, "campus", 90, 100, 0, 2),
        ]);

        let retained = retain_reportable(records, None);
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].id_job, 1);
    }

    #[test]
    fn test_retain_drops_negative_duration() {
        let records = parsed(&[
            sample_row(1, "campus", 90, 500, 200, 2),
            sample_row(2, "campus", 90, 100, 200, 2),
        ]);

        let retained = retain_reportable(records, None);
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].id_job, 2);
    }

    #[test]
    fn test_retain_is_idempotent() {
        let records = parsed(&[
            sample_row(1, "campus", 90, 100, 200, 2),
            sample_row(2, "campus", 90, 0, 200, 2),
            sample_row(3, "campus", 90, 300, 900, 4),
        ]);

        let once = retain_reportable(records, None);
        let twice = retain_reportable(once.clone(), None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_retain_partition_filter() {
        let records = parsed(&[
            sample_row(1, "campus", 90, 100, 200, 2),
            sample_row(2, "largenode", 90, 100, 200, 2),
            sample_row(3, "campus", 90, 100, 200, 2),
        ]);

        let retained = retain_reportable(records, Some("campus"));
        assert_eq!(retained.len(), 2);
        assert!(retained.iter().all(|r| r.partition == "campus"));
    }

    #[test]
    fn test_retain_without_partition_keeps_all_partitions() {
        let records = parsed(&[
            sample_row(1, "campus", 90, 100, 200, 2),
            sample_row(2, "largenode", 90, 100, 200, 2),
        ]);

        let retained = retain_reportable(records, None);
        assert_eq!(retained.len(), 2);
    }

    // ── full pipeline ─────────────────────────────────────────────────────────

    #[test]
    fn test_pipeline_single_bucket_summary() {
        use crate::aggregator::HourlyAggregator;

        // Three rows: two retained that share an hour bucket, one that
        // never started.
        let records = parsed(&[
            sample_row(1, "campus", 100, 100, 200, 2),
            sample_row(2, "campus", 200, 100, 200, 2),
            sample_row(3, "campus", 100, 0, 200, 2),
        ]);

        let enriched: Vec<EnrichedJob> = retain_reportable(records, None)
            .into_iter()
            .map(EnrichedJob::from_record)
            .collect();
        let buckets = HourlyAggregator::aggregate_hourly(&enriched);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].stats.jobs, 2);
        assert_eq!(buckets[0].stats.cpu_seconds, 400);
    }

    #[test]
    fn test_pipeline_distinct_buckets() {
        use crate::aggregator::HourlyAggregator;

        // Submit times an hour apart round to different boundaries.
        let records = parsed(&[
            sample_row(1, "campus", 100, 100, 200, 2),
            sample_row(2, "campus", 4000, 100, 200, 2),
        ]);

        let enriched: Vec<EnrichedJob> = retain_reportable(records, None)
            .into_iter()
            .map(EnrichedJob::from_record)
            .collect();
        let buckets = HourlyAggregator::aggregate_hourly(&enriched);

        assert_eq!(buckets.len(), 2);
        assert!(buckets.iter().all(|b| b.stats.jobs == 1));
    }
}
