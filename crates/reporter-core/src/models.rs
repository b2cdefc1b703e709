use bincode::{Decode, Encode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils;

/// One row of the job accounting export.
///
/// Field names match the column headers of the tab-delimited table, so
/// rows deserialize by header name and any extra columns in the export
/// are ignored. The three `time_*` fields are epoch seconds; a value of
/// zero means the event never happened (a job that was cancelled before
/// it started carries `time_start == 0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct JobRecord {
    pub id_job: u64,
    pub job_name: String,
    pub account: String,
    pub id_user: u32,
    pub partition: String,
    pub work_dir: String,
    pub time_submit: i64,
    pub time_start: i64,
    pub time_end: i64,
    pub cpus_req: u32,
}

/// A retained accounting row plus the derived usage columns.
///
/// Built once via [`EnrichedJob::from_record`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct EnrichedJob {
    pub job: JobRecord,
    /// Wall-clock duration multiplied by the requested CPU count.
    pub cpu_seconds: i64,
    /// Submit time rounded to the nearest hour boundary; the grouping
    /// key of the summary.
    #[bincode(with_serde)]
    pub hour_start: DateTime<Utc>,
}

impl EnrichedJob {
    /// Derive the usage columns for a retained row.
    ///
    /// `cpu_seconds` is exact integer arithmetic, no rounding. Callers
    /// are expected to have filtered out rows with `time_end <
    /// time_start`; for such rows the value would go negative.
    pub fn from_record(job: JobRecord) -> Self {
        let cpu_seconds = (job.time_end - job.time_start) * i64::from(job.cpus_req);
        let hour_start = time_utils::hour_bucket(job.time_submit);
        Self {
            job,
            cpu_seconds,
            hour_start,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
