//! Hourly aggregation of enriched job rows.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use reporter_core::models::EnrichedJob;

// ── HourlyStats ───────────────────────────────────────────────────────────────

/// Usage totals accumulated across the jobs of one hour bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyStats {
    /// Summed cpu-seconds of the contributing jobs.
    pub cpu_seconds: i64,
    /// Number of contributing jobs.
    pub jobs: u32,
}

impl HourlyStats {
    /// Add a single job's usage to the running totals.
    pub fn add_job(&mut self, job: &EnrichedJob) {
        self.cpu_seconds += job.cpu_seconds;
        self.jobs += 1;
    }
}

// ── HourlyBucket ──────────────────────────────────────────────────────────────

/// One row of the summary: the totals for one distinct hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyBucket {
    /// The grouping key, an hour boundary in UTC.
    pub hour_start: DateTime<Utc>,
    /// Combined stats for the hour.
    pub stats: HourlyStats,
}

// ── HourlyAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that groups enriched jobs by their hour bucket.
pub struct HourlyAggregator;

impl HourlyAggregator {
    /// Group `jobs` by `hour_start` and sum usage per group.
    ///
    /// Returns one bucket per distinct hour present in the data, in
    /// chronological order.
    pub fn aggregate_hourly(jobs: &[EnrichedJob]) -> Vec<HourlyBucket> {
        // BTreeMap keeps the bucket keys sorted.
        let mut map: BTreeMap<DateTime<Utc>, HourlyStats> = BTreeMap::new();

        for job in jobs {
            map.entry(job.hour_start).or_default().add_job(job);
        }

        map.into_iter()
            .map(|(hour_start, stats)| HourlyBucket { hour_start, stats })
            .collect()
    }

    /// Sum the stats of all buckets into one overall total.
    pub fn calculate_totals(buckets: &[HourlyBucket]) -> HourlyStats {
        let mut totals = HourlyStats::default();
        for bucket in buckets {
            totals.cpu_seconds += bucket.stats.cpu_seconds;
            totals.jobs += bucket.stats.jobs;
        }
        totals
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
