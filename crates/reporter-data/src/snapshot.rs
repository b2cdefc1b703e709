//! Binary cache of the enriched table.
//!
//! The snapshot lets downstream consumers reload the filtered, enriched
//! rows without re-parsing the original export. The reporter itself
//! only ever writes it.

use std::path::Path;

use bincode::config::{self, Configuration};
use reporter_core::error::Result;
use reporter_core::models::EnrichedJob;
use tracing::debug;

fn snapshot_config() -> Configuration {
    config::standard()
}

/// Serialize the enriched rows to `path`.
///
/// Write-only from the reporter's point of view; nothing in the run
/// reads the file back.
pub fn write_snapshot(jobs: &[EnrichedJob], path: &Path) -> Result<()> {
    let bytes = bincode::encode_to_vec(jobs, snapshot_config())?;
    std::fs::write(path, &bytes)?;

    debug!(
        "Snapshot: {} rows, {} bytes written to {}",
        jobs.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}

/// Reload a snapshot written by [`write_snapshot`].
///
/// Provided for downstream consumers of the cache; yields the same
/// rows, in the same order, with the same derived values.
pub fn load_snapshot(path: &Path) -> Result<Vec<EnrichedJob>> {
    let bytes = std::fs::read(path)?;
    let (jobs, _) = bincode::decode_from_slice(&bytes, snapshot_config())?;
    Ok(jobs)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
