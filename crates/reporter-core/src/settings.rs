use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Hourly cpu-usage reporting for Slurm accounting exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "slurm-reporter",
    about = "Builds an hourly cpu-usage summary spreadsheet from a tab-delimited export of the Slurm job table",
    version
)]
pub struct Settings {
    /// Tab-delimited export of the job accounting table
    pub tsvfile: PathBuf,

    /// Verbose output for all commands
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Name of the slurm cluster (default: current cluster)
    #[arg(long, short = 'M')]
    pub cluster: Option<String>,

    /// Partition of the slurm cluster (default: entire cluster)
    #[arg(long, short = 'p')]
    pub partition: Option<String>,

    /// Timezone for the hour labels in the spreadsheet ("auto" detects the system timezone)
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

impl Settings {
    /// Base name for the output files, taken from the input file stem.
    ///
    /// `slurm_jobs.tsv` yields `slurm_jobs`, so the run writes
    /// `slurm_jobs.zip` and `slurm_jobs.xlsx` into the working
    /// directory.
    pub fn output_basename(&self) -> Option<String> {
        self.tsvfile
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
