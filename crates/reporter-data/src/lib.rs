//! Ingestion and emission layer for the Slurm hourly usage reporter.
//!
//! Responsible for reading the tab-delimited accounting export,
//! grouping retained jobs into hour buckets, caching the enriched rows
//! as a binary snapshot and writing the summary spreadsheet.

pub mod aggregator;
pub mod excel;
pub mod reader;
pub mod snapshot;

pub use reporter_core as core;
