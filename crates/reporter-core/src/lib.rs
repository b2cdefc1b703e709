//! Core domain types for the Slurm hourly usage reporter.
//!
//! Holds the accounting-row models, the error taxonomy, the CLI
//! settings and the epoch/timezone helpers shared by the ingestion and
//! emission layers.

pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;
