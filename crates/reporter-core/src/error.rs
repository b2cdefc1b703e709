use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the reporter.
#[derive(Error, Debug)]
pub enum ReporterError {
    /// The input export does not exist on disk.
    #[error("File {0} does not exist")]
    InputNotFound(PathBuf),

    /// A row of the export could not be parsed: a missing column or a
    /// non-numeric time / CPU field.
    #[error("Failed to parse TSV: {0}")]
    Csv(#[from] csv::Error),

    /// The snapshot cache could not be encoded.
    #[error("Failed to encode snapshot: {0}")]
    SnapshotEncode(#[from] bincode::error::EncodeError),

    /// The snapshot cache could not be decoded.
    #[error("Failed to decode snapshot: {0}")]
    SnapshotDecode(#[from] bincode::error::DecodeError),

    /// The spreadsheet could not be written.
    #[error("Failed to write spreadsheet: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the reporter crates.
pub type Result<T> = std::result::Result<T, ReporterError>;
