//! PGM error types

use std::path::PathBuf;

/// Errors that can occur while reading or writing a PGM image.
#[derive(Debug, thiserror::Error)]
pub enum PgmError {
    /// The input path does not exist
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    /// Magic number is not `P2` or `P5`, or the variant cannot hold the data
    #[error("unsupported PGM format: {0}")]
    UnsupportedFormat(String),

    /// Width, height or max value missing or invalid
    #[error("malformed PGM header: {0}")]
    MalformedHeader(String),

    /// A raster sample could not be parsed
    #[error("malformed PGM data: {0}")]
    MalformedData(String),

    /// A sample is larger than the declared max value
    #[error("sample {index} has value {value}, above max value {max}")]
    SampleOutOfRange { index: usize, value: u32, max: u16 },

    /// Fewer samples than width * height
    #[error("truncated PGM data: expected {expected} samples, found {actual}")]
    TruncatedData { expected: usize, actual: usize },

    #[error("PGM I/O error: {0}")]
    Io(#[from] std::io::Error),
}
