//! Error types for fixture generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for fixture generation.
///
/// Splits into parameter errors (contradictory bounds, rejected before
/// anything is written) and filesystem errors (directory or file I/O,
/// carrying the path and the underlying `io::Error`).
#[derive(Debug, Error)]
pub enum Error {
    /// Size bounds are contradictory
    #[error("invalid size range: minimum {min} exceeds maximum {max}")]
    InvalidSizeRange {
        /// Lower bound, in size units
        min: u64,
        /// Upper bound, in size units
        max: u64,
    },

    /// Alphabet byte bounds are contradictory
    #[error("invalid byte range: minimum {min} exceeds maximum {max}")]
    InvalidByteRange {
        /// Smallest eligible byte value
        min: u8,
        /// Largest eligible byte value
        max: u8,
    },

    /// Failed to create the output directory
    #[error("{}: {source}", path.display())]
    CreateDir {
        /// Path to the output directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create an output file
    #[error("{}: {source}", path.display())]
    CreateFile {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write an output file
    #[error("{}: write failed: {source}", path.display())]
    Write {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for fixture generation.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors caused by rejected parameters rather than I/O.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidSizeRange { .. } | Error::InvalidByteRange { .. }
        )
    }
}
