//! Error type definitions.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for a patching run.
///
/// Every variant is fatal; there is no retry or local recovery. An anchor
/// literal that does not appear in the target file is not an error.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The scan report could not be read.
    #[error("Failed to read scan report {path}: {source}")]
    ReportRead {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The target source file could not be read.
    #[error("Failed to read target file {path}: {source}")]
    TargetRead {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The patched text could not be written back to the target file.
    #[error("Failed to write target file {path}: {source}")]
    TargetWrite {
        /// Path that failed to write
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}
