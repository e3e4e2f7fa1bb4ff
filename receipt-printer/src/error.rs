//! Error types for the printer library

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Printer error types
///
/// Every variant keeps the device path and the underlying OS error text so
/// callers can report the original failure.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Device path does not exist
    #[error("Printer device not found: {path} ({source})")]
    DeviceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Process is not allowed to open the device
    #[error("Permission denied on printer device: {path} ({source})")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Open, write or flush failed for any other reason (busy, short write, ...)
    #[error("Write to printer device failed: {path} ({source})")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The existence check itself failed
    #[error("Printer status check failed: {path} ({source})")]
    StatusCheckFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PrintError {
    /// Classify an I/O error raised while opening or writing the device
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => PrintError::DeviceNotFound { path, source },
            io::ErrorKind::PermissionDenied => PrintError::PermissionDenied { path, source },
            _ => PrintError::WriteFailed { path, source },
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            PrintError::DeviceNotFound { .. } => "device_not_found",
            PrintError::PermissionDenied { .. } => "permission_denied",
            PrintError::WriteFailed { .. } => "write_failed",
            PrintError::StatusCheckFailed { .. } => "status_check_failed",
        }
    }
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
