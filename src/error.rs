//! Error types for fsx operations
//!
//! All failures originate from the underlying filesystem call; this crate
//! does not classify or translate them. [`FsError::Io`] adds the failing
//! operation and path to the display message while keeping the original
//! `std::io::Error` reachable through `source()`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for fsx operations
pub type Result<T> = std::result::Result<T, FsError>;

/// Error type for fsx operations
#[derive(Debug, Error)]
pub enum FsError {
    /// An underlying filesystem call failed
    #[error("failed to {op} {}: {source}", .path.display())]
    Io {
        /// The operation that failed (e.g. "read file", "remove directory")
        op: &'static str,
        /// The path the operation was applied to
        path: PathBuf,
        /// The untouched error from the filesystem
        #[source]
        source: io::Error,
    },

    /// A rename failed; either side may be at fault (missing destination
    /// parent, cross-device link), so the context names both paths
    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        /// The path being moved
        from: PathBuf,
        /// The destination path
        to: PathBuf,
        /// The untouched error from the filesystem
        #[source]
        source: io::Error,
    },

    /// Dispatching a blocking shim onto the runtime failed
    #[error("failed to dispatch blocking operation: {0}")]
    Dispatch(String),
}

impl FsError {
    /// The `io::ErrorKind` of the underlying failure, if this is an I/O error.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } | Self::Rename { source, .. } => Some(source.kind()),
            Self::Dispatch(_) => None,
        }
    }
}

/// Create an `FsError::Io` with operation and path context
pub(crate) fn io_error(op: &'static str, path: &Path, source: io::Error) -> FsError {
    FsError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

/// Create an `FsError::Rename` naming both sides of the move
pub(crate) fn rename_error(from: &Path, to: &Path, source: io::Error) -> FsError {
    FsError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}

/// Create an `FsError::Dispatch` from a spawn failure
pub(crate) fn dispatch_error(detail: &str) -> FsError {
    FsError::Dispatch(detail.to_string())
}
