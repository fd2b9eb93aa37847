//! File-level wrappers
//!
//! Each function adapts exactly one `compio::fs` call, adding path context
//! to the error and nothing else.

use crate::error::{io_error, rename_error, Result};
use compio::buf::IoBuf;
use std::path::Path;

/// Check whether a path exists
///
/// Never fails: any error from the underlying stat (not-found, permission
/// denied, ...) is reported as `false`.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() {
/// assert!(fsx::exists(std::path::Path::new("/")).await);
/// # }
/// ```
pub async fn exists(path: &Path) -> bool {
    compio::fs::metadata(path).await.is_ok()
}

/// Read the entire content of a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read; the underlying
/// `io::Error` is preserved as the source.
pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    compio::fs::read(path)
        .await
        .map_err(|e| io_error("read file", path, e))
}

/// Write data to a file, creating it if needed and truncating it otherwise
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn write_file<B: IoBuf>(path: &Path, data: B) -> Result<()> {
    compio::fs::write(path, data)
        .await
        .0
        .map(|_| ())
        .map_err(|e| io_error("write file", path, e))
}

/// Remove a single file
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be unlinked.
pub async fn remove_file(path: &Path) -> Result<()> {
    compio::fs::remove_file(path)
        .await
        .map_err(|e| io_error("remove file", path, e))
}

/// Move a file or directory to a new location
///
/// Atomic rename; both paths must be on the same filesystem.
///
/// # Errors
///
/// Returns an error if the underlying rename fails. The error names both
/// paths, since either side may be the cause (missing destination parent,
/// cross-device move, ...).
pub async fn rename(from: &Path, to: &Path) -> Result<()> {
    compio::fs::rename(from, to)
        .await
        .map_err(|e| rename_error(from, to, e))
}
