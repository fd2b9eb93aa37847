//! Recursive directory removal
//!
//! The one composite operation in this crate: delete everything beneath a
//! directory, then the directory itself. Sibling entries are processed with
//! bounded concurrent fan-out; a level's own rmdir runs only after all of
//! its children have settled.
//!
//! The traversal is generic over [`RemoveOps`], the four leaf capabilities
//! it needs from the filesystem (list, stat, unlink, rmdir). Production use
//! goes through [`LocalFileSystem`] and the [`remove_dir_recursive`] entry
//! point; tests substitute a recording double to pin call ordering and
//! error policy.

use crate::error::Result;
use futures::future::LocalBoxFuture;
use futures::stream::{self, TryStreamExt};
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

/// Maximum entries processed concurrently within one directory level.
///
/// Keeps fan-out bounded on very large directories so the traversal does
/// not hold one in-flight stat/unlink per entry all at once.
const MAX_ENTRY_CONCURRENCY: usize = 64;

/// What the remover needs to know about an entry: directory or not.
///
/// Derived from an lstat-style query, so a symlink to a directory is
/// [`EntryKind::Other`] and gets unlinked, never descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory (recursed into, then removed with rmdir)
    Directory,
    /// Anything else: regular file, symlink, fifo, ... (unlinked)
    Other,
}

impl EntryKind {
    /// `true` for [`EntryKind::Directory`]
    #[must_use]
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Leaf filesystem capabilities required by the recursive remover
///
/// Implemented by [`LocalFileSystem`] over `compio::fs`. Test code
/// implements it with scripted doubles to observe call order and inject
/// failures without touching a real filesystem.
pub trait RemoveOps {
    /// List the names of a directory's immediate entries
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or is not a directory.
    async fn list_dir(&self, path: &Path) -> Result<Vec<OsString>>;

    /// Classify an entry without following symlinks
    ///
    /// # Errors
    ///
    /// Returns an error if the stat fails (e.g. the entry vanished).
    async fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    /// Delete a non-directory entry
    ///
    /// # Errors
    ///
    /// Returns an error if the unlink fails.
    async fn remove_file(&self, path: &Path) -> Result<()>;

    /// Delete an empty directory
    ///
    /// # Errors
    ///
    /// Returns an error if the rmdir fails (e.g. directory not empty).
    async fn remove_dir(&self, path: &Path) -> Result<()>;
}

/// Local filesystem backend for the recursive remover
///
/// Zero-sized; every method delegates to the corresponding wrapper in
/// [`crate::file`] / [`crate::directory`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new `LocalFileSystem` instance
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RemoveOps for LocalFileSystem {
    async fn list_dir(&self, path: &Path) -> Result<Vec<OsString>> {
        crate::directory::read_dir(path).await
    }

    async fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let metadata = crate::directory::symlink_metadata(path).await?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        })
    }

    async fn remove_file(&self, path: &Path) -> Result<()> {
        crate::file::remove_file(path).await
    }

    async fn remove_dir(&self, path: &Path) -> Result<()> {
        crate::directory::remove_dir(path).await
    }
}

/// Recursively remove a directory and everything beneath it
///
/// The caller is expected to pass an existing directory; a missing or
/// non-directory path fails with the listing error.
///
/// Per directory level:
///
/// 1. list the immediate entries;
/// 2. concurrently (bounded fan-out) stat each entry, recursing into
///    subdirectories and unlinking everything else;
/// 3. join all sibling work — the first failure aborts the level;
/// 4. rmdir the now-empty directory. **This final step never fails**: an
///    error here (say, a concurrent writer repopulated the directory) is
///    logged and swallowed, and the call still succeeds. Deletion errors in
///    steps 2-3 are fatal; only the level's own rmdir is forgiven.
///
/// No retries, no checkpointing: a failed call is simply re-run from the
/// top, re-listing whatever is left.
///
/// # Errors
///
/// Returns an error if listing fails or if any entry's stat/unlink (or a
/// subdirectory's recursive removal) fails.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// # async fn example() -> fsx::Result<()> {
/// fsx::remove_dir_recursive(Path::new("/tmp/scratch")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn remove_dir_recursive(path: &Path) -> Result<()> {
    remove_tree(&LocalFileSystem, path).await
}

/// Generic recursive removal over any [`RemoveOps`] backend
///
/// Returns a boxed future because the recursion would otherwise make the
/// future type infinite. Futures here are not `Send`; compio runs them on
/// a single-threaded runtime.
pub fn remove_tree<'a, F: RemoveOps>(fs: &'a F, path: &'a Path) -> LocalBoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let names = fs.list_dir(path).await?;
        debug!("removing {} entries under {}", names.len(), path.display());

        // Fan out over siblings; first error wins and drops the rest.
        stream::iter(names.into_iter().map(Ok::<_, crate::error::FsError>))
            .try_for_each_concurrent(MAX_ENTRY_CONCURRENCY, |name| {
                let child = path.join(name);
                async move {
                    match fs.entry_kind(&child).await? {
                        EntryKind::Directory => remove_tree(fs, &child).await,
                        EntryKind::Other => fs.remove_file(&child).await,
                    }
                }
            })
            .await?;

        // Asymmetry inherited from the original: the level's own rmdir is
        // allowed to fail (e.g. something was recreated after listing).
        if let Err(e) = fs.remove_dir(path).await {
            debug!("ignoring rmdir failure for {}: {e}", path.display());
        }

        Ok(())
    })
}
