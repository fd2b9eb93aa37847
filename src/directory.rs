//! Directory-level wrappers
//!
//! Creation, listing and non-recursive removal of directories, plus the
//! lstat-style metadata query. Listing is the one operation without an
//! io_uring opcode, so it dispatches the blocking call onto the runtime.

use crate::error::{dispatch_error, io_error, Result};
use std::ffi::OsString;
use std::path::Path;

/// Create a single directory
///
/// The parent must already exist; use [`create_dir_all`] otherwise.
///
/// # Errors
///
/// Returns an error if the directory already exists, the parent is missing,
/// or permission is denied.
pub async fn create_dir(path: &Path) -> Result<()> {
    compio::fs::create_dir(path)
        .await
        .map_err(|e| io_error("create directory", path, e))
}

/// Create a directory and all missing parents
///
/// # Errors
///
/// Returns an error if a component cannot be created (e.g. permission
/// denied, or an existing non-directory in the way).
pub async fn create_dir_all(path: &Path) -> Result<()> {
    compio::fs::create_dir_all(path)
        .await
        .map_err(|e| io_error("create directory tree", path, e))
}

/// List the names of a directory's immediate entries
///
/// Names are returned in directory order, without `.` and `..`.
///
/// CURRENT STATUS: uses `std::fs::read_dir` dispatched via
/// `compio::runtime::spawn` because the kernel has no `IORING_OP_GETDENTS64`
/// (patches proposed in 2021 were never merged). If that opcode ever lands,
/// this function can switch without changing callers.
///
/// # Errors
///
/// Returns an error if the path does not exist, is not a directory, or an
/// entry cannot be read.
pub async fn read_dir(path: &Path) -> Result<Vec<OsString>> {
    let path_owned = path.to_path_buf();
    compio::runtime::spawn(async move {
        let entries = std::fs::read_dir(&path_owned)
            .map_err(|e| io_error("read directory", &path_owned, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error("read directory entry", &path_owned, e))?;
            names.push(entry.file_name());
        }
        Ok(names)
    })
    .await
    .map_err(|e| dispatch_error(&format!("spawn failed: {e:?}")))?
}

/// Get metadata for a path without following symlinks
///
/// lstat semantics: a symlink reports as a symlink, not as its target. This
/// is the query the recursive remover relies on, so that a symlink to a
/// directory is unlinked rather than descended into.
///
/// # Errors
///
/// Returns an error if the path does not exist or the stat fails.
pub async fn symlink_metadata(path: &Path) -> Result<compio::fs::Metadata> {
    compio::fs::symlink_metadata(path)
        .await
        .map_err(|e| io_error("stat", path, e))
}

/// Remove a single empty directory
///
/// Non-recursive; fails on non-empty directories. Unlike the final step of
/// [`crate::remove_dir_recursive`], the error here always propagates.
///
/// # Errors
///
/// Returns an error if the directory does not exist, is not empty, or
/// cannot be removed.
pub async fn remove_dir(path: &Path) -> Result<()> {
    compio::fs::remove_dir(path)
        .await
        .map_err(|e| io_error("remove directory", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[compio::test]
    async fn test_create_dir() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let dir_path = temp_dir.path().join("subdir");

        create_dir(&dir_path).await?;

        assert!(dir_path.is_dir());

        Ok(())
    }

    #[compio::test]
    async fn test_create_dir_existing_fails() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;

        let result = create_dir(temp_dir.path()).await;

        assert!(result.is_err());

        Ok(())
    }

    #[compio::test]
    async fn test_create_dir_all_nested() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let dir_path = temp_dir.path().join("a/b/c");

        create_dir_all(&dir_path).await?;

        assert!(dir_path.is_dir());

        Ok(())
    }

    #[compio::test]
    async fn test_read_dir_lists_entries() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("one.txt"), b"1")?;
        fs::write(temp_dir.path().join("two.txt"), b"2")?;
        fs::create_dir(temp_dir.path().join("sub"))?;

        let mut names = read_dir(temp_dir.path()).await?;
        names.sort();

        assert_eq!(names, vec!["one.txt", "sub", "two.txt"]);

        Ok(())
    }

    #[compio::test]
    async fn test_read_dir_empty() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;

        let names = read_dir(temp_dir.path()).await?;

        assert!(names.is_empty());

        Ok(())
    }

    #[compio::test]
    async fn test_read_dir_nonexistent_fails() {
        let result = read_dir(Path::new("/nonexistent/directory")).await;
        assert!(result.is_err());
    }

    #[compio::test]
    async fn test_read_dir_on_file_fails() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, b"not a directory")?;

        let result = read_dir(&file_path).await;

        assert!(result.is_err());

        Ok(())
    }

    #[compio::test]
    async fn test_symlink_metadata_distinguishes_kinds() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, b"x")?;

        let file_meta = symlink_metadata(&file_path).await?;
        assert!(file_meta.is_file());
        assert!(!file_meta.is_dir());

        let dir_meta = symlink_metadata(temp_dir.path()).await?;
        assert!(dir_meta.is_dir());

        Ok(())
    }

    #[cfg(unix)]
    #[compio::test]
    async fn test_symlink_metadata_does_not_follow_links() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let target = temp_dir.path().join("target_dir");
        let link = temp_dir.path().join("link");
        fs::create_dir(&target)?;
        std::os::unix::fs::symlink(&target, &link)?;

        let meta = symlink_metadata(&link).await?;

        assert!(meta.is_symlink());
        assert!(!meta.is_dir());

        Ok(())
    }

    #[compio::test]
    async fn test_remove_dir_empty() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let dir_path = temp_dir.path().join("empty");
        fs::create_dir(&dir_path)?;

        remove_dir(&dir_path).await?;

        assert!(!dir_path.exists());

        Ok(())
    }

    #[compio::test]
    async fn test_remove_dir_non_empty_fails() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let dir_path = temp_dir.path().join("full");
        fs::create_dir(&dir_path)?;
        fs::write(dir_path.join("blocker.txt"), b"x")?;

        let result = remove_dir(&dir_path).await;

        assert!(result.is_err());
        assert!(dir_path.exists());

        Ok(())
    }
}
