//! # fsx
//!
//! Extended filesystem operations for compio: thin future-returning wrappers
//! around the usual path-based primitives, plus one composite operation —
//! recursive directory removal.
//!
//! Every wrapper delegates to exactly one underlying `compio::fs` call and
//! surfaces its error unchanged (as the `#[source]` of [`FsError`]), with two
//! deliberate exceptions:
//!
//! - [`exists`] never fails: any error from the underlying stat is reported
//!   as "does not exist".
//! - [`remove_dir_recursive`] swallows the failure of its *final* rmdir only;
//!   failures while deleting files or subdirectories still abort the call.
//!
//! Directory listing wraps `std::fs::read_dir` in `compio::runtime::spawn`
//! because io_uring has no `GETDENTS64` opcode; see [`directory::read_dir`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! # async fn example() -> fsx::Result<()> {
//! fsx::write_file(Path::new("/tmp/x/a.txt"), b"hello".to_vec()).await?;
//! let data = fsx::read_file(Path::new("/tmp/x/a.txt")).await?;
//! assert_eq!(data, b"hello");
//!
//! fsx::remove_dir_recursive(Path::new("/tmp/x")).await?;
//! assert!(!fsx::exists(Path::new("/tmp/x")).await);
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod error;
pub mod file;
pub mod remove;

// Re-export main types
pub use error::{FsError, Result};
pub use remove::{EntryKind, LocalFileSystem, RemoveOps};

// Re-export the flat operation surface
pub use directory::{create_dir, create_dir_all, read_dir, remove_dir, symlink_metadata};
pub use file::{exists, read_file, remove_file, rename, write_file};
pub use remove::remove_dir_recursive;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
