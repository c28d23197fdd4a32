//! File-system capability used by the store.
//!
//! The store never touches `std::fs` directly. It goes through
//! [`FileSystem`], which lets tests run against [`MemFs`] or a mock.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// The three file operations a config store needs.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Whether something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error unchanged.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate `path` and write `contents` to it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error unchanged.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// The real operating-system file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// An in-memory file system.
///
/// Clones share the same storage, so a file written through one store can
/// be read back through another.
///
/// # Examples
///
/// ```
/// use layerconf::fs::{FileSystem, MemFs};
/// use std::path::Path;
///
/// let fs = MemFs::new();
/// fs.write(Path::new("conf/app.json"), b"{}").unwrap();
/// assert!(fs.clone().exists(Path::new("conf/app.json")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemFs {
    /// Creates an empty in-memory file system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of every stored file, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        let mut paths: Vec<PathBuf> = files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl FileSystem for MemFs {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
