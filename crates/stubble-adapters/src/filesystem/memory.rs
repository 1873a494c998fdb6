//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use stubble_core::application::ApplicationError;
use stubble_core::application::ports::Filesystem;
use stubble_core::error::StubbleResult;

/// In-memory filesystem for testing.
///
/// Mirrors [`LocalFilesystem`](crate::filesystem::LocalFilesystem)
/// semantics: parent directories must exist before a write, and writing an
/// existing path is a collision that leaves the stored content untouched.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).cloned()
    }

    /// All file paths, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.read().files.keys().cloned().collect();
        paths.sort();
        paths
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StubbleResult<()> {
        let mut inner = self.write();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::io(
                    path,
                    "create directory",
                    std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        "a file occupies this path",
                    ),
                )
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_new(&self, path: &Path, content: &str) -> StubbleResult<()> {
        let mut inner = self.write();

        // Parent must exist, as it must for the staged local write.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::io(
                    path,
                    "stage file",
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "parent directory does not exist",
                    ),
                )
                .into());
            }
        }

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ApplicationError::Collision {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
