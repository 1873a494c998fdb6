//! Local filesystem adapter using std::fs.

use std::io;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use stubble_core::application::ApplicationError;
use stubble_core::application::ports::Filesystem;
use stubble_core::error::{StubbleError, StubbleResult};

/// Production filesystem implementation using `std::fs`.
///
/// New files are staged as a temp file in the destination directory and
/// moved into place with a no-clobber rename, so the destination only ever
/// observes the complete file, and two racing writers on one path get
/// exactly one winner.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StubbleResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            std::fs::DirBuilder::new()
                .recursive(true)
                .mode(0o755)
                .create(path)
                .map_err(|e| map_io_error(path, "create directory", e))?;
        }
        #[cfg(not(unix))]
        {
            std::fs::create_dir_all(path)
                .map_err(|e| map_io_error(path, "create directory", e))?;
        }
        Ok(())
    }

    fn write_new(&self, path: &Path, content: &str) -> StubbleResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged =
            NamedTempFile::new_in(parent).map_err(|e| map_io_error(path, "stage file", e))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, "write file", e))?;

        let file = staged.persist_noclobber(path).map_err(|e| {
            if e.error.kind() == io::ErrorKind::AlreadyExists {
                StubbleError::from(ApplicationError::Collision {
                    path: path.to_path_buf(),
                })
            } else {
                map_io_error(path, "persist file", e.error)
            }
        })?;

        // Temp files start life 0600; widen to the usual source-file mode.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(|e| map_io_error(path, "set permissions", e))?;
        }
        #[cfg(not(unix))]
        let _ = file;

        debug!(path = %path.display(), "file created");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, action: &'static str, source: io::Error) -> StubbleError {
    ApplicationError::io(path, action, source).into()
}
