use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Filesystem checks made while committing project properties.
pub trait ProjectFs {
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` to an empty file.
    fn write_empty_file(&self, path: &Path) -> io::Result<()>;
}

/// [`ProjectFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl ProjectFs for RealFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_empty_file(&self, path: &Path) -> io::Result<()> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map(|_| ())
    }
}
