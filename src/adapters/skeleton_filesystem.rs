//! `SkeletonStore` backed by the local filesystem.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use tracing::warn;

use crate::domain::AppError;
use crate::ports::SkeletonStore;

/// Writes skeletons relative to the process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemSkeletonStore;

impl FilesystemSkeletonStore {
    pub fn new() -> Self {
        Self
    }
}

impl SkeletonStore for FilesystemSkeletonStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create(&mut self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(path).map_err(
            |err| match err.kind() {
                ErrorKind::AlreadyExists => AppError::DestinationExists(path.to_path_buf()),
                _ => AppError::Io(err),
            },
        )?;
        let written = file.write_all(content.as_bytes()).and_then(|()| file.flush());
        drop(file);
        discard_on_error(path, written)
    }
}

/// Remove the file at `path` when `result` is an error and return that error.
fn discard_on_error(path: &Path, result: io::Result<()>) -> Result<(), AppError> {
    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "failed to remove partial skeleton");
        }
        return Err(AppError::Io(err));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_new_file_with_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rocket.py");
        let mut store = FilesystemSkeletonStore::new();

        assert!(!store.exists(&path));
        store.create(&path, "class RocketDomain(Domain):\n").unwrap();

        assert!(store.exists(&path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "class RocketDomain(Domain):\n");
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rocket.py");
        fs::write(&path, "keep me").unwrap();

        let err = FilesystemSkeletonStore::new().create(&path, "new").unwrap_err();

        assert!(matches!(err, AppError::DestinationExists(ref p) if p == &path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn failed_write_removes_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rocket.py");
        fs::write(&path, "class RocketDomain(Dom").unwrap();

        let err = discard_on_error(
            &path,
            Err(io::Error::other("File too large")),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "File too large");
        assert!(!path.exists(), "partial skeleton should be removed");
    }

    #[test]
    fn successful_write_keeps_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rocket.py");
        fs::write(&path, "done").unwrap();

        discard_on_error(&path, Ok(())).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("rocket.py");

        let err = FilesystemSkeletonStore::new().create(&path, "x").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
