//! In-memory `SkeletonStore` for exercising the generator without disk I/O.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SkeletonStore;

#[derive(Debug, Default, Clone)]
pub struct MemorySkeletonStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySkeletonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file as if it already existed.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn read(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SkeletonStore for MemorySkeletonStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn create(&mut self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.files.contains_key(path) {
            return Err(AppError::DestinationExists(path.to_path_buf()));
        }
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
