//! Destination storage for the generated skeleton.

use std::path::Path;

use crate::domain::AppError;

/// Port for the single write of a generated skeleton.
pub trait SkeletonStore {
    /// Check whether anything already exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Write `content` to a new file at `path`.
    ///
    /// Must fail with [`AppError::DestinationExists`] rather than overwrite.
    fn create(&mut self, path: &Path, content: &str) -> Result<(), AppError>;
}
