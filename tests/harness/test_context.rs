//! Shared testing harness for `py2pddl-init` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Working directory the binary runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Command for the binary, rooted at the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("py2pddl-init").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env_remove("PY2PDDL_LOG");
        cmd
    }

    pub(crate) fn write_file(&self, name: &str, content: &str) {
        fs::write(self.work_dir.join(name), content).expect("Failed to write fixture file");
    }

    pub(crate) fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read generated file")
    }

    pub(crate) fn assert_file_missing(&self, name: &str) {
        let path = self.work_dir.join(name);
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}
