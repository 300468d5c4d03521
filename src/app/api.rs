//! API Facade for the application.
//!
//! Glues together context creation and command execution.

use std::path::Path;

use crate::adapters::skeleton_filesystem::FilesystemSkeletonStore;
use crate::adapters::terminal_prompter::TerminalPrompter;
use crate::app::{AppContext, commands::init, config};

pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::domain::AppError;

/// Generate a skeleton at `destination`, prompting on the terminal.
///
/// Configuration is read from `py2pddl.toml` in the current directory, but
/// only after the destination is known to be free.
pub fn init(destination: &Path) -> Result<InitOutcome, AppError> {
    let store = FilesystemSkeletonStore::new();
    init::ensure_destination_available(&store, destination)?;

    let config = config::load_config(&std::env::current_dir()?)?;
    init_with(destination, &InitOptions::from(&config))
}

/// Generate a skeleton at `destination` with explicit options.
pub fn init_with(destination: &Path, options: &InitOptions) -> Result<InitOutcome, AppError> {
    let mut ctx = AppContext::new(FilesystemSkeletonStore::new(), TerminalPrompter::stdio());
    init::execute(&mut ctx, destination, options)
}
