//! The `init` command: check destination, collect answers, render, write.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::collect::collect_answers;
use crate::app::AppContext;
use crate::domain::{AppError, EmptyTokenPolicy, GeneratorConfig, render};
use crate::ports::{Prompter, SkeletonStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub empty_tokens: EmptyTokenPolicy,
}

impl From<&GeneratorConfig> for InitOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self { empty_tokens: config.tokens.empty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Fail with [`AppError::DestinationExists`] if `destination` is taken.
pub fn ensure_destination_available<S: SkeletonStore>(
    store: &S,
    destination: &Path,
) -> Result<(), AppError> {
    if store.exists(destination) {
        return Err(AppError::DestinationExists(destination.to_path_buf()));
    }
    Ok(())
}

/// Execute the init command.
///
/// Nothing is prompted when the destination already exists, and nothing is
/// written unless every prompt succeeded.
pub fn execute<S, P>(
    ctx: &mut AppContext<S, P>,
    destination: &Path,
    options: &InitOptions,
) -> Result<InitOutcome, AppError>
where
    S: SkeletonStore,
    P: Prompter,
{
    ensure_destination_available(ctx.store(), destination)?;
    if destination.extension().is_none_or(|ext| ext != "py") {
        warn!(path = %destination.display(), "destination does not end with .py");
    }

    let answers = collect_answers(ctx.prompter_mut(), options.empty_tokens)?;
    let skeleton = render(&answers);
    debug!(bytes = skeleton.as_str().len(), "rendered skeleton");

    ctx.store_mut().create(destination, skeleton.as_str())?;
    info!(path = %destination.display(), "skeleton written");

    Ok(InitOutcome { path: destination.to_path_buf(), bytes_written: skeleton.as_str().len() })
}
