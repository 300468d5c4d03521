//! Generator configuration loading from the working directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, CONFIG_FILE, GeneratorConfig, parse_config_content};

/// Load `py2pddl.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, AppError> {
    let path = dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GeneratorConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    debug!(path = %path.display(), "loading config");
    parse_config_content(&content)
}
