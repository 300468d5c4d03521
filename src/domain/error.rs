use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for py2pddl-init operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure, including the final skeleton write.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Destination file is already present.
    #[error("{}: this file already exists. Use a different filename.", .0.display())]
    DestinationExists(PathBuf),

    /// A required answer was blank after trimming.
    #[error("{field} cannot be empty")]
    EmptyInput { field: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn empty_input<S: Into<String>>(field: S) -> Self {
        AppError::EmptyInput { field: field.into() }
    }

    /// Closest `io::ErrorKind` for the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DestinationExists(_) => io::ErrorKind::AlreadyExists,
            AppError::EmptyInput { .. } | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
