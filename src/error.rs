use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    /// A directory on the manifest could not be created.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDirectory { path: PathBuf, source: std::io::Error },

    /// A rendered file could not be written.
    #[error("Failed to write file '{}': {source}", .path.display())]
    WriteFile { path: PathBuf, source: std::io::Error },

    /// Rejected before the scaffolder runs; the engine itself never validates names.
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },
}

impl Error {
    /// Whether this error came from a filesystem mutation during a run.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Error::CreateDirectory { .. } | Error::WriteFile { .. })
    }

    /// The offending path for filesystem errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::CreateDirectory { path, .. } | Error::WriteFile { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for Results with this crate's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
