/// Handles argument parsing.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Directory materialization, file writing and action reporting.
pub mod scaffold;

/// Project naming, the template catalog and the manifest.
pub mod template;

pub use error::{Error, Result};
pub use scaffold::{scaffold, ActionRecord, Reporter, ScaffoldOptions, Scaffolder};
pub use template::{manifest::Manifest, naming::ProjectName, Template};
