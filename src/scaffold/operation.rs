use serde::Serialize;
use std::fmt::Display;

use crate::constants::{verbs, PATH_SEPARATOR};

/// One unit of work performed by a scaffolding run, in execution order.
///
/// Paths are `/`-separated and relative to the output root, so the first
/// record of a run is always the project directory itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum ActionRecord {
    DirectorySkipped(String),
    DirectoryCreated(String),
    FileCreated(String),
}

impl ActionRecord {
    /// The verb shown in the first report column.
    pub fn verb(&self) -> &'static str {
        match self {
            ActionRecord::DirectorySkipped(_) => verbs::SKIP,
            ActionRecord::DirectoryCreated(_) | ActionRecord::FileCreated(_) => {
                verbs::CREATE
            }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ActionRecord::DirectorySkipped(path)
            | ActionRecord::DirectoryCreated(path)
            | ActionRecord::FileCreated(path) => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        !matches!(self, ActionRecord::FileCreated(_))
    }

    /// The path as printed: directories carry a trailing separator.
    pub fn display_path(&self) -> String {
        if self.is_directory() {
            format!("{}{}", self.path(), PATH_SEPARATOR)
        } else {
            self.path().to_string()
        }
    }
}

impl Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  {:<6}  {}", self.verb(), self.display_path())
    }
}
