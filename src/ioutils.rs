use std::path::{Path, PathBuf};

use crate::{
    constants::PATH_SEPARATOR,
    error::{Error, Result},
};

/// Joins a `/`-separated relative path onto `root`, one segment at a time.
pub fn join_relative<P: AsRef<Path>>(root: P, relative: &str) -> PathBuf {
    relative
        .split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .fold(root.as_ref().to_path_buf(), |path, segment| path.join(segment))
}

/// Creates a single directory. The parent must already exist.
pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir(dest_path)
        .map_err(|source| Error::CreateDirectory { path: dest_path.to_path_buf(), source })
}

/// Writes `content` to `dest_path`, replacing any existing file. Parent
/// directories are not created here.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::write(dest_path, content)
        .map_err(|source| Error::WriteFile { path: dest_path.to_path_buf(), source })
}
