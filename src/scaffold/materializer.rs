use std::collections::HashSet;
use std::path::PathBuf;

use crate::{
    error::Result,
    ioutils::{create_dir, join_relative},
    template::manifest::prefixes,
};

use super::{operation::ActionRecord, report::Reporter};

/// Ensures every prefix directory of a relative path exists under a root.
///
/// Prefixes are handled root to leaf: `a`, then `a/b`, then `a/b/c`. An
/// existing directory is reported as skipped, a missing one is created and
/// reported as created. Prefixes already handled during this run are
/// neither queried nor reported again.
pub struct DirectoryMaterializer {
    root: PathBuf,
    dry_run: bool,
    materialized: HashSet<String>,
}

impl DirectoryMaterializer {
    pub fn new<P: Into<PathBuf>>(root: P, dry_run: bool) -> Self {
        Self { root: root.into(), dry_run, materialized: HashSet::new() }
    }

    /// Absolute (or root-relative) location of a `/`-separated path.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        join_relative(&self.root, relative)
    }

    /// Whether `relative` was created or skipped earlier in this run.
    pub fn is_materialized(&self, relative: &str) -> bool {
        self.materialized.contains(relative)
    }

    /// Materializes every prefix of `relative`.
    ///
    /// # Arguments
    /// * `relative` - A `/`-separated directory path below the root
    /// * `reporter` - Receives one record per newly handled prefix
    ///
    /// # Returns
    /// * `Ok(())` - All prefixes exist (or would exist, in a dry run)
    /// * `Err(Error::CreateDirectory)` - The first prefix that could not be
    ///   created; later prefixes are not attempted
    pub fn materialize(&mut self, relative: &str, reporter: &mut dyn Reporter) -> Result<()> {
        for prefix in prefixes(relative) {
            if self.is_materialized(prefix) {
                continue;
            }

            let target = self.resolve(prefix);
            let record = if target.is_dir() {
                log::debug!("Directory '{}' already exists", target.display());
                ActionRecord::DirectorySkipped(prefix.to_string())
            } else {
                if self.dry_run {
                    log::debug!("Would create directory '{}'", target.display());
                } else {
                    log::debug!("Creating directory '{}'", target.display());
                    create_dir(&target)?;
                }
                ActionRecord::DirectoryCreated(prefix.to_string())
            };

            self.materialized.insert(prefix.to_string());
            reporter.report(&record);
        }
        Ok(())
    }
}
