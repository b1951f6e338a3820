use indexmap::IndexMap;

use crate::constants::PATH_SEPARATOR;

use super::{naming::ProjectName, Template};

/// The fixed, ordered set of files that make up a generated project.
///
/// Keys are paths relative to the project directory. Iteration follows
/// insertion order, which is the order files are written in.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: IndexMap<String, Template>,
}

impl Manifest {
    pub fn for_project(name: &ProjectName) -> Self {
        let entries =
            Template::ALL.iter().map(|template| (template.path(name), *template)).collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Template)> + '_ {
        self.entries.iter().map(|(path, template)| (path.as_str(), *template))
    }
}

/// The parent directory of a `/`-separated path, e.g. `mrblib` for
/// `mrblib/widget.rb`; `None` for files at the root.
pub fn parent_dir(path: &str) -> Option<&str> {
    path.rsplit_once(PATH_SEPARATOR).map(|(parent, _)| parent)
}

/// Cumulative prefixes of a `/`-separated path: `a`, `a/b`, `a/b/c`.
pub fn prefixes(path: &str) -> Vec<&str> {
    let mut prefixes = Vec::new();
    for (idx, ch) in path.char_indices() {
        if ch == PATH_SEPARATOR && idx > 0 {
            prefixes.push(&path[..idx]);
        }
    }
    if !path.is_empty() && !path.ends_with(PATH_SEPARATOR) {
        prefixes.push(path);
    }
    prefixes
}
