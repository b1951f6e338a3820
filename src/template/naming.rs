use std::fmt::Display;

use crate::{
    constants::IDENTIFIER_SEPARATORS,
    error::{Error, Result},
};

/// The caller-supplied token naming the generated project.
///
/// The name is used verbatim for paths and display strings, and in its
/// derived identifier form (see [`camelize`]) wherever the generated text
/// must be a valid class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName {
    raw: String,
    identifier: String,
}

impl ProjectName {
    /// Wraps `raw` without checking it. Use [`ProjectName::validate`] first
    /// when the value comes from user input.
    pub fn new<S: Into<String>>(raw: S) -> Self {
        let raw = raw.into();
        let identifier = camelize(&raw);
        Self { raw, identifier }
    }

    /// Checks that `raw` can be used as a single path segment.
    ///
    /// # Returns
    /// * `Ok(ProjectName)` - The validated name
    /// * `Err(Error::InvalidProjectName)` - If the name is empty, contains a
    ///   separator or NUL, or is `.`/`..`
    pub fn validate(raw: &str) -> Result<Self> {
        let reason = if raw.is_empty() {
            Some("must not be empty")
        } else if raw.contains(['/', '\\']) {
            Some("must not contain path separators")
        } else if raw.contains('\0') {
            Some("must not contain NUL bytes")
        } else if raw == "." || raw == ".." {
            Some("must not be a relative directory reference")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidProjectName {
                name: raw.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(Self::new(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The camel-cased form, e.g. `MyTool` for `my_tool`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Splits on `_`, `-` and spaces, upper-cases the first character of every
/// segment and joins the segments without a separator. The rest of each
/// segment is left as is, so `myTOOL` stays `MyTOOL`.
pub fn camelize(value: &str) -> String {
    value
        .split(IDENTIFIER_SEPARATORS)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
