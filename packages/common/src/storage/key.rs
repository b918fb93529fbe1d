use std::fmt;

use super::error::StorageError;

/// A validated object key: a relative, `/`-separated path with no traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn parse(key: &str) -> Result<Self, StorageError> {
        let invalid = |msg: &str| Err(StorageError::InvalidKey(format!("{msg}: {key:?}")));

        if key.is_empty() {
            return invalid("empty key");
        }
        if key.starts_with('/') || key.contains('\\') {
            return invalid("key must be a relative '/'-separated path");
        }
        if key.chars().any(|c| c.is_control()) {
            return invalid("control characters are not allowed");
        }
        if key
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return invalid("empty, '.' or '..' path segment");
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key segments, for mapping onto a directory tree.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
